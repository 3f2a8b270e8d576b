// src/controller/game_controller.rs

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Card, CatalogEntry, GameStatus, Selection};
use crate::config::GameConfig;
use crate::controller::effects::{DeferredTask, Effect, TaskKind};
use crate::error::CatalogError;
use crate::logic::catalog::validate_catalog;
use crate::logic::deck::{create_deck, has_exact_pairs, pair_count, reset_cards, shuffle_deck_with};
use crate::logic::rules::{check_win_condition, validate_pick};
use crate::protocol::{CardData, GameStateData, InputEvent};

/// ゲームの状態を全部まとめて持つステートマシンだよ！🎮
///
/// デッキ、選択中のカード、スコア、経過時間、揃ったペア数、ゲーム状態は
/// 全部この構造体だけが持ってる。外からは `handle` (か個別のメソッド) で
/// イベントを渡すだけ。返ってくる `Vec<Effect>` はタイマーへの指示なので、
/// 呼び出し側が実行してね。
pub struct GameController {
    config: GameConfig,
    deck: Vec<Card>,
    selection: Selection,
    status: GameStatus,
    score: u32,
    /// 経過時間 (ミリ秒)。tick ごとに tick 間隔ぶん増える。
    elapsed_ms: u64,
    matched_pairs: usize,
    /// 2 枚目をめくってから判定が終わるまでのロック
    locked: bool,
    /// 勝利タスクを予約済みか (勝利は一回だけ！)
    victory_pending: bool,
    /// スタート・やり直しのたびに増える番号。古い遅延タスクの判別用。
    epoch: u64,
    rng: StdRng,
}

impl GameController {
    /// カタログからコントローラーを作る。乱数はエントロピーから。
    pub fn new(catalog: &[CatalogEntry], config: GameConfig) -> Result<Self, CatalogError> {
        Self::with_rng(catalog, config, StdRng::from_entropy())
    }

    /// シード固定版。テストで並びを再現したい時に使う。
    pub fn with_seed(catalog: &[CatalogEntry], config: GameConfig, seed: u64) -> Result<Self, CatalogError> {
        Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &[CatalogEntry], config: GameConfig, mut rng: StdRng) -> Result<Self, CatalogError> {
        validate_catalog(catalog)?;
        let mut deck = create_deck(catalog);
        // 読み込み直後にも一回シャッフルしておく
        shuffle_deck_with(&mut deck, &mut rng);
        debug_assert!(has_exact_pairs(&deck));
        info!("GameController: ready with {} cards ({} pairs)", deck.len(), catalog.len());
        Ok(Self {
            config,
            deck,
            selection: Selection::default(),
            status: GameStatus::NotStarted,
            score: 0,
            elapsed_ms: 0,
            matched_pairs: 0,
            locked: false,
            victory_pending: false,
            epoch: 0,
            rng,
        })
    }

    // --- 入力の振り分け ---

    /// View から来た入力イベントを処理する。
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        debug!("GameController: handling {:?} in {:?}", event, self.status);
        match event {
            InputEvent::Start => self.start(),
            InputEvent::Pause => self.pause(),
            InputEvent::Resume => self.resume(),
            InputEvent::RetrySamePositions => self.retry_same_positions(),
            InputEvent::RetryShuffled => self.retry_shuffled(),
            InputEvent::RestartToMenu => self.restart_to_menu(),
            InputEvent::PickCard { index } => self.pick_card(index),
        }
    }

    // --- 状態遷移 ---

    /// NotStarted → Running。シャッフルして全部リセット。
    pub fn start(&mut self) -> Vec<Effect> {
        if self.status != GameStatus::NotStarted {
            debug!("GameController: start ignored in {:?}", self.status);
            return Vec::new();
        }
        self.reshuffle();
        info!("GameController: game started");
        self.begin_round()
    }

    /// Running → Paused。カウンターも盤面もそのまま、タイマーだけ止める。
    pub fn pause(&mut self) -> Vec<Effect> {
        if self.status != GameStatus::Running {
            debug!("GameController: pause ignored in {:?}", self.status);
            return Vec::new();
        }
        self.status = GameStatus::Paused;
        info!("GameController: paused at {}s", self.elapsed_seconds());
        vec![Effect::StopTicker]
    }

    /// Paused → Running。止めた所からタイマー再開。
    pub fn resume(&mut self) -> Vec<Effect> {
        if self.status != GameStatus::Paused {
            debug!("GameController: resume ignored in {:?}", self.status);
            return Vec::new();
        }
        self.status = GameStatus::Running;
        info!("GameController: resumed at {}s", self.elapsed_seconds());
        vec![Effect::StartTicker { interval_ms: self.config.tick_interval() }]
    }

    /// 同じ並びのままやり直し (Running / Won から)。
    pub fn retry_same_positions(&mut self) -> Vec<Effect> {
        if !self.status.accepts_restart() {
            debug!("GameController: retry ignored in {:?}", self.status);
            return Vec::new();
        }
        info!("GameController: retrying with the same card positions");
        self.begin_round()
    }

    /// シャッフルしてやり直し (Running / Won から)。
    pub fn retry_shuffled(&mut self) -> Vec<Effect> {
        if !self.status.accepts_restart() {
            debug!("GameController: shuffled retry ignored in {:?}", self.status);
            return Vec::new();
        }
        self.reshuffle();
        info!("GameController: retrying with a reshuffled deck");
        self.begin_round()
    }

    /// スタート画面に戻る (Running / Won から)。全部クリアしてタイマー停止。
    pub fn restart_to_menu(&mut self) -> Vec<Effect> {
        if !self.status.accepts_restart() {
            debug!("GameController: restart ignored in {:?}", self.status);
            return Vec::new();
        }
        self.reset_board();
        self.status = GameStatus::NotStarted;
        info!("GameController: back to the menu");
        vec![Effect::StopTicker]
    }

    /// タイマーの 1 tick。Running の時だけ tick 間隔ぶん時間を進める。
    pub fn tick(&mut self) -> Vec<Effect> {
        if self.status.is_ticking() {
            self.elapsed_ms += u64::from(self.config.tick_interval());
        } else {
            debug!("GameController: tick ignored in {:?}", self.status);
        }
        Vec::new()
    }

    // --- カードをめくる ---

    /// `index` 番目のカードをめくる。このゲームの心臓部！💓
    ///
    /// 1 枚目なら覚えておくだけ。2 枚目ならスコア +1 してロックをかけ、
    /// 同じ名前ならその場で確定、違えば `mismatch_delay_ms` 後に裏返すタスクを返す。
    pub fn pick_card(&mut self, index: usize) -> Vec<Effect> {
        if let Err(reason) = validate_pick(self.status, self.locked, &self.deck, &self.selection, index) {
            debug!("GameController: pick {} ignored ({:?})", index, reason);
            return Vec::new();
        }

        self.deck[index].is_face_up = true;

        let Some(first) = self.selection.first else {
            self.selection.first = Some(index);
            return Vec::new();
        };

        self.selection.second = Some(index);
        self.score += 1;
        self.locked = true;

        if self.deck[first].pairs_with(&self.deck[index]) {
            self.deck[first].is_matched = true;
            self.deck[index].is_matched = true;
            self.matched_pairs += 1;
            self.selection.clear();
            self.locked = false;
            info!(
                "GameController: matched {:?} ({}/{})",
                self.deck[index].name,
                self.matched_pairs,
                self.total_pairs()
            );
            self.evaluate_win()
        } else {
            debug!("GameController: mismatch {} / {}", first, index);
            vec![Effect::Schedule {
                task: DeferredTask {
                    kind: TaskKind::ConcealMismatch { first, second: index },
                    epoch: self.epoch,
                },
                delay_ms: self.config.mismatch_delay_ms,
            }]
        }
    }

    /// 予約しておいた遅延タスクを実行する。
    ///
    /// 予約後にやり直しが入っていたら (epoch が違う) 何もしない。
    /// 一時停止中でも実行するよ。
    pub fn run_deferred(&mut self, task: DeferredTask) -> Vec<Effect> {
        if task.epoch != self.epoch {
            debug!("GameController: stale task {:?} dropped (epoch {})", task, self.epoch);
            return Vec::new();
        }
        match task.kind {
            TaskKind::ConcealMismatch { first, second } => {
                for index in [first, second] {
                    if let Some(card) = self.deck.get_mut(index) {
                        if !card.is_matched {
                            card.is_face_up = false;
                        }
                    }
                }
                self.selection.clear();
                self.locked = false;
                Vec::new()
            }
            TaskKind::DeclareVictory => {
                let in_play = matches!(self.status, GameStatus::Running | GameStatus::Paused);
                if !self.victory_pending || !in_play {
                    return Vec::new();
                }
                self.victory_pending = false;
                self.status = GameStatus::Won;
                info!(
                    "GameController: won in {}s with {} moves 🏆",
                    self.elapsed_seconds(), self.score
                );
                vec![Effect::StopTicker]
            }
        }
    }

    // --- 読み取り ---

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 経過時間 (秒、切り捨て)
    pub fn elapsed_seconds(&self) -> u32 {
        u32::try_from(self.elapsed_ms / 1000).unwrap_or(u32::MAX)
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        pair_count(&self.deck)
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 描画用のスナップショット。スタート画面ではカードを見せない。
    pub fn snapshot(&self) -> GameStateData {
        let cards = if self.status == GameStatus::NotStarted {
            Vec::new()
        } else {
            self.deck
                .iter()
                .enumerate()
                .map(|(index, card)| CardData {
                    index,
                    name: card.name.clone(),
                    image: card.image.clone(),
                    is_face_up: card.is_face_up,
                    is_matched: card.is_matched,
                })
                .collect()
        };
        GameStateData {
            status: self.status,
            cards,
            score: self.score,
            elapsed_seconds: self.elapsed_seconds(),
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            epoch: self.epoch,
        }
    }

    // --- 内部ヘルパー ---

    fn reshuffle(&mut self) {
        shuffle_deck_with(&mut self.deck, &mut self.rng);
        debug_assert!(has_exact_pairs(&self.deck), "シャッフルでペアが崩れた");
    }

    /// カウンター・選択・カードの状態を全部初期化。並び順はそのまま。
    /// epoch を進めるので、待ってる遅延タスクは全部無効になる。
    fn reset_board(&mut self) {
        self.epoch += 1;
        reset_cards(&mut self.deck);
        self.selection.clear();
        self.locked = false;
        self.victory_pending = false;
        self.score = 0;
        self.elapsed_ms = 0;
        self.matched_pairs = 0;
    }

    fn begin_round(&mut self) -> Vec<Effect> {
        self.reset_board();
        self.status = GameStatus::Running;
        vec![Effect::StartTicker { interval_ms: self.config.tick_interval() }]
    }

    fn evaluate_win(&mut self) -> Vec<Effect> {
        if self.victory_pending || !check_win_condition(self.matched_pairs, self.total_pairs()) {
            return Vec::new();
        }
        self.victory_pending = true;
        vec![Effect::Schedule {
            task: DeferredTask { kind: TaskKind::DeclareVictory, epoch: self.epoch },
            delay_ms: self.config.victory_delay_ms,
        }]
    }
}
