// src/protocol.rs

// このファイルは、画面 (JS / View) とゲームロジックの間で
// やり取りするデータの形式を定義するよ！💌
// 入力は InputEvent、出力は GameStateData。どっちも serde で JSON にできる。
use serde::{Deserialize, Serialize};

use crate::components::game_state::GameStatus;

// --- View からコントローラーへ (入力) ---

/// View が GameController に送る入力イベントだよ。
///
/// JSON だと `{"type": "PickCard", "index": 3}` みたいな形。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum InputEvent {
    Start,
    Pause,
    Resume,
    /// 同じ配置のままやり直し
    RetrySamePositions,
    /// シャッフルしてやり直し
    RetryShuffled,
    /// スタート画面に戻る
    RestartToMenu,
    /// デッキの `index` 番目のカードをめくる
    PickCard { index: usize },
}

// --- コントローラーから View へ (描画用データ) ---

/// カード 1 枚分の描画用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub index: usize,
    pub name: String,
    pub image: String,
    pub is_face_up: bool,
    pub is_matched: bool,
}

/// 画面を描くのに必要なゲーム状態のまるごとスナップショット。
///
/// `epoch` はスタートややり直しのたびに増える番号。View はこれが変わったら
/// カードの並びを作り直せばいい。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub status: GameStatus,
    pub cards: Vec<CardData>,
    pub score: u32,
    pub elapsed_seconds: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub epoch: u64,
}
