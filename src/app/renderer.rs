// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//!
//! `GameStateData` を受け取って DOM に反映するだけ。ゲームの状態は一切いじらないよ。

use std::cell::{Cell, RefCell};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

use crate::components::GameStatus;
use crate::config::layout::*;
use crate::protocol::{CardData, GameStateData};

// --- 表示用の整形 (純粋関数) ---

/// 経過秒を `MM:SS` にする (タイマー表示用)
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// 勝利画面用の `M:SS`
pub fn format_victory_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// 失敗した画像読み込みのログ文面
pub(crate) fn image_failure_message(src: Option<&str>) -> String {
    format!("Failed to load image: {}", src.unwrap_or("<unknown>"))
}

/// 状態ごとに画面のどこを出す/隠すか。DOM に触らないのでネイティブでもテストできる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewFlags {
    pub start_overlay_hidden: bool,
    pub pause_overlay_hidden: bool,
    pub victory_overlay_hidden: bool,
    pub container_blurred: bool,
    pub restart_disabled: bool,
    pub pause_disabled: bool,
    pub pause_label: &'static str,
    /// 勝利画面のタイムと手数を書き込むか
    pub show_victory_stats: bool,
}

impl ViewFlags {
    pub fn from_status(status: GameStatus) -> Self {
        Self {
            start_overlay_hidden: status != GameStatus::NotStarted,
            pause_overlay_hidden: status != GameStatus::Paused,
            victory_overlay_hidden: status != GameStatus::Won,
            container_blurred: status != GameStatus::Running,
            restart_disabled: status == GameStatus::NotStarted,
            pause_disabled: matches!(status, GameStatus::NotStarted | GameStatus::Won),
            pause_label: if status == GameStatus::Paused { PAUSED_LABEL } else { PAUSE_LABEL },
            show_victory_stats: status == GameStatus::Won,
        }
    }
}

/// グリッドを作り直すかどうか。epoch が変わったか、枚数が合わない時。
pub(crate) fn needs_rebuild(rendered_epoch: Option<u64>, rendered_len: usize, state: &GameStateData) -> bool {
    rendered_epoch != Some(state.epoch) || rendered_len != state.cards.len()
}

// --- DOM ---

/// 画面の要素への参照をまとめて持っておく構造体。
/// グリッド以外は無くても動く (ページ側の都合で省略されてもOK)。
pub(crate) struct DomView {
    document: Document,
    grid: Element,
    game_container: Option<Element>,
    score: Option<Element>,
    timer: Option<Element>,
    start_overlay: Option<Element>,
    pause_overlay: Option<Element>,
    victory_overlay: Option<Element>,
    victory_time: Option<Element>,
    victory_moves: Option<Element>,
    restart_button: Option<HtmlButtonElement>,
    pause_button: Option<HtmlButtonElement>,
    /// 今グリッドに並んでるカード要素 (デッキ順)
    card_elements: RefCell<Vec<Element>>,
    /// 最後にグリッドを組み立てた時の epoch
    rendered_epoch: Cell<Option<u64>>,
}

impl DomView {
    pub fn from_document(document: Document) -> Result<Self, JsValue> {
        let grid = document
            .query_selector(GRID_CONTAINER_SELECTOR)?
            .ok_or("Missing .grid-container element")?;
        let select = |selector: &str| document.query_selector(selector).ok().flatten();
        let by_id = |id: &str| document.get_element_by_id(id);
        let button = |id: &str| by_id(id).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

        Ok(Self {
            game_container: select(GAME_CONTAINER_SELECTOR),
            score: select(SCORE_SELECTOR),
            timer: select(TIMER_SELECTOR),
            start_overlay: by_id(START_OVERLAY_ID),
            pause_overlay: by_id(PAUSE_OVERLAY_ID),
            victory_overlay: by_id(VICTORY_OVERLAY_ID),
            victory_time: select(VICTORY_TIME_SELECTOR),
            victory_moves: select(VICTORY_MOVES_SELECTOR),
            restart_button: button(RESTART_BUTTON_ID),
            pause_button: button(PAUSE_BUTTON_ID),
            card_elements: RefCell::new(Vec::new()),
            rendered_epoch: Cell::new(None),
            grid,
            document,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn grid(&self) -> &Element {
        &self.grid
    }

    /// スナップショットを画面に反映する。
    pub fn render(&self, state: &GameStateData) -> Result<(), JsValue> {
        let flags = ViewFlags::from_status(state.status);
        self.render_cards(state)?;
        self.render_hud(state, &flags);
        self.render_overlays(&flags)?;
        Ok(())
    }

    fn render_cards(&self, state: &GameStateData) -> Result<(), JsValue> {
        let rendered_len = self.card_elements.borrow().len();
        if needs_rebuild(self.rendered_epoch.get(), rendered_len, state) {
            self.grid.set_inner_html("");
            let mut elements = Vec::with_capacity(state.cards.len());
            for card in &state.cards {
                let element = self.create_card_element(card)?;
                self.grid.append_child(&element)?;
                elements.push(element);
            }
            *self.card_elements.borrow_mut() = elements;
            self.rendered_epoch.set(Some(state.epoch));
        }

        for (element, card) in self.card_elements.borrow().iter().zip(&state.cards) {
            set_class(element, CLASS_FLIPPED, card.is_face_up || card.is_matched)?;
            set_class(element, CLASS_MATCHED, card.is_matched)?;
        }
        Ok(())
    }

    /// `div.card > (div.front > img.front-image) + div.back` を組み立てる。
    /// 画像の読み込み失敗はグリッドの error リスナー (キャプチャ) が拾う。
    fn create_card_element(&self, card: &CardData) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.class_list().add_1(CLASS_CARD)?;
        element.set_attribute(CARD_NAME_ATTR, &card.name)?;
        element.set_attribute(CARD_INDEX_ATTR, &card.index.to_string())?;

        let front = self.document.create_element("div")?;
        front.class_list().add_1(CLASS_CARD_FRONT)?;
        let image = self.document.create_element("img")?;
        image.class_list().add_1(CLASS_CARD_IMAGE)?;
        image.set_attribute("src", &card.image)?;
        image.set_attribute("alt", &card.name)?;
        front.append_child(&image)?;

        let back = self.document.create_element("div")?;
        back.class_list().add_1(CLASS_CARD_BACK)?;

        element.append_child(&front)?;
        element.append_child(&back)?;
        Ok(element)
    }

    fn render_hud(&self, state: &GameStateData, flags: &ViewFlags) {
        if let Some(score) = &self.score {
            score.set_text_content(Some(&state.score.to_string()));
        }
        if let Some(timer) = &self.timer {
            timer.set_text_content(Some(&format_clock(state.elapsed_seconds)));
        }
        if flags.show_victory_stats {
            if let Some(time) = &self.victory_time {
                time.set_text_content(Some(&format!("Time: {}", format_victory_time(state.elapsed_seconds))));
            }
            if let Some(moves) = &self.victory_moves {
                moves.set_text_content(Some(&format!("Moves: {}", state.score)));
            }
        }
    }

    fn render_overlays(&self, flags: &ViewFlags) -> Result<(), JsValue> {
        if let Some(overlay) = &self.start_overlay {
            set_class(overlay, CLASS_HIDDEN, flags.start_overlay_hidden)?;
        }
        if let Some(overlay) = &self.pause_overlay {
            set_class(overlay, CLASS_HIDDEN, flags.pause_overlay_hidden)?;
        }
        if let Some(overlay) = &self.victory_overlay {
            set_class(overlay, CLASS_HIDDEN, flags.victory_overlay_hidden)?;
        }
        if let Some(container) = &self.game_container {
            set_class(container, CLASS_BLURRED, flags.container_blurred)?;
        }
        if let Some(button) = &self.restart_button {
            button.set_disabled(flags.restart_disabled);
        }
        if let Some(button) = &self.pause_button {
            button.set_disabled(flags.pause_disabled);
            button.set_text_content(Some(flags.pause_label));
        }
        Ok(())
    }
}

fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(epoch: u64, cards: usize) -> GameStateData {
        GameStateData {
            status: GameStatus::Running,
            cards: (0..cards)
                .map(|index| CardData {
                    index,
                    name: format!("c{}", index / 2),
                    image: format!("img/c{}.png", index / 2),
                    is_face_up: false,
                    is_matched: false,
                })
                .collect(),
            score: 0,
            elapsed_seconds: 0,
            matched_pairs: 0,
            total_pairs: cards / 2,
            epoch,
        }
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn victory_time_pads_seconds_only() {
        assert_eq!(format_victory_time(5), "0:05");
        assert_eq!(format_victory_time(125), "2:05");
    }

    #[test]
    fn flags_in_the_menu() {
        let flags = ViewFlags::from_status(GameStatus::NotStarted);
        assert!(!flags.start_overlay_hidden);
        assert!(flags.pause_overlay_hidden);
        assert!(flags.victory_overlay_hidden);
        assert!(flags.container_blurred);
        assert!(flags.restart_disabled);
        assert!(flags.pause_disabled);
        assert_eq!(flags.pause_label, PAUSE_LABEL);
        assert!(!flags.show_victory_stats);
    }

    #[test]
    fn flags_while_running() {
        let flags = ViewFlags::from_status(GameStatus::Running);
        assert!(flags.start_overlay_hidden);
        assert!(flags.pause_overlay_hidden);
        assert!(flags.victory_overlay_hidden);
        assert!(!flags.container_blurred, "遊んでる間だけぼかさない");
        assert!(!flags.restart_disabled);
        assert!(!flags.pause_disabled);
        assert_eq!(flags.pause_label, PAUSE_LABEL);
        assert!(!flags.show_victory_stats);
    }

    #[test]
    fn flags_while_paused() {
        let flags = ViewFlags::from_status(GameStatus::Paused);
        assert!(flags.start_overlay_hidden);
        assert!(!flags.pause_overlay_hidden);
        assert!(flags.victory_overlay_hidden);
        assert!(flags.container_blurred);
        assert!(!flags.restart_disabled);
        assert!(!flags.pause_disabled);
        assert_eq!(flags.pause_label, PAUSED_LABEL);
        assert!(!flags.show_victory_stats);
    }

    #[test]
    fn flags_after_victory() {
        let flags = ViewFlags::from_status(GameStatus::Won);
        assert!(flags.start_overlay_hidden);
        assert!(flags.pause_overlay_hidden);
        assert!(!flags.victory_overlay_hidden);
        assert!(flags.container_blurred);
        assert!(!flags.restart_disabled);
        assert!(flags.pause_disabled);
        assert_eq!(flags.pause_label, PAUSE_LABEL);
        assert!(flags.show_victory_stats);
    }

    #[test]
    fn grid_rebuilds_on_new_epoch_or_size() {
        assert!(needs_rebuild(None, 0, &state(0, 4)), "初回は必ず作る");
        assert!(!needs_rebuild(Some(1), 4, &state(1, 4)));
        assert!(needs_rebuild(Some(1), 4, &state(2, 4)), "やり直したら作り直す");
        assert!(needs_rebuild(Some(1), 4, &state(1, 0)), "メニューに戻ったら空にする");
    }

    #[test]
    fn image_failure_names_the_source() {
        assert_eq!(image_failure_message(Some("img/fox.png")), "Failed to load image: img/fox.png");
        assert_eq!(image_failure_message(None), "Failed to load image: <unknown>");
    }
}

// ブラウザ上 (wasm-pack test --headless) で DOM まで確認するテスト
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card(index: usize, name: &str) -> CardData {
        CardData {
            index,
            name: name.to_string(),
            image: format!("img/{}.png", name),
            is_face_up: false,
            is_matched: false,
        }
    }

    fn state(epoch: u64, status: GameStatus) -> GameStateData {
        GameStateData {
            status,
            cards: vec![card(0, "a"), card(1, "b"), card(2, "a"), card(3, "b")],
            score: 0,
            elapsed_seconds: 0,
            matched_pairs: 0,
            total_pairs: 2,
            epoch,
        }
    }

    /// テスト用のグリッドを body に置いて DomView を作る
    fn mount() -> (Element, DomView) {
        let document = web_sys::window().unwrap().document().unwrap();
        let grid = document.create_element("div").unwrap();
        grid.class_list().add_1("grid-container").unwrap();
        document.body().unwrap().append_child(&grid).unwrap();
        let view = DomView::from_document(document).unwrap();
        (grid, view)
    }

    #[wasm_bindgen_test]
    fn clock_formats_in_browser() {
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_victory_time(61), "1:01");
    }

    #[wasm_bindgen_test]
    fn card_elements_are_built_as_nodes() {
        let (grid, view) = mount();
        let mut data = state(1, GameStatus::Running);
        data.cards[0].name = "tom & \"jerry\"".to_string();
        view.render(&data).unwrap();

        assert_eq!(grid.child_element_count(), 4);
        let first = grid.first_element_child().unwrap();
        assert_eq!(first.get_attribute("data-index").as_deref(), Some("0"));
        assert_eq!(first.get_attribute("data-name").as_deref(), Some("tom & \"jerry\""));
        let image = first.query_selector(".front > img.front-image").unwrap().unwrap();
        assert_eq!(image.get_attribute("alt").as_deref(), Some("tom & \"jerry\""));
        assert!(first.query_selector(".back").unwrap().is_some());
        grid.remove();
    }

    #[wasm_bindgen_test]
    fn grid_is_rebuilt_only_when_epoch_changes() {
        let (grid, view) = mount();
        view.render(&state(1, GameStatus::Running)).unwrap();
        let before = grid.first_element_child().unwrap();

        // 同じ epoch でカードをめくっただけなら要素はそのまま
        let mut flipped = state(1, GameStatus::Running);
        flipped.cards[0].is_face_up = true;
        view.render(&flipped).unwrap();
        let same = grid.first_element_child().unwrap();
        assert_eq!(same, before);
        assert!(same.class_list().contains("flipped"));

        // epoch が変わったら作り直し
        view.render(&state(2, GameStatus::Running)).unwrap();
        let rebuilt = grid.first_element_child().unwrap();
        assert_ne!(rebuilt, before);
        assert!(!rebuilt.class_list().contains("flipped"));
        assert_eq!(grid.child_element_count(), 4);
        grid.remove();
    }
}
