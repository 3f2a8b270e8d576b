// src/app/game_app.rs

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{window, Event};

use crate::app::browser_timers::{self, BrowserTimers};
use crate::app::context::{lock_or_recover, AppContext};
use crate::app::event_handler;
use crate::app::renderer::DomView;
use crate::app::state_getter;
use crate::components::CatalogEntry;
use crate::config::GameConfig;
use crate::controller::GameController;
use crate::logic::catalog::parse_catalog;
use crate::protocol::InputEvent;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    context: AppContext,
    // クリックのリスナー。drop するとリスナーが外れるので持っておく！
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl GameApp {
    /// カタログと設定から GameApp を組み立てる。ページの要素にリスナーもつけるよ。
    pub(crate) fn from_catalog(catalog: &[CatalogEntry], config: GameConfig) -> Result<GameApp, JsValue> {
        log::set_max_level(config.level_filter());

        let controller = GameController::new(catalog, config)?;
        let document = window()
            .and_then(|w| w.document())
            .ok_or("Failed to get document")?;
        let view = DomView::from_document(document)?;

        let context = AppContext {
            controller: Arc::new(Mutex::new(controller)),
            timers: Arc::new(Mutex::new(BrowserTimers::default())),
            view: Rc::new(view),
        };
        let listeners = event_handler::attach_listeners(&context)?;
        context.render();

        info!("GameApp: ready with {} pairs", catalog.len());
        Ok(GameApp { context, _listeners: listeners })
    }
}

// GameApp のメソッド (JS から呼べる)
#[wasm_bindgen]
impl GameApp {
    /// カタログ JSON を直接渡して作る版。fetch は `load_game` のほうでやってるよ。
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_optional_json(config_json.as_deref());
        let catalog = parse_catalog(catalog_json)?;
        Self::from_catalog(&catalog, config)
    }

    pub fn start(&self) {
        self.context.dispatch(InputEvent::Start);
    }

    pub fn pause(&self) {
        self.context.dispatch(InputEvent::Pause);
    }

    pub fn resume(&self) {
        self.context.dispatch(InputEvent::Resume);
    }

    pub fn retry_same_positions(&self) {
        self.context.dispatch(InputEvent::RetrySamePositions);
    }

    pub fn retry_shuffled(&self) {
        self.context.dispatch(InputEvent::RetryShuffled);
    }

    pub fn restart_to_menu(&self) {
        self.context.dispatch(InputEvent::RestartToMenu);
    }

    pub fn pick_card(&self, index: usize) {
        self.context.dispatch(InputEvent::PickCard { index });
    }

    /// `{"type":"PickCard","index":3}` みたいな JSON で入力を送る
    pub fn dispatch_json(&self, event_json: &str) -> Result<(), JsValue> {
        let event: InputEvent = serde_json::from_str(event_json).map_err(|e| {
            warn!("GameApp: rejected input {:?}: {}", event_json, e);
            JsValue::from_str(&format!("Invalid input event: {}", e))
        })?;
        self.context.dispatch(event);
        Ok(())
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.context.controller)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        lock_or_recover(&self.context.controller).elapsed_seconds()
    }

    pub fn score(&self) -> u32 {
        lock_or_recover(&self.context.controller).score()
    }

    /// 画面を描き直す (普通は入力のたびに勝手に描かれるので要らない)
    pub fn render(&self) {
        self.context.render();
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        // ticker の Closure が context を掴んでるので、ここで切っておく
        browser_timers::stop_ticker(&self.context.timers);
        info!("GameApp: dropped");
    }
}
