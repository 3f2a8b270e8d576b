// src/app/state_getter.rs
//! コントローラーの今の状態を JSON 文字列にして JS に渡すよ。

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::app::context::lock_or_recover;
use crate::controller::GameController;

/// スナップショットを JSON にする
pub fn snapshot_json(controller: &GameController) -> Result<String, serde_json::Error> {
    let snapshot = controller.snapshot();
    debug!(
        "StateGetter: {:?}, {} cards, score {}",
        snapshot.status,
        snapshot.cards.len(),
        snapshot.score
    );
    serde_json::to_string(&snapshot)
}

/// GameApp::get_state_json から呼ばれる版。エラーは JS 向けに変換する。
pub(crate) fn get_state_json(controller: &Arc<Mutex<GameController>>) -> Result<String, JsValue> {
    let controller = lock_or_recover(controller);
    snapshot_json(&controller).map_err(|e| {
        let message = format!("Failed to serialize game state: {}", e);
        error!("{}", message);
        JsValue::from_str(&message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CatalogEntry, GameStatus};
    use crate::config::GameConfig;
    use crate::protocol::GameStateData;

    fn catalog() -> Vec<CatalogEntry> {
        ["cat", "dog"]
            .iter()
            .map(|name| CatalogEntry { name: name.to_string(), image: format!("img/{}.png", name) })
            .collect()
    }

    #[test]
    fn json_reflects_the_controller() {
        let mut controller = GameController::with_seed(&catalog(), GameConfig::default(), 3).unwrap();
        controller.start();
        controller.pick_card(0);

        let json = snapshot_json(&controller).unwrap();
        let parsed: GameStateData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, GameStatus::Running);
        assert_eq!(parsed.cards.len(), 4);
        assert!(parsed.cards[0].is_face_up);
        assert_eq!(parsed.total_pairs, 2);
    }

    #[test]
    fn shared_controller_can_be_read() {
        let controller = GameController::with_seed(&catalog(), GameConfig::default(), 3).unwrap();
        let shared = Arc::new(Mutex::new(controller));
        let json = get_state_json(&shared).unwrap();
        assert!(json.contains("\"NotStarted\""));
    }
}
