// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // ブラウザ側 (DOM、タイマー、クリック)
pub mod components; // カードや状態などのデータ型
pub mod config; // 設定と画面の定数
pub mod controller; // ゲームの状態機械
pub mod error;
pub mod logging;
pub mod logic; // デッキ、カタログ、ルール
pub mod protocol; // View とのデータのやり取り

pub use app::game_app::GameApp;
pub use app::init_handler::load_game;
pub use components::{Card, CatalogEntry, GameStatus};
pub use config::GameConfig;
pub use controller::{Effect, GameController, VirtualClock};
pub use error::CatalogError;
pub use protocol::{GameStateData, InputEvent};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // 設定を読むまでは Info。GameApp を作る時に設定のレベルに変わる。
    logging::init(log::LevelFilter::Info);
    log::info!("wasm_memory_game: module loaded");
}
