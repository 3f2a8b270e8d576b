// src/components/mod.rs

// ゲームの状態を作るデータ部品たち！
pub mod card;
pub mod game_state;
pub mod selection;

pub use card::{Card, CatalogEntry};
pub use game_state::GameStatus;
pub use selection::Selection;
