// src/config/mod.rs
//! 設定まわり。画面の定数 (layout) と時間の設定 (timing)。

pub mod layout;
pub mod timing;

pub use timing::GameConfig;
