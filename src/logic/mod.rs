// src/logic/mod.rs
//! 画面に依存しないゲームロジック (デッキ、カタログ、ルール)。

pub mod catalog;
pub mod deck;
pub mod rules;
