// src/controller/mod.rs
//! ゲームの状態遷移 (GameController) と、その周りのタイマー指示・仮想時計。

pub mod effects;
pub mod game_controller;
pub mod scheduler;


pub use effects::{DeferredTask, Effect, TaskKind};
pub use game_controller::GameController;
pub use scheduler::VirtualClock;
