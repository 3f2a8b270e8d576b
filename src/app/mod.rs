// src/app/mod.rs
//! GameApp (ブラウザ側) の内部ロジックを役割ごとに分割して置くモジュールだよ！
//! ゲームのルールは全部 controller にあって、ここは DOM とタイマーの配線だけ。

pub mod browser_timers;
pub mod context;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod state_getter;
