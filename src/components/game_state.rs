// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// どの入力を受け付けるかはこの状態で決まる。
/// 受け付けない状態で来た入力は、エラーじゃなくて単に無視 (no-op) するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// スタート画面。カードはまだ並んでない。
    #[default]
    NotStarted,
    /// プレイ中。タイマーが動いてる。
    Running,
    /// 一時停止中。タイマーも止まってる。
    Paused,
    /// 全ペア揃った！🏆
    Won,
}

impl GameStatus {
    /// カードをめくれる状態？
    pub fn accepts_picks(self) -> bool {
        self == GameStatus::Running
    }

    /// Retry 系 / RestartToMenu を受け付ける状態？
    pub fn accepts_restart(self) -> bool {
        matches!(self, GameStatus::Running | GameStatus::Won)
    }

    /// タイマーが動いているべき状態？
    pub fn is_ticking(self) -> bool {
        self == GameStatus::Running
    }
}
