// src/controller/effects.rs
//! コントローラーが「外の世界にやってほしいこと」を表す型だよ。
//!
//! コントローラー自身はタイマーを一切触らない。代わりに各ハンドラが
//! `Vec<Effect>` を返して、ブラウザ側 (setInterval / setTimeout) や
//! テスト用の `VirtualClock` がそれを実行するんだ。

use serde::{Deserialize, Serialize};

/// 後で一回だけ実行してほしい処理の中身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// ハズレた 2 枚を裏返してロックを外す
    ConcealMismatch { first: usize, second: usize },
    /// 勝利状態に切り替える
    DeclareVictory,
}

/// 遅延タスク。`epoch` は予約した時点のゲーム番号で、
/// やり直し後に古いタスクが届いても無視できるようにしてる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredTask {
    pub kind: TaskKind,
    pub epoch: u64,
}

/// タイマー操作の指示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// 定期 tick を (張り直して) 開始
    StartTicker { interval_ms: u32 },
    /// 定期 tick を止める
    StopTicker,
    /// `delay_ms` 後に `task` を一回だけ実行
    Schedule { task: DeferredTask, delay_ms: u32 },
}
