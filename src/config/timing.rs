// src/config/timing.rs
//! タイマーや遅延時間の設定だよ。
//!
//! デフォルト値は定数で持っておいて、JS 側から JSON で上書きもできるようにしてる。
//! 書かなかった項目はデフォルトのまま！ (`#[serde(default)]`)

use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};

/// 経過時間タイマーの間隔 (ミリ秒)。
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;
/// これより短い間隔は切り上げる (0 だと setInterval が回りっぱなしになる)
pub const MIN_TICK_INTERVAL_MS: u32 = 100;
/// ハズレたカードを裏返すまでの待ち時間 (ミリ秒)
pub const DEFAULT_MISMATCH_DELAY_MS: u32 = 1000;
/// 最後のペアが揃ってから勝利画面を出すまでの待ち時間 (ミリ秒)
pub const DEFAULT_VICTORY_DELAY_MS: u32 = 500;
/// カードカタログの置き場所
pub const DEFAULT_CATALOG_URL: &str = "data/data.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// ゲーム全体の設定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_interval_ms: u32,
    pub mismatch_delay_ms: u32,
    pub victory_delay_ms: u32,
    pub catalog_url: String,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            victory_delay_ms: DEFAULT_VICTORY_DELAY_MS,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読むよ。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// JS から渡された (かもしれない) JSON を読む。
    /// 無ければデフォルト、壊れてたら warn を出してデフォルトに戻す。
    pub fn from_optional_json(json: Option<&str>) -> Self {
        match json {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                warn!("GameConfig: invalid config JSON ({}), falling back to defaults", e);
                Self::default()
            }),
        }
    }

    /// 実際に使う tick 間隔。`MIN_TICK_INTERVAL_MS` 未満は切り上げ。
    /// 経過時間は tick の回数じゃなくてこの間隔の合計で数えるので、秒はいつも実時間どおり。
    pub fn tick_interval(&self) -> u32 {
        self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS)
    }

    /// `log_level` を `LevelFilter` に変換。読めない文字列なら Info。
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
