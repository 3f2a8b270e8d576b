// src/config/layout.rs
//! ゲーム画面 (HTML) のレイアウトに関する定数を定義するよ！
//! 要素の ID やセレクタ、付け外しする CSS クラス名など。

// --- ボタン ---
pub const START_BUTTON_ID: &str = "startBtn";
pub const RESTART_BUTTON_ID: &str = "restartBtn"; // 「もう一回 (同じ配置)」
pub const PLAY_AGAIN_BUTTON_ID: &str = "playAgainBtn"; // 「もう一回 (シャッフル)」
pub const PAUSE_BUTTON_ID: &str = "pauseBtn";
pub const RESUME_BUTTON_ID: &str = "resumeBtn";
pub const MENU_BUTTON_ID: &str = "menuBtn"; // 無いページもある

// --- オーバーレイ ---
pub const START_OVERLAY_ID: &str = "startOverlay";
pub const VICTORY_OVERLAY_ID: &str = "victoryOverlay";
pub const PAUSE_OVERLAY_ID: &str = "pauseOverlay";

// --- 表示エリア ---
pub const GRID_CONTAINER_SELECTOR: &str = ".grid-container";
pub const GAME_CONTAINER_SELECTOR: &str = ".game-container";
pub const SCORE_SELECTOR: &str = ".score";
pub const TIMER_SELECTOR: &str = ".timer";
pub const VICTORY_TIME_SELECTOR: &str = ".victory-time";
pub const VICTORY_MOVES_SELECTOR: &str = ".victory-moves";

// --- カード要素 ---
pub const CARD_SELECTOR: &str = ".card";
pub const CARD_INDEX_ATTR: &str = "data-index";
pub const CARD_NAME_ATTR: &str = "data-name";

// --- CSS クラス ---
pub const CLASS_CARD: &str = "card";
pub const CLASS_CARD_FRONT: &str = "front";
pub const CLASS_CARD_IMAGE: &str = "front-image";
pub const CLASS_CARD_BACK: &str = "back";
pub const CLASS_FLIPPED: &str = "flipped";
pub const CLASS_MATCHED: &str = "matched";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_BLURRED: &str = "blurred";

// --- ボタンのラベル ---
pub const PAUSE_LABEL: &str = "Pause";
pub const PAUSED_LABEL: &str = "Paused";
