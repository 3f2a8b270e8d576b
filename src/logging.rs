// src/logging.rs
//! `log` クレートのマクロ (info! とか error!) をブラウザのコンソールに流すためのロガーだよ。
//!
//! Wasm の起動時に一回だけ `init` を呼ぶ。ネイティブのテストでは呼ばれないので、
//! log マクロは何もしないまま。

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.level(), record.target(), &record.args().to_string()));
        // レベルごとにコンソールのメソッドを使い分ける
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

/// ロガーを登録する。二回目以降はレベルの更新だけ。
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logging: logger already installed, updating level only");
    }
    log::set_max_level(level);
}
