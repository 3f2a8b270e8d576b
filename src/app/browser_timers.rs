// src/app/browser_timers.rs
//! コントローラーの `Effect` を本物のブラウザタイマー (setInterval / setTimeout) に変換するよ。

use std::sync::Mutex;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::context::{lock_or_recover, AppContext};
use crate::controller::DeferredTask;

/// 動いてる setInterval のハンドルとコールバック。
/// コールバックの Closure は止めるまで生かしておかないといけない！
struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

#[derive(Default)]
pub(crate) struct BrowserTimers {
    ticker: Option<IntervalHandle>,
}

fn to_millis(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// tick 用の setInterval を張る。前のがあれば先に止める。
pub(crate) fn start_ticker(ctx: &AppContext, interval_ms: u32) -> Result<(), JsValue> {
    stop_ticker(&ctx.timers);
    let window = window().ok_or("Failed to get window")?;

    let tick_ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move || tick_ctx.tick()) as Box<dyn FnMut()>);
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        to_millis(interval_ms),
    )?;
    lock_or_recover(&ctx.timers).ticker = Some(IntervalHandle { id, _closure: closure });
    debug!("BrowserTimers: ticker {} started ({}ms)", id, interval_ms);
    Ok(())
}

/// tick を止める。動いてなければ何もしない。
pub(crate) fn stop_ticker(timers: &Mutex<BrowserTimers>) {
    // ハンドルを取り出してからロックを外す
    let handle = lock_or_recover(timers).ticker.take();
    if let Some(handle) = handle {
        if let Some(window) = window() {
            window.clear_interval_with_handle(handle.id);
        }
        debug!("BrowserTimers: ticker {} stopped", handle.id);
    }
}

/// 遅延タスクを setTimeout で一回だけ実行する。
/// キャンセルはしない。古くなったタスクはコントローラー側が epoch で捨てる。
pub(crate) fn schedule_task(ctx: &AppContext, task: DeferredTask, delay_ms: u32) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let task_ctx = ctx.clone();
    let callback = Closure::once_into_js(move || task_ctx.run_deferred(task));
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), to_millis(delay_ms))?;
    debug!("BrowserTimers: scheduled {:?} in {}ms", task, delay_ms);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturate() {
        assert_eq!(to_millis(1000), 1000);
        assert_eq!(to_millis(u32::MAX), i32::MAX);
    }
}
