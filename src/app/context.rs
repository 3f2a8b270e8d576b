// src/app/context.rs
//! ブラウザのコールバック (クリック、setInterval、setTimeout) から共有する状態をまとめたもの。
//!
//! どのコールバックも最後は `AppContext` のメソッドを通るので、
//! コントローラーへの入力は全部ここで一列に並ぶよ。

use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, warn};

use crate::app::browser_timers::{self, BrowserTimers};
use crate::app::renderer::DomView;
use crate::controller::{DeferredTask, Effect, GameController};
use crate::protocol::InputEvent;

/// Mutex をロックする。poison されてても中身を取り出して続行するよ。
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("App: mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext {
    pub controller: Arc<Mutex<GameController>>,
    pub timers: Arc<Mutex<BrowserTimers>>,
    pub view: Rc<DomView>,
}

impl AppContext {
    /// 入力イベントを処理して、タイマーを更新して、描き直す。
    pub fn dispatch(&self, event: InputEvent) {
        // ロックは 1 文の中だけ。タイマーを触る前に必ず外す。
        let effects = lock_or_recover(&self.controller).handle(event);
        self.apply_effects(effects);
        self.render();
    }

    /// setInterval から呼ばれる 1 秒ごとの tick
    pub fn tick(&self) {
        let effects = lock_or_recover(&self.controller).tick();
        self.apply_effects(effects);
        self.render();
    }

    /// setTimeout から呼ばれる遅延タスク
    pub fn run_deferred(&self, task: DeferredTask) {
        let effects = lock_or_recover(&self.controller).run_deferred(task);
        self.apply_effects(effects);
        self.render();
    }

    pub fn apply_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let result = match effect {
                Effect::StartTicker { interval_ms } => browser_timers::start_ticker(self, interval_ms),
                Effect::StopTicker => {
                    browser_timers::stop_ticker(&self.timers);
                    Ok(())
                }
                Effect::Schedule { task, delay_ms } => browser_timers::schedule_task(self, task, delay_ms),
            };
            if let Err(e) = result {
                error!("App: failed to apply {:?}: {:?}", effect, e);
            }
        }
    }

    pub fn render(&self) {
        let snapshot = lock_or_recover(&self.controller).snapshot();
        if let Err(e) = self.view.render(&snapshot) {
            error!("App: render failed: {:?}", e);
        }
    }
}
