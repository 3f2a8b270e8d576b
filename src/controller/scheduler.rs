// src/controller/scheduler.rs
//! ブラウザのタイマーを使わずにゲームを動かすための、仮想時計つきイベントキューだよ。
//!
//! `Effect` を受け取って「いつ何を実行するか」を覚えておき、`advance` で
//! 時間を進めると、期限が来た tick と遅延タスクを時刻順に一つずつ
//! コントローラーへ届ける。全部同じキューを通るので、tick とカード判定が
//! 混ざって実行されることはない。
//!
//! 同じ時刻に複数あったら、遅延タスク (予約順) → tick の順。

use log::debug;

use crate::controller::effects::{DeferredTask, Effect};
use crate::controller::game_controller::GameController;
use crate::protocol::InputEvent;

#[derive(Debug, Clone, Copy)]
struct Ticker {
    interval_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    due_ms: u64,
    seq: u64,
    task: DeferredTask,
}

/// 仮想時計。`now_ms` はゲーム開始からのミリ秒。
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_seq: u64,
    ticker: Option<Ticker>,
    queue: Vec<ScheduledTask>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// まだ実行されてない遅延タスクの数
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// 入力をコントローラーに渡して、返ってきた Effect を登録する。
    pub fn dispatch(&mut self, controller: &mut GameController, event: InputEvent) {
        let effects = controller.handle(event);
        self.apply(effects);
    }

    /// Effect を時計に登録する。
    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker { interval_ms } => {
                    let interval_ms = u64::from(interval_ms.max(1));
                    self.ticker = Some(Ticker { interval_ms, next_due_ms: self.now_ms + interval_ms });
                }
                Effect::StopTicker => {
                    self.ticker = None;
                }
                Effect::Schedule { task, delay_ms } => {
                    let scheduled = ScheduledTask {
                        due_ms: self.now_ms + u64::from(delay_ms),
                        seq: self.next_seq,
                        task,
                    };
                    self.next_seq += 1;
                    self.queue.push(scheduled);
                }
            }
        }
    }

    /// `ms` ミリ秒だけ時間を進めて、その間に期限が来たものを全部実行する。
    pub fn advance(&mut self, controller: &mut GameController, ms: u64) {
        let target_ms = self.now_ms + ms;
        loop {
            let next_task = self
                .queue
                .iter()
                .enumerate()
                .min_by_key(|(_, scheduled)| (scheduled.due_ms, scheduled.seq))
                .map(|(position, scheduled)| (position, scheduled.due_ms));
            let next_tick = self.ticker.map(|ticker| ticker.next_due_ms);

            let run_task = match (next_task, next_tick) {
                (Some((_, task_due)), Some(tick_due)) => task_due <= tick_due,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            if run_task {
                let Some((position, due_ms)) = next_task else { break };
                if due_ms > target_ms {
                    break;
                }
                let scheduled = self.queue.remove(position);
                self.now_ms = due_ms;
                debug!("VirtualClock: running {:?} at {}ms", scheduled.task, due_ms);
                let effects = controller.run_deferred(scheduled.task);
                self.apply(effects);
            } else {
                let Some(ticker) = self.ticker else { break };
                if ticker.next_due_ms > target_ms {
                    break;
                }
                self.now_ms = ticker.next_due_ms;
                self.ticker = Some(Ticker {
                    interval_ms: ticker.interval_ms,
                    next_due_ms: ticker.next_due_ms + ticker.interval_ms,
                });
                let effects = controller.tick();
                self.apply(effects);
            }
        }
        self.now_ms = target_ms;
        debug!(
            "VirtualClock: now {}ms, {} task(s) pending, ticker {}",
            self.now_ms,
            self.pending_tasks(),
            if self.is_ticking() { "on" } else { "off" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CatalogEntry, GameStatus};
    use crate::config::GameConfig;

    fn controller() -> GameController {
        let catalog = vec![
            CatalogEntry { name: "A".to_string(), image: "a.png".to_string() },
            CatalogEntry { name: "B".to_string(), image: "b.png".to_string() },
        ];
        GameController::with_seed(&catalog, GameConfig::default(), 3).unwrap()
    }

    #[test]
    fn ticks_follow_the_interval() {
        let mut game = controller();
        let mut clock = VirtualClock::new();
        clock.dispatch(&mut game, InputEvent::Start);
        assert!(clock.is_ticking());

        clock.advance(&mut game, 999);
        assert_eq!(game.elapsed_seconds(), 0);
        clock.advance(&mut game, 1);
        assert_eq!(game.elapsed_seconds(), 1);
        clock.advance(&mut game, 4500);
        assert_eq!(game.elapsed_seconds(), 5);
        assert_eq!(clock.now_ms(), 5500);
    }

    #[test]
    fn stop_ticker_stops_ticks() {
        let mut game = controller();
        let mut clock = VirtualClock::new();
        clock.dispatch(&mut game, InputEvent::Start);
        clock.advance(&mut game, 2000);
        clock.dispatch(&mut game, InputEvent::Pause);
        assert!(!clock.is_ticking());
        clock.advance(&mut game, 10_000);
        assert_eq!(game.elapsed_seconds(), 2);
        assert_eq!(game.status(), GameStatus::Paused);
    }

    #[test]
    fn deferred_task_runs_when_due() {
        let mut game = controller();
        let mut clock = VirtualClock::new();
        clock.dispatch(&mut game, InputEvent::Start);

        // 名前が違う 2 枚を探してめくる
        let first = 0;
        let second = game
            .deck()
            .iter()
            .position(|card| card.name != game.deck()[first].name)
            .unwrap();
        clock.dispatch(&mut game, InputEvent::PickCard { index: first });
        clock.dispatch(&mut game, InputEvent::PickCard { index: second });
        assert_eq!(clock.pending_tasks(), 1);
        assert!(game.is_locked());

        clock.advance(&mut game, 999);
        assert!(game.is_locked());
        clock.advance(&mut game, 1);
        assert!(!game.is_locked());
        assert_eq!(clock.pending_tasks(), 0);
    }
}
