//! The cancellable repeating task that drives a [`SessionTimer`].
//!
//! State lives behind a mutex shared with the spawned task, and every
//! publication happens while that mutex is held. `stop()` takes the same lock,
//! so once it returns no tick can publish again for this run.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::clock::{Clock, SystemClock};
use super::session::{SessionState, SessionTimer};
use crate::events::Event;

/// Tick period used when nothing else is configured (~20 Hz).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// One live session owned by an exercise screen.
///
/// Must be started from within a Tokio runtime. Dropping it cancels the
/// ticking task; [`dispose`](Self::dispose) additionally publishes the final
/// paused state.
pub struct ActiveSession<C: Clock + Send + 'static = SystemClock> {
    timer: Arc<Mutex<SessionTimer<C>>>,
    state_tx: Arc<watch::Sender<SessionState>>,
    tick_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl ActiveSession<SystemClock> {
    pub fn new(duration: Duration, tick_interval: Duration) -> Self {
        Self::with_clock(duration, tick_interval, SystemClock)
    }
}

impl<C: Clock + Send + 'static> ActiveSession<C> {
    pub fn with_clock(duration: Duration, tick_interval: Duration, clock: C) -> Self {
        let (state_tx, _) = watch::channel(SessionState::IDLE);
        Self {
            timer: Arc::new(Mutex::new(SessionTimer::with_clock(duration, clock))),
            state_tx: Arc::new(state_tx),
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            task: None,
        }
    }

    /// Receive every published state, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> SessionState {
        lock(&self.timer).state()
    }

    /// Whether a tick task is still scheduled.
    #[cfg(test)]
    fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn start(&mut self) -> Option<Event> {
        let event = {
            let mut timer = lock(&self.timer);
            let event = timer.start()?;
            self.state_tx.send_replace(timer.state());
            event
        };
        self.cancel_task();
        self.task = Some(tokio::spawn(run_ticks(
            Arc::clone(&self.timer),
            Arc::clone(&self.state_tx),
            self.tick_interval,
        )));
        Some(event)
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.cancel_task();
        let mut timer = lock(&self.timer);
        let event = timer.stop();
        if event.is_some() {
            self.state_tx.send_replace(timer.state());
        }
        event
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.state().is_running {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Tear down the session when its screen goes away.
    pub fn dispose(mut self) -> SessionState {
        self.stop();
        self.state()
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<C: Clock + Send + 'static> Drop for ActiveSession<C> {
    fn drop(&mut self) {
        self.cancel_task();
    }
}

async fn run_ticks<C: Clock + Send + 'static>(
    timer: Arc<Mutex<SessionTimer<C>>>,
    state_tx: Arc<watch::Sender<SessionState>>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        let keep_going = {
            let mut timer = lock(&timer);
            if timer.is_running() {
                let finished = timer.tick().is_some();
                state_tx.send_replace(timer.state());
                !finished
            } else {
                false
            }
        };
        if !keep_going {
            break;
        }
    }
}

fn lock<C: Clock>(timer: &Mutex<SessionTimer<C>>) -> MutexGuard<'_, SessionTimer<C>> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}
