//! Countdown timer with a recurring tick schedule.
//!
//! The ticker thread never touches the counter. It only sends tick signals
//! over a channel, and the owner applies them through [`CountdownTimer::poll`].
//! Ticks and calls such as [`CountdownTimer::adjust`] are therefore applied
//! one after the other on the owner's thread.

use crossbeam_channel::{Receiver, Sender, select, unbounded};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{QuizError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { seconds_remaining: i64 },
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// Background thread ticking every `interval`.
    Wall { interval: Duration },
    /// Ticks are injected through a [`ManualClock`].
    Manual,
}

/// Tick signal as sent over the channel. `generation` is `None` for manual
/// ticks, which always target the current schedule.
#[derive(Clone, Copy, Debug)]
struct TickSignal {
    generation: Option<u64>,
}

/// Handle used to drive a timer built with [`Clock::Manual`].
#[derive(Clone, Debug)]
pub struct ManualClock {
    tx: Sender<TickSignal>,
}

impl ManualClock {
    pub fn tick(&self) {
        self.advance(1);
    }

    pub fn advance(&self, ticks: u32) {
        for _ in 0..ticks {
            // Receiver lives as long as the timer; a send error means it is gone.
            let _ = self.tx.send(TickSignal { generation: None });
        }
    }
}

struct Schedule {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Schedule {
    fn spawn(interval: Duration, generation: u64, tx: Sender<TickSignal>) -> Self {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let handle = std::thread::spawn(move || {
            let ticker = crossbeam_channel::tick(interval);
            loop {
                select! {
                    recv(ticker) -> _ => {
                        let signal = TickSignal { generation: Some(generation) };
                        if tx.send(signal).is_err() {
                            break;
                        }
                    }
                    recv(stop_rx) -> _ => break,
                }
            }
            log::trace!("ticker for schedule {generation} exited");
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }
}

impl Drop for Schedule {
    fn drop(&mut self) {
        // Dropping the sender disconnects `stop_rx`, which wakes the ticker.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub struct CountdownTimer {
    status: TimerStatus,
    seconds_remaining: i64,
    clock: Clock,
    generation: u64,
    tick_tx: Sender<TickSignal>,
    tick_rx: Receiver<TickSignal>,
    schedule: Option<Schedule>,
}

impl CountdownTimer {
    pub fn new(clock: Clock) -> Self {
        let (tick_tx, tick_rx) = unbounded();
        Self {
            status: TimerStatus::Idle,
            seconds_remaining: 0,
            clock,
            generation: 0,
            tick_tx,
            tick_rx,
            schedule: None,
        }
    }

    pub fn wall(interval: Duration) -> Self {
        Self::new(Clock::Wall { interval })
    }

    pub fn manual() -> (Self, ManualClock) {
        let timer = Self::new(Clock::Manual);
        let clock = ManualClock {
            tx: timer.tick_tx.clone(),
        };
        (timer, clock)
    }

    pub fn start(&mut self, initial_seconds: i64) -> Result<()> {
        if self.is_running() {
            return Err(QuizError::AlreadyRunning);
        }
        // Anything still queued belongs to an earlier run.
        while self.tick_rx.try_recv().is_ok() {}

        self.generation += 1;
        self.seconds_remaining = initial_seconds;
        self.status = TimerStatus::Running;
        if let Clock::Wall { interval } = self.clock {
            self.schedule = Some(Schedule::spawn(
                interval,
                self.generation,
                self.tick_tx.clone(),
            ));
        }
        log::debug!(
            "timer started at {initial_seconds}s (schedule {})",
            self.generation
        );
        Ok(())
    }

    /// Adds `delta_seconds` without emitting a tick, even when the result
    /// drops to zero or below. The next tick observes the expiry.
    pub fn adjust(&mut self, delta_seconds: i64) -> Result<()> {
        if !self.is_running() {
            return Err(QuizError::NotRunning);
        }
        self.seconds_remaining += delta_seconds;
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("timer stopped at {}s", self.seconds_remaining);
        }
        self.status = TimerStatus::Idle;
        self.schedule = None;
    }

    pub fn reset(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(QuizError::AlreadyRunning);
        }
        self.seconds_remaining = 0;
        Ok(())
    }

    /// Applies every tick received since the last poll.
    pub fn poll(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(signal) = self.tick_rx.try_recv() {
            if !self.is_running() {
                continue;
            }
            match signal.generation {
                Some(generation) if generation != self.generation => continue,
                _ => events.extend(self.tick()),
            }
        }
        events
    }

    fn tick(&mut self) -> Vec<TimerEvent> {
        self.seconds_remaining -= 1;
        let mut events = vec![TimerEvent::Tick {
            seconds_remaining: self.seconds_remaining,
        }];
        if self.seconds_remaining <= 0 {
            log::info!("timer expired ({}s)", self.seconds_remaining);
            self.stop();
            events.push(TimerEvent::Expired);
        }
        events
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn seconds_remaining(&self) -> i64 {
        self.seconds_remaining
    }
}
