//! Fixed-interval tick scheduling on top of a per-frame callback.
//!
//! The host calls [`TickScheduler::frame`] once per display frame with a
//! monotonically increasing timestamp. While a loop is live the scheduler
//! counts the elapsed time down from the tick interval and reports a
//! [`Frame::Tick`] whenever the countdown runs out, so logic updates happen at
//! a rate independent of the display refresh.

use std::time::Duration;

/// Identifies one started loop. A new handle is issued on every start.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LoopHandle(u64);

/// What the current frame should do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Frame {
    /// No loop is live; game state must not advance.
    Stopped,
    /// The loop is live but the tick interval has not elapsed.
    RenderOnly,
    /// One logic update is due.
    Tick,
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    countdown: Duration,
    last_frame: Option<Duration>,
    active: Option<LoopHandle>,
    next_id: u64,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            countdown: Duration::ZERO,
            last_frame: None,
            active: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts a fresh loop at `now`, cancelling any live one first.
    ///
    /// The countdown starts empty so the first frame of the loop is a tick.
    pub fn start(&mut self, now: Duration) -> LoopHandle {
        if let Some(previous) = self.cancel() {
            log::debug!("replacing live loop {previous:?}");
        }

        self.next_id += 1;
        let handle = LoopHandle(self.next_id);
        self.active = Some(handle);
        self.countdown = Duration::ZERO;
        self.last_frame = Some(now);
        handle
    }

    /// Stops the live loop, returning its handle if there was one.
    pub fn cancel(&mut self) -> Option<LoopHandle> {
        self.last_frame = None;
        self.active.take()
    }

    #[must_use]
    pub fn active(&self) -> Option<LoopHandle> {
        self.active
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Accounts for the time since the previous frame and reports whether a
    /// tick is due.
    pub fn frame(&mut self, now: Duration) -> Frame {
        if self.active.is_none() {
            return Frame::Stopped;
        }

        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);

        if elapsed >= self.countdown {
            self.countdown = self.interval;
            Frame::Tick
        } else {
            self.countdown -= elapsed;
            Frame::RenderOnly
        }
    }
}
