//! Rotating "thinking" status phrases shown while a reply is pending.
//!
//! ```rust
//! use tchat::status::{StatusRotation, THINKING_STATUSES};
//!
//! let mut rotation = StatusRotation::new();
//! assert_eq!(rotation.current(), THINKING_STATUSES[0]);
//!
//! rotation.advance();
//! assert_eq!(rotation.current(), THINKING_STATUSES[1]);
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::Stream;
use futures_timer::Delay;

/// Phrases cycled in order while the twin is composing a reply.
pub const THINKING_STATUSES: [&str; 5] = [
    "Accessing neural archives...",
    "Synthesizing architecture...",
    "Analyzing engineering context...",
    "Aligning neural pathways...",
    "Generating technical insight...",
];

/// Cadence of the phrase rotation.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(2000);

/// Cyclic cursor over [`THINKING_STATUSES`]. Wraps back to the first
/// phrase after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRotation {
    index: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        THINKING_STATUSES[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % THINKING_STATUSES.len();
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Timer stream that yields once per rotation interval.
///
/// Each pending turn owns exactly one ticker; dropping it when the turn
/// settles cancels the rotation with no further wakeups.
#[derive(Debug)]
pub struct StatusTicker {
    interval: Duration,
    delay: Delay,
}

impl StatusTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            delay: Delay::new(interval),
        }
    }
}

impl Default for StatusTicker {
    fn default() -> Self {
        Self::new(ROTATION_INTERVAL)
    }
}

impl Stream for StatusTicker {
    type Item = ();

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.delay).poll(cx) {
            Poll::Ready(()) => {
                let interval = self.interval;
                self.delay.reset(interval);
                Poll::Ready(Some(()))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
