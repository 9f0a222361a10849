//! Debounced, last-call-wins highlighting for live editors
//!
//! The engine is synchronous and has no notion of cancellation. Callers that
//! re-highlight on every keystroke submit snapshots here and poll on their own
//! clock; only the newest snapshot is ever highlighted, and only after the
//! buffer has been quiet for the debounce delay.

use std::time::{Duration, Instant};
use tracing::trace;

use crate::{config::HighlighterConfig, engine::HighlightEngine, span::Span};

/// Default debounce delay between the last edit and a highlight
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Monotonic id of a submitted snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Debouncer for scheduling highlights with configurable delay
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    last_schedule: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_schedule: None,
        }
    }

    /// Get the debounce delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record that a schedule was requested at `now`
    pub fn mark_scheduled(&mut self, now: Instant) {
        self.last_schedule = Some(now);
    }

    /// Check if the delay has elapsed since the last schedule
    pub fn should_trigger(&self, now: Instant) -> bool {
        match self.last_schedule {
            Some(last) => now.saturating_duration_since(last) >= self.delay,
            None => true,
        }
    }

    /// Reset the debouncer
    pub fn reset(&mut self) {
        self.last_schedule = None;
    }
}

/// Result of a completed highlight, tagged with its snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledHighlight {
    pub generation: Generation,
    pub spans: Vec<Span>,
}

/// Single-owner scheduler that coalesces rapid submissions
#[derive(Debug)]
pub struct HighlightScheduler {
    debouncer: Debouncer,
    pending: Option<(Generation, String)>,
    latest: Generation,
}

impl HighlightScheduler {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
            pending: None,
            latest: Generation(0),
        }
    }

    /// Scheduler using the configured debounce delay
    pub fn from_config(config: &HighlighterConfig) -> Self {
        Self::new(config.debounce_ms)
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Submit a snapshot now
    pub fn submit(&mut self, text: impl Into<String>) -> Generation {
        self.submit_at(text, Instant::now())
    }

    /// Submit a snapshot at `now`, superseding any pending one
    pub fn submit_at(&mut self, text: impl Into<String>, now: Instant) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.pending = Some((self.latest, text.into()));
        self.debouncer.mark_scheduled(now);
        trace!("Submitted highlight generation {}", self.latest.0);
        self.latest
    }

    /// Highlight the pending snapshot if the buffer has been quiet long enough
    pub fn poll(&mut self, engine: &HighlightEngine) -> Option<ScheduledHighlight> {
        self.poll_at(engine, Instant::now())
    }

    /// [`poll`](Self::poll) against a caller-supplied clock
    pub fn poll_at(&mut self, engine: &HighlightEngine, now: Instant) -> Option<ScheduledHighlight> {
        if self.pending.is_none() || !self.debouncer.should_trigger(now) {
            return None;
        }

        let (generation, text) = self.pending.take()?;
        self.debouncer.reset();
        Some(ScheduledHighlight {
            generation,
            spans: engine.highlight(&text),
        })
    }

    /// Whether results for `generation` are still the newest
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending snapshot
    pub fn cancel(&mut self) {
        self.pending = None;
        self.debouncer.reset();
    }
}

impl Default for HighlightScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
