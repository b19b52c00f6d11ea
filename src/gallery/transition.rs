// SPDX-License-Identifier: MPL-2.0
//! Timing primitives shared by the lightbox and the filter.
//!
//! Visual changes are split in two halves. The operation that starts a change
//! updates state immediately and returns [`Deferred`] continuations; whoever
//! drives the UI (a tokio timer in the app, a loop in tests) waits for each
//! delay and hands the [`Step`] back to the owning component. No component
//! knows which scheduler is in use.
//!
//! Animated values are expressed as [`Tween`]s evaluated against a clock, so
//! the view can sample them on every frame.

use crate::gallery::entry::EntryId;
use std::time::{Duration, Instant};

/// A continuation to run once its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Start the overlay fade-in once the overlay has been activated.
    RevealOverlay { generation: u64 },
    /// Deactivate the overlay after its fade-out.
    FinishClose { generation: u64 },
    /// Scale the freshly loaded image up to full size.
    ScaleInImage { render: u64 },
    /// Remove a filtered-out entry from the layout.
    HideEntry { pass: u64, entry: EntryId },
    /// Rebuild the catalog after a filter pass settled.
    ResyncCatalog { pass: u64 },
}

/// A [`Step`] paired with the delay after which it must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub step: Step,
}

impl Deferred {
    #[must_use]
    pub fn after(delay: Duration, step: Step) -> Self {
        Self { delay, step }
    }
}

/// Request to load a full-size image for the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Render counter the completion must be reported with.
    pub render: u64,
    pub source: String,
    /// Alt text of the record being rendered.
    pub alt: String,
}

/// Follow-up work produced by a state change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Effects {
    pub deferred: Vec<Deferred>,
    pub load: Option<ImageRequest>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn deferred(deferred: Deferred) -> Self {
        Self {
            deferred: vec![deferred],
            load: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deferred.is_empty() && self.load.is_none()
    }

    /// Appends the work of `other` to `self`. A later load request replaces an earlier one.
    pub fn merge(mut self, other: Effects) -> Self {
        self.deferred.extend(other.deferred);
        if other.load.is_some() {
            self.load = other.load;
        }
        self
    }
}

/// An `f32` moving from one value to another over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Option<Instant>,
    delay: Duration,
    duration: Duration,
}

impl Tween {
    /// A value that is not moving.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Value at `now`. Before the delay has elapsed, the starting value.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.delay {
            return self.from;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return self.to;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Final value once the tween completes.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the value is still changing (or waiting to change) at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.start {
            None => false,
            Some(start) => now.saturating_duration_since(start) < self.delay + self.duration,
        }
    }

    /// Jumps to `value` immediately.
    pub fn set(&mut self, value: f32) {
        *self = Self::settled(value);
    }

    /// Starts moving from the current value to `to`.
    pub fn animate_to(&mut self, to: f32, now: Instant, delay: Duration, duration: Duration) {
        let from = self.value(now);
        *self = Self {
            from,
            to,
            start: Some(now),
            delay,
            duration,
        };
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
