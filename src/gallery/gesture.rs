// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection on the lightbox surface.

use crate::config::DEFAULT_SWIPE_THRESHOLD;
use iced::Point;

/// Navigation requested by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftward.
    Next,
    /// Finger moved rightward.
    Previous,
}

/// Tracks one touch-start/touch-end pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<Point>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Ends the gesture and resets the tracker whatever the outcome.
    pub fn touch_end(&mut self, position: Point) -> Option<SwipeDirection> {
        let Some(start) = self.start.take() else {
            tracing::debug!("touch end without a matching start, ignoring");
            return None;
        };

        let dx = start.x - position.x;
        let dy = start.y - position.y;

        if dx.abs() > dy.abs() && dx.abs() > self.threshold {
            Some(if dx > 0.0 {
                SwipeDirection::Next
            } else {
                SwipeDirection::Previous
            })
        } else {
            tracing::debug!(dx, dy, "gesture below swipe threshold");
            None
        }
    }

    /// Drops a gesture the platform interrupted.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
