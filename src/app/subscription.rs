// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch input only matter while the lightbox is open, and the
//! frame tick only runs while something is animating.

use super::Message;
use crate::ui::lightbox_overlay;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, Subscription};
use std::time::Duration;

/// Interval between animation ticks (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes keyboard and touch events to the lightbox while it is open.
pub fn create_lightbox_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            let message = match key {
                Key::Named(Named::Escape) => lightbox_overlay::Message::Close,
                Key::Named(Named::ArrowLeft) => lightbox_overlay::Message::Previous,
                Key::Named(Named::ArrowRight) => lightbox_overlay::Message::Next,
                _ => return None,
            };
            Some(Message::Lightbox(message))
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchLost),
        _ => None,
    })
}

/// Creates a periodic tick subscription while animations are running.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
