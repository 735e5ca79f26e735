// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard channel is scoped to the lightbox: the subscription
//! only exists while the gallery controller is in its viewing state, so
//! no key handling can reach background content and nothing leaks
//! across repeated open/close cycles.

use super::Message;
use crate::gallery::NavigationDirection;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Keyboard routing for the lightbox: Escape closes, the horizontal
/// arrows navigate. Inactive (no subscription at all) while browsing.
pub fn keyboard_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        // Events a focused widget already handled stay handled.
        if let event::Status::Captured = status {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::CloseRequested)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::NavigateRequested(
                NavigationDirection::Previous,
            ))),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::NavigateRequested(
                NavigationDirection::Next,
            ))),
            _ => None,
        }
    })
}

/// Periodic tick for notification auto-dismiss; only runs while there
/// is something to expire.
pub fn tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
