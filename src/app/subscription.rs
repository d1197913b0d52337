// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window file drops are routed; they feed the same loading path as the
//! file picker.

use super::Message;
use crate::ui::editor_view::component;
use iced::{event, window, Subscription};

/// Routes files dropped on the window to the editor form.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::FileDropped(path)) = event {
            return Some(Message::Editor(component::Message::FileDropped(path)));
        }
        None
    })
}
