//! Keyboard decoding: Iced key events to calculator inputs.

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::window;

use calc_core::Input;

use crate::Message;

/// Subscription callback for [`iced::event::listen_with`]
pub fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            // Leave Ctrl/Cmd shortcuts to the platform
            if modifiers.command() {
                return None;
            }
            key_name(key.as_ref())
                .and_then(|name| Input::from_key(&name))
                .map(Message::Input)
        }
        _ => None,
    }
}

/// Name a key the way [`Input::from_key`] expects
fn key_name(key: Key<&str>) -> Option<String> {
    match key {
        Key::Named(Named::Enter) => Some("Enter".to_string()),
        Key::Named(Named::Escape) => Some("Escape".to_string()),
        Key::Named(Named::Backspace) => Some("Backspace".to_string()),
        Key::Named(Named::Delete) => Some("Delete".to_string()),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}
