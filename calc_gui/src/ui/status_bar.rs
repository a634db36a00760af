//! Status Bar (Bottom)
//!
//! Displays:
//! - What the session is waiting for
//! - Keyboard hints

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::{Phase, SessionState};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(session: &SessionState) -> Element<'static, Message> {
    let status = match session.phase() {
        Phase::Entry => "Ready",
        Phase::AwaitingOperand => "Enter next number",
        Phase::Operand => "Press = to evaluate",
        Phase::Error => "Cannot compute - type a number or C",
    };

    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text("Esc clear · Del CE · Enter =").size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
