//! Display Panel
//!
//! Two lines, right aligned:
//! - the pending expression (`12 ×`), empty when nothing is pending
//! - the current display value, red when showing `Error`

use iced::alignment::Horizontal;
use iced::widget::{column, container, text};
use iced::{Element, Font, Length};

use calc_core::SessionState;

use crate::Message;

/// Render the calculator display
pub fn view_display(session: &SessionState) -> Element<'_, Message> {
    let pending = text(session.pending_expression())
        .size(14)
        .font(Font::MONOSPACE)
        .color([0.5, 0.5, 0.5]);

    let value = if session.is_error() {
        text(session.display()).size(36).color([0.8, 0.2, 0.2])
    } else {
        text(session.display()).size(36)
    };

    let lines = column![pending, value.font(Font::MONOSPACE)].align_x(Horizontal::Right);

    container(lines)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(10)
        .style(container::bordered_box)
        .into()
}
