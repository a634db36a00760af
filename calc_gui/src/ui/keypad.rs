//! Keypad
//!
//! ```text
//! [ C ][ CE ][ ⌫ ][ ÷ ]
//! [ 7 ][ 8  ][ 9 ][ × ]
//! [ 4 ][ 5  ][ 6 ][ − ]
//! [ 1 ][ 2  ][ 3 ][ + ]
//! [    0    ][ . ][ = ]
//! ```

use iced::widget::{button, column, text, Button, Column, Row};
use iced::{Element, Length};

use calc_core::{Input, Operator, Phase, SessionState};

use crate::Message;

const KEY_HEIGHT: f32 = 56.0;
const KEY_SPACING: f32 = 6.0;

/// Keypad rows, each key with its width in grid columns
const LAYOUT: [&[(Input, u16)]; 5] = [
    &[
        (Input::Clear, 1),
        (Input::ClearEntry, 1),
        (Input::Backspace, 1),
        (Input::Operator(Operator::Divide), 1),
    ],
    &[
        (Input::Digit('7'), 1),
        (Input::Digit('8'), 1),
        (Input::Digit('9'), 1),
        (Input::Operator(Operator::Multiply), 1),
    ],
    &[
        (Input::Digit('4'), 1),
        (Input::Digit('5'), 1),
        (Input::Digit('6'), 1),
        (Input::Operator(Operator::Subtract), 1),
    ],
    &[
        (Input::Digit('1'), 1),
        (Input::Digit('2'), 1),
        (Input::Digit('3'), 1),
        (Input::Operator(Operator::Add), 1),
    ],
    &[(Input::Digit('0'), 2), (Input::Decimal, 1), (Input::Equals, 1)],
];

/// Render the keypad. The pending operator is highlighted while the session
/// waits for its right-hand operand.
pub fn view_keypad(session: &SessionState) -> Element<'static, Message> {
    let highlighted = match session.phase() {
        Phase::AwaitingOperand => session.operator,
        _ => None,
    };

    let mut grid: Column<'static, Message> = column![].spacing(KEY_SPACING);

    for keys in LAYOUT {
        let mut keypad_row: Row<'static, Message> = Row::new().spacing(KEY_SPACING);
        for &(input, span) in keys {
            keypad_row = keypad_row.push(view_key(input, span, highlighted));
        }
        grid = grid.push(keypad_row);
    }

    grid.into()
}

fn view_key(input: Input, span: u16, highlighted: Option<Operator>) -> Button<'static, Message> {
    let style = match input {
        Input::Digit(_) | Input::Decimal => button::secondary,
        Input::Operator(op) if highlighted == Some(op) => button::primary,
        Input::Operator(_) => button::secondary,
        Input::Equals => button::success,
        Input::Clear | Input::ClearEntry | Input::Backspace => button::danger,
    };

    button(text(input.label()).size(20).center().width(Length::Fill).height(Length::Fill))
        .on_press(Message::Input(input))
        .width(Length::FillPortion(span))
        .height(Length::Fixed(KEY_HEIGHT))
        .style(style)
}
