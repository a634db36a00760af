//! Interactive keypad (Ratatui + Crossterm).
//!
//! Keys map exactly like the GUI: digits, `+ - * /`, `.`, Enter/`=`,
//! Esc/`c` clear, Delete clear entry, Backspace. `q` or Ctrl+C quits.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use calc_core::{DisplayRenderer, Input, Phase, SessionState};

/// Number of display values kept on the tape
const TAPE_LEN: usize = 6;

const KEYPAD: [[&str; 4]; 5] = [
    ["C", "CE", "⌫", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["0", "", ".", "="],
];

/// Recent display values, newest last
#[derive(Debug, Default)]
struct Tape {
    lines: VecDeque<String>,
}

impl DisplayRenderer for Tape {
    fn render(&mut self, display: &str) {
        if self.lines.back().map(String::as_str) == Some(display) {
            return;
        }
        if self.lines.len() == TAPE_LEN {
            self.lines.pop_front();
        }
        self.lines.push_back(display.to_string());
    }
}

#[derive(Debug, Default)]
struct TuiApp {
    session: SessionState,
    tape: Tape,
    exit: bool,
}

/// Take over the terminal until the user quits
pub fn run() -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = TuiApp::default().run(&mut terminal);
    ratatui::restore();
    result
}

impl TuiApp {
    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.exit = true;
            return;
        }
        if let Some(input) = key_to_input(key) {
            tracing::debug!(%input, "key");
            self.session.handle(input, &mut self.tape);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [display_area, keypad_area, tape_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.display_widget(), display_area);
        frame.render_widget(self.keypad_widget(), keypad_area);
        frame.render_widget(self.tape_widget(), tape_area);
        frame.render_widget(
            Line::from("q quit · Esc clear · Del CE · Enter =").dim(),
            help_area,
        );
    }

    fn display_widget(&self) -> Paragraph<'_> {
        let value = if self.session.is_error() {
            Line::from(self.session.display().red().bold())
        } else {
            Line::from(self.session.display().bold())
        };

        Paragraph::new(vec![
            Line::from(Span::from(self.session.pending_expression()).dim()).right_aligned(),
            value.right_aligned(),
        ])
        .block(Block::bordered().title(" Tally "))
    }

    fn keypad_widget(&self) -> Paragraph<'static> {
        let highlighted = match self.session.phase() {
            Phase::AwaitingOperand => self.session.operator.map(|op| op.display_symbol().to_string()),
            _ => None,
        };

        let rows: Vec<Line> = KEYPAD
            .iter()
            .map(|keys| {
                let spans: Vec<Span> = keys
                    .iter()
                    .map(|&label| {
                        let cell = format!(" {:^4} ", label);
                        if highlighted.as_deref() == Some(label) {
                            Span::styled(cell, Style::default().reversed())
                        } else {
                            Span::raw(cell)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(rows).block(Block::bordered())
    }

    fn tape_widget(&self) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .tape
            .lines
            .iter()
            .map(|display| Line::from(display.as_str()).right_aligned())
            .collect();
        Paragraph::new(lines).block(Block::bordered().title(" Tape "))
    }
}

/// Map a terminal key event onto a calculator input
fn key_to_input(key: KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Enter => Some(Input::Equals),
        KeyCode::Esc => Some(Input::Clear),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Delete => Some(Input::ClearEntry),
        KeyCode::Char(c) => Input::from_key(c.encode_utf8(&mut [0; 4])),
        _ => None,
    }
}
