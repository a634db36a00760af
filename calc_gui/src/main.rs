//! # Tally GUI Application
//!
//! Desktop (and WASM) calculator window built with Iced. All calculation
//! logic lives in `calc_core`; this crate only decodes clicks and key presses
//! into [`Input`] messages and renders the session.

mod keys;
mod ui;

use iced::widget::{column, container};
use iced::{Element, Length, Subscription, Theme};

use calc_core::{Input, SessionState};

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(340.0, 520.0))
        .run()
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Messages handled by [`App::update`]
#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button or mapped key
    Input(Input),
    ToggleDarkMode,
}

/// Application state: one calculator session per window
pub struct App {
    pub session: SessionState,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        tracing::info!("starting calculator session");
        App {
            session: SessionState::new(),
            dark_mode: false,
        }
    }

    fn title(&self) -> String {
        if self.session.is_error() {
            "Tally - Error".to_string()
        } else {
            "Tally".to_string()
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Input(input) => {
                tracing::debug!(%input, "input");
                self.session.apply(input);
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(self.dark_mode),
            ui::display_panel::view_display(&self.session),
            ui::keypad::view_keypad(&self.session),
            ui::status_bar::view_status_bar(&self.session),
        ]
        .spacing(10)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(keys::handle_event)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
