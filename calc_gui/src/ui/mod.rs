//! UI module for Tally GUI
//!
//! # Layout (top to bottom)
//! - `toolbar` - App title and theme toggle
//! - `display_panel` - Pending expression and the current display value
//! - `keypad` - 4x5 button grid
//! - `status_bar` - Session phase and keyboard hints

pub mod display_panel;
pub mod keypad;
pub mod status_bar;
pub mod toolbar;
