//! # calc_core - Four-Function Calculation Engine
//!
//! `calc_core` is the computational heart of Tally: an arithmetic engine with
//! fixed-precision rounding and the input state machine that turns button and
//! key events into a running calculation. It has no UI dependency; the GUI and
//! CLI front ends decode their own events into [`Input`] values and render
//! [`SessionState::display`].
//!
//! ## Design Philosophy
//!
//! - **Pure engine**: the arithmetic functions are stateless
//! - **Explicit session**: all mutable state lives in a [`SessionState`] owned by the host
//! - **Result-based errors**: division by zero is a [`CalcError`], never a panic
//! - **JSON-First**: inputs, operators, and sessions implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Input, Operator, SessionState};
//!
//! let mut session = SessionState::new();
//! session.apply(Input::Digit('6'));
//! session.apply(Input::Operator(Operator::Multiply));
//! session.apply(Input::Digit('7'));
//! session.apply(Input::Equals);
//! assert_eq!(session.display(), "42");
//! ```
//!
//! ## Modules
//!
//! - [`arithmetic`] - add/subtract/multiply/divide, rounding, number validation
//! - [`display`] - number formatting and parsing for the display
//! - [`input`] - input events and keyboard mapping
//! - [`session`] - the input state machine
//! - [`errors`] - structured error types

pub mod arithmetic;
pub mod display;
pub mod errors;
pub mod input;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use arithmetic::{add, divide, multiply, subtract, validate_number, Operator};
pub use errors::{CalcError, CalcResult};
pub use input::{parse_key_script, Input};
pub use session::{DisplayRenderer, Phase, SessionState};
