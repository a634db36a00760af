//! Batch evaluation of key scripts.

use serde::Serialize;

use calc_core::{parse_key_script, CalcResult, Input, SessionState};

/// One key of a script and the display right after it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Step {
    pub input: Input,
    pub display: String,
}

/// Outcome of running a whole script through a fresh session
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub script: String,
    pub display: String,
    pub is_error: bool,
    pub pending: Option<String>,
    pub steps: Vec<Step>,
    pub session: SessionState,
}

/// Run `script` through a new session.
///
/// Fails only if the script contains a character with no key binding; an
/// arithmetic failure is a successful run whose display is `Error`.
pub fn evaluate(script: &str) -> CalcResult<BatchReport> {
    let inputs = parse_key_script(script)?;

    let mut session = SessionState::new();
    let mut frames: Vec<String> = Vec::with_capacity(inputs.len());
    for &input in &inputs {
        session.handle(input, &mut frames);
    }

    let steps = inputs
        .into_iter()
        .zip(frames)
        .map(|(input, display)| Step { input, display })
        .collect();

    let pending = session.pending_expression();
    Ok(BatchReport {
        script: script.trim().to_string(),
        display: session.display().to_string(),
        is_error: session.is_error(),
        pending: (!pending.is_empty()).then_some(pending),
        steps,
        session,
    })
}
