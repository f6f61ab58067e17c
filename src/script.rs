use anyhow::{Context, Result, bail};
use std::time::Duration;

use crate::engine::Input;

/// An input replayed at a fixed time since the start of the show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedInput {
    pub at: Duration,
    pub input: Input,
}

/// Parses `SECONDS:ACTION` pairs separated by commas, e.g.
/// `2.5:next,4:hover,9:leave,12:goto=3,20:quit`.
///
/// Actions: `next`, `prev`, `goto=N`, `hover`, `leave`, `quit`.
/// The result is ordered by time; same-time entries keep their written order.
pub fn parse_script(spec: &str) -> Result<Vec<ScriptedInput>> {
    let mut script = Vec::new();
    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (at, action) = entry
            .split_once(':')
            .with_context(|| format!("Script entry '{}' is missing ':'", entry))?;
        let seconds: f32 = at
            .trim()
            .parse()
            .with_context(|| format!("Invalid time '{}' in script entry '{}'", at, entry))?;
        if !seconds.is_finite() || seconds < 0.0 {
            bail!("Script time must be a non-negative number, got '{}'", at);
        }
        script.push(ScriptedInput {
            at: Duration::try_from_secs_f32(seconds)
                .with_context(|| format!("Script time '{}' is out of range", at))?,
            input: parse_action(action.trim())?,
        });
    }
    script.sort_by_key(|s| s.at);
    Ok(script)
}

fn parse_action(action: &str) -> Result<Input> {
    let input = match action.to_lowercase().as_str() {
        "next" => Input::Next,
        "prev" | "previous" => Input::Prev,
        "hover" | "enter" => Input::HoverEnter,
        "leave" => Input::HoverLeave,
        "quit" => Input::Quit,
        other => match other.strip_prefix("goto=") {
            Some(index) => Input::GoTo(
                index
                    .parse()
                    .with_context(|| format!("Invalid slide index in '{}'", action))?,
            ),
            None => bail!("Unknown script action '{}'", action),
        },
    };
    Ok(input)
}
