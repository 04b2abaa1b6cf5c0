//! # Rendering Module
//!
//! Turns a `CmdResult` into the text the CLI prints. Functions here return strings and
//! never print, so output formatting is tested directly.

use serde::Serialize;
use tally::api::CmdResult;
use tally::config::TallyConfig;
use tally::error::Result;
use tally::model::{Balance, Step};

#[derive(Serialize)]
struct JsonOutput<'a> {
    balance: Balance,
    #[serde(skip_serializing_if = "<[Step]>::is_empty")]
    steps: &'a [Step],
}

/// `{label}: {balance}`, preceded by one line per step when the result carries steps.
pub(super) fn render_text(result: &CmdResult, config: &TallyConfig) -> String {
    let precision = config.precision;
    let mut lines: Vec<String> = result
        .steps
        .iter()
        .map(|step| {
            format!(
                "  #{} {:+.p$} -> {:.p$}",
                step.index,
                step.delta,
                step.balance,
                p = precision
            )
        })
        .collect();
    lines.push(format!(
        "{}: {:.p$}",
        config.label,
        result.balance,
        p = precision
    ));
    lines.join("\n")
}

/// Raw `f64` values; precision and label only apply to text output.
pub(super) fn render_json(result: &CmdResult) -> Result<String> {
    let output = JsonOutput {
        balance: result.balance,
        steps: &result.steps,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
