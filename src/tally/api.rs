//! # API Facade
//!
//! The single entry point for tally operations, whatever the UI.
//!
//! The facade parses raw argument strings into typed amounts and dispatches to the
//! command layer. Parsing is the only fallible step in the whole library, so every
//! error a caller can see originates here. Nothing in this module prints, logs, or
//! exits.

use crate::commands;
use crate::error::{Result, TallyError};
use crate::model::{Balance, Transaction};

pub use commands::{CmdMessage, CmdResult, MessageLevel};

/// Parses `[initial, delta1, delta2, ...]`.
///
/// Requires at least two inputs. Stops at the first input that is not a number and
/// reports it, leaving the rest unexamined.
pub fn parse_amounts<I: AsRef<str>>(inputs: &[I]) -> Result<(Balance, Vec<Transaction>)> {
    let (first, rest) = match inputs {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => return Err(TallyError::Usage),
    };

    let start = first.as_ref().parse::<Balance>()?;
    let transactions = rest
        .iter()
        .map(|s| s.as_ref().parse::<Transaction>())
        .collect::<Result<Vec<_>>>()?;

    Ok((start, transactions))
}

pub fn total<I: AsRef<str>>(inputs: &[I]) -> Result<commands::CmdResult> {
    let (start, transactions) = parse_amounts(inputs)?;
    Ok(commands::total::run(start, &transactions))
}

pub fn history<I: AsRef<str>>(inputs: &[I]) -> Result<commands::CmdResult> {
    let (start, transactions) = parse_amounts(inputs)?;
    Ok(commands::history::run(start, &transactions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_start_from_deltas() {
        let (start, txs) = parse_amounts(&["100", "50", "-20", "10"]).unwrap();
        assert_eq!(start.value(), 100.0);
        let amounts: Vec<f64> = txs.iter().map(|t| t.amount()).collect();
        assert_eq!(amounts, vec![50.0, -20.0, 10.0]);
    }

    #[test]
    fn fewer_than_two_inputs_is_a_usage_error() {
        let none: [&str; 0] = [];
        assert!(matches!(parse_amounts(&none), Err(TallyError::Usage)));
        assert!(matches!(parse_amounts(&["100"]), Err(TallyError::Usage)));
    }

    #[test]
    fn reports_first_bad_input() {
        let err = parse_amounts(&["100", "abc", "xyz"]).unwrap_err();
        assert!(matches!(err, TallyError::InvalidNumber(ref s) if s == "abc"));
    }

    #[test]
    fn bad_initial_balance_is_reported() {
        let err = parse_amounts(&["ten", "5"]).unwrap_err();
        assert!(matches!(err, TallyError::InvalidNumber(ref s) if s == "ten"));
    }

    #[test]
    fn usage_is_checked_before_parsing() {
        assert!(matches!(parse_amounts(&["abc"]), Err(TallyError::Usage)));
    }

    #[test]
    fn total_dispatches_to_total_command() {
        let result = total(&["100", "50", "-20", "10"]).unwrap();
        assert_eq!(result.balance.value(), 140.0);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn history_dispatches_to_history_command() {
        let args = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let result = history(&args).unwrap();
        assert_eq!(result.balance.value(), 6.0);
        assert_eq!(result.steps.len(), 2);
    }
}
