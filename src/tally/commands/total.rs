use crate::commands::CmdResult;
use crate::core::apply_transactions;
use crate::model::{Balance, Transaction};

use super::annotate;

pub fn run(start: Balance, transactions: &[Transaction]) -> CmdResult {
    let mut result = CmdResult::default().with_balance(apply_transactions(start, transactions));
    annotate(&mut result, transactions.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn computes_final_balance_without_steps() {
        let txs = [50.0, -20.0, 10.0].map(Transaction::new);
        let result = run(Balance::new(100.0), &txs);
        assert_eq!(result.balance.value(), 140.0);
        assert!(result.steps.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn notes_when_nothing_was_applied() {
        let result = run(Balance::new(7.0), &[]);
        assert_eq!(result.balance.value(), 7.0);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn warns_on_non_finite_balance() {
        let result = run(Balance::new(1.0), &[Transaction::new(f64::INFINITY)]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("inf"));
    }
}
