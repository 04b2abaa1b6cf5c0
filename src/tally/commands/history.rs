use crate::commands::CmdResult;
use crate::core::{apply_transactions, running_balances};
use crate::model::{Balance, Transaction};

use super::annotate;

pub fn run(start: Balance, transactions: &[Transaction]) -> CmdResult {
    let mut result = CmdResult::default()
        .with_balance(apply_transactions(start, transactions))
        .with_steps(running_balances(start, transactions));
    annotate(&mut result, transactions.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_every_step() {
        let txs = [50.0, -20.0, 10.0].map(Transaction::new);
        let result = run(Balance::new(100.0), &txs);
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0].balance.value(), 150.0);
        assert_eq!(result.steps[2].balance, result.balance);
    }

    #[test]
    fn no_transactions_means_no_steps() {
        let result = run(Balance::new(3.0), &[]);
        assert!(result.steps.is_empty());
        assert_eq!(result.balance.value(), 3.0);
    }
}
