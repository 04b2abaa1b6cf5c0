//! # Functional Core
//!
//! Pure reducers over [`Balance`] and [`Transaction`]. Nothing here performs I/O,
//! mutates its inputs, or can fail. NaN and infinities propagate by IEEE rules.

use crate::model::{Balance, Step, Transaction};

/// Applies every transaction to `start`, left to right.
///
/// An empty slice returns `start` unchanged.
pub fn apply_transactions(start: Balance, transactions: &[Transaction]) -> Balance {
    transactions
        .iter()
        .fold(start, |balance, &tx| balance.apply(tx))
}

/// Like [`apply_transactions`], but keeps every intermediate balance.
///
/// The last step's balance always equals `apply_transactions(start, transactions)`.
pub fn running_balances(start: Balance, transactions: &[Transaction]) -> Vec<Step> {
    transactions
        .iter()
        .enumerate()
        .scan(start, |balance, (i, &tx)| {
            *balance = balance.apply(tx);
            Some(Step {
                index: i + 1,
                delta: tx,
                balance: *balance,
            })
        })
        .collect()
}
