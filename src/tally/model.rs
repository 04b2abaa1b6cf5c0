use crate::error::TallyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An account balance. No unit, no range, plain `f64` semantics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Balance(f64);

impl Balance {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the balance after `tx`. `self` is left untouched.
    pub fn apply(self, tx: Transaction) -> Self {
        Self(self.0 + tx.0)
    }
}

/// A signed delta applied to a balance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Transaction(f64);

impl Transaction {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

/// Running balance after the `index`-th transaction (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub delta: Transaction,
    pub balance: Balance,
}

fn parse_amount(s: &str) -> Result<f64, TallyError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| TallyError::InvalidNumber(s.to_string()))
}

impl FromStr for Balance {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s).map(Self)
    }
}

impl FromStr for Transaction {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
