use crate::model::{Balance, Step};

pub mod history;
pub mod total;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub balance: Balance,
    pub steps: Vec<Step>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_balance(mut self, balance: Balance) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }
}

/// Notes shared by every command about the inputs and the final balance.
fn annotate(result: &mut CmdResult, transaction_count: usize) {
    if transaction_count == 0 {
        result.add_message(CmdMessage::info("No transactions; balance unchanged"));
    }
    if !result.balance.value().is_finite() {
        result.add_message(CmdMessage::warning(format!(
            "Final balance is not a finite number ({})",
            result.balance
        )));
    }
}
