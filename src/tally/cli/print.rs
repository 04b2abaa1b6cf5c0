use colored::Colorize;
use tally::api::{CmdMessage, MessageLevel};

/// Messages go to stderr so stdout carries only the balance.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
