//! # Tally CLI
//!
//! The binary is the imperative shell around the `tally` library. This file only
//! invokes `cli::run()` and turns its outcome into an exit status; everything
//! user-facing (argv, config files, logging, stdout/stderr) lives in `cli/`.
//!
//! Exit codes:
//! - `0`: the final balance was printed
//! - `1`: too few amounts (usage is printed), an amount that is not a number, or a
//!   bad `--config`/`--precision`
//!
//! clap keeps its own behavior for `--help`, `--version`, and unknown flags.

use tally::error::TallyError;

mod cli;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(TallyError::Usage) => {
            eprintln!("{}", TallyError::Usage);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
