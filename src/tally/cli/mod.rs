//! # CLI Layer
//!
//! The only place in the crate that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Reads files (`--config`)
//! - Installs a logger
//!
//! `run()` parses argv, builds the output config, calls the API and prints the
//! rendered result. Rendering itself is pure (`render.rs`) so it can be tested
//! without capturing stdout.

mod logging;
mod print;
mod render;
mod setup;

use log::debug;
use print::print_messages;
use setup::{Cli, OutputFormat};
use tally::api;
use tally::config::TallyConfig;
use tally::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    debug!(
        "{} amount(s), precision {}, output {:?}",
        cli.amounts.len(),
        config.precision,
        cli.output
    );

    let result = if cli.history {
        api::history(&cli.amounts)?
    } else {
        api::total(&cli.amounts)?
    };
    debug!("final balance {}", result.balance);

    let output = match cli.output {
        OutputFormat::Text => render::render_text(&result, &config),
        OutputFormat::Json => render::render_json(&result)?,
    };
    println!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<TallyConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            TallyConfig::load(path)?
        }
        None => TallyConfig::default(),
    };
    if let Some(precision) = cli.precision {
        config.set_precision(precision)?;
    }
    Ok(config)
}
