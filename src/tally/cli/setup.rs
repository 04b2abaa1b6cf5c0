use clap::{Arg, Command, CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tally", bin_name = "tally", version = env!("TALLY_VERSION"))]
#[command(about = "Add transactions to a starting balance", long_about = None)]
pub struct Cli {
    /// Initial balance followed by one or more transaction amounts
    #[arg(value_name = "AMOUNT")]
    pub amounts: Vec<String>,

    /// Decimal places to print (overrides the config file)
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Print the running balance after each transaction
    #[arg(long)]
    pub history: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Read precision and label from a JSON file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_from(separate_amounts(std::env::args_os()))
    }
}

/// Reorders argv so every token that is not one of our options lands after `--`.
///
/// Amounts such as `-1e-2`, `-.5`, `-inf` or a stray `-abc` then reach the amount
/// parser as values instead of being rejected by clap as unknown flags. Options may
/// appear anywhere on the line; amounts keep their relative order.
pub fn separate_amounts<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();

    let mut args = args.into_iter().map(|arg| -> OsString { arg.into() });
    let mut options: Vec<OsString> = args.next().into_iter().collect();
    let mut amounts = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            amounts.extend(&mut args);
            break;
        }
        match arg.to_str().and_then(|s| option_arity(&cmd, s)) {
            Some(takes_value) => {
                options.push(arg);
                if takes_value {
                    options.extend(args.next());
                }
            }
            None => amounts.push(arg),
        }
    }

    options.push("--".into());
    options.extend(amounts);
    options
}

/// `Some(needs_next_token)` when `token` is one of the command's options.
fn option_arity(cmd: &Command, token: &str) -> Option<bool> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let arg = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        return Some(takes_value(arg) && !inline_value);
    }

    let cluster = token.strip_prefix('-')?;
    let mut chars = cluster.chars();
    let first = chars.next()?;
    let arg = cmd.get_arguments().find(|a| a.get_short() == Some(first))?;
    if takes_value(arg) {
        return Some(chars.as_str().is_empty());
    }
    // -vh
    chars
        .all(|c| {
            cmd.get_arguments()
                .any(|a| a.get_short() == Some(c) && !takes_value(a))
        })
        .then_some(false)
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}
