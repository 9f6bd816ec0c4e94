//! Command line of the epoch explorer.
use clap::{Arg, ArgAction, ArgMatches, Command};
use explorer_epoch_summary::MAX_BAR_WIDTH;
use std::path::PathBuf;

use crate::ExitCode;

/// The binary name.
pub const BIN_NAME: &str = "epoch-explorer";

/// Subcommand `timer`.
pub const CMD_TIMER: &str = "timer";
/// Subcommand `progress`.
pub const CMD_PROGRESS: &str = "progress";
/// Subcommand `epochs`.
pub const CMD_EPOCHS: &str = "epochs";
/// Subcommand `epoch`.
pub const CMD_EPOCH: &str = "epoch";
/// Subcommand `checkpoints`.
pub const CMD_CHECKPOINTS: &str = "checkpoints";

/// Config directory, `-C`.
pub const ARG_CONFIG_DIR: &str = "config-dir";
/// Fixture file overriding the configured source.
pub const ARG_FIXTURE: &str = "fixture";
/// Mock generator seed overriding the configured one.
pub const ARG_SEED: &str = "seed";
/// Keep refreshing the countdown.
pub const ARG_WATCH: &str = "watch";
/// Compute at this instant instead of now.
pub const ARG_AT: &str = "at";
/// Progress bar width.
pub const ARG_WIDTH: &str = "width";
/// Remaining time label style.
pub const ARG_STYLE: &str = "style";
/// Maximum number of rows.
pub const ARG_LIMIT: &str = "limit";
/// Epoch number.
pub const ARG_EPOCH: &str = "epoch";

/// Default width of the progress bar.
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Label style names accepted by `--style`.
pub const STYLES: [&str; 2] = ["largest", "compound"];

/// The root command.
pub fn basic_app() -> Command {
    Command::new(BIN_NAME)
        .author("Epoch Explorer Dev <dev@epoch-explorer.org>")
        .about("Epoch Explorer - epoch progress and history")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_CONFIG_DIR)
                .global(true)
                .short('C')
                .value_name("path")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help(
                    "Runs as if epoch-explorer was started in <path> instead of the current \
                     working directory.",
                ),
        )
        .arg(
            Arg::new(ARG_FIXTURE)
                .global(true)
                .long(ARG_FIXTURE)
                .value_name("file")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Serves epochs and checkpoints from a JSON fixture"),
        )
        .arg(
            Arg::new(ARG_SEED)
                .global(true)
                .long(ARG_SEED)
                .value_name("seed")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .conflicts_with(ARG_FIXTURE)
                .help("Seed of the generated mock history"),
        )
        .subcommand(timer())
        .subcommand(progress())
        .subcommand(epochs())
        .subcommand(epoch())
        .subcommand(checkpoints())
}

/// Parses the process arguments.
///
/// `--help` and `--version` print and exit the process, argument errors are printed and mapped
/// to [`ExitCode::Cli`].
pub fn get_matches(version: &str) -> Result<ArgMatches, ExitCode> {
    match basic_app().version(version.to_owned()).try_get_matches() {
        Ok(matches) => Ok(matches),
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            Err(ExitCode::Cli)
        }
    }
}

fn arg_style() -> Arg {
    Arg::new(ARG_STYLE)
        .long(ARG_STYLE)
        .action(ArgAction::Set)
        .value_parser(STYLES)
        .help("How the remaining time is rendered, overrides the config file")
}

fn arg_limit() -> Arg {
    Arg::new(ARG_LIMIT)
        .short('n')
        .long(ARG_LIMIT)
        .action(ArgAction::Set)
        .value_parser(clap::value_parser!(usize))
        .help("Prints at most this many rows")
}

fn arg_epoch(help: &'static str) -> Arg {
    Arg::new(ARG_EPOCH)
        .required(true)
        .action(ArgAction::Set)
        .value_parser(clap::value_parser!(u64))
        .help(help)
}

pub(crate) fn timer() -> Command {
    Command::new(CMD_TIMER)
        .about("Prints the countdown of the current epoch")
        .arg(
            Arg::new(ARG_WATCH)
                .short('w')
                .long(ARG_WATCH)
                .action(ArgAction::SetTrue)
                .help("Refreshes the countdown every second until the epoch ends"),
        )
        .arg(arg_style())
}

pub(crate) fn progress() -> Command {
    Command::new(CMD_PROGRESS)
        .about(
            "Prints the progress of the current epoch\n\
             Example:\n\
             epoch-explorer progress --width 50",
        )
        .arg(
            Arg::new(ARG_AT)
                .long(ARG_AT)
                .value_name("millis")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .help("Computes the progress at this unix time in milliseconds"),
        )
        .arg(
            Arg::new(ARG_WIDTH)
                .long(ARG_WIDTH)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64).range(1..=MAX_BAR_WIDTH as u64))
                .default_value(DEFAULT_BAR_WIDTH.to_string())
                .help("Width of the progress bar in cells, at most 500"),
        )
        .arg(arg_style())
}

pub(crate) fn epochs() -> Command {
    Command::new(CMD_EPOCHS)
        .about("Lists epochs, newest first")
        .arg(arg_limit())
}

pub(crate) fn epoch() -> Command {
    Command::new(CMD_EPOCH)
        .about(
            "Prints the activity and rewards of an epoch\n\
             Example:\n\
             epoch-explorer epoch 5",
        )
        .arg(arg_epoch("The epoch number"))
}

pub(crate) fn checkpoints() -> Command {
    Command::new(CMD_CHECKPOINTS)
        .about("Lists the checkpoints of an epoch")
        .arg(arg_epoch("The epoch which contains the checkpoints"))
        .arg(arg_limit())
}
