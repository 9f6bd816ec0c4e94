//! Epoch explorer executable.
//!
//! The root package only forwards to [`run_app`].
mod setup_guard;
mod source;
mod subcommand;

#[cfg(test)]
mod tests;

use explorer_app_config::{ExitCode, Setup, cli};
use explorer_logger::debug;
use setup_guard::SetupGuard;

/// The executable main entry.
///
/// It returns `Ok` when the process exits normally, otherwise the `ExitCode` is converted to the
/// process exit status code.
///
/// ## Parameters
///
/// * `version` - The version printed by `--version`.
pub fn run_app(version: &str) -> Result<(), ExitCode> {
    let app_matches = cli::get_matches(version)?;
    let (cmd, matches) = app_matches.subcommand().ok_or_else(|| {
        eprintln!("expect a subcommand");
        ExitCode::Cli
    })?;

    let setup = Setup::from_matches(&app_matches)?;
    let _guard = SetupGuard::from_setup(&setup, version)?;
    debug!("epoch-explorer {} {}", version, cmd);

    let source = source::open(&setup.config.source)?;
    match cmd {
        cli::CMD_TIMER => subcommand::timer(setup.timer(matches)?, source.as_ref()),
        cli::CMD_PROGRESS => subcommand::progress(setup.progress(matches)?, source.as_ref()),
        cli::CMD_EPOCHS => subcommand::epochs(setup.epochs(matches)?, source.as_ref()),
        cli::CMD_EPOCH => subcommand::epoch(setup.epoch(matches)?, source.as_ref()),
        cli::CMD_CHECKPOINTS => {
            subcommand::checkpoints(setup.checkpoints(matches)?, source.as_ref())
        }
        _ => {
            eprintln!("unknown subcommand {cmd}");
            Err(ExitCode::Cli)
        }
    }
}
