use explorer_app_config::{ExitCode, Setup};
use explorer_logger::info;
use explorer_logger_service::{self, LoggerInitGuard};

/// Keeps the services started for a run alive until it is dropped.
pub struct SetupGuard {
    _logger_guard: LoggerInitGuard,
}

impl SetupGuard {
    pub(crate) fn from_setup(setup: &Setup, version: &str) -> Result<Self, ExitCode> {
        let logger_guard =
            explorer_logger_service::init(setup.config.logger.clone()).map_err(|err| {
                eprintln!("Config Error: {err}");
                ExitCode::Config
            })?;
        info!("epoch-explorer {} starting {}", version, setup.subcommand_name);

        Ok(SetupGuard {
            _logger_guard: logger_guard,
        })
    }
}
