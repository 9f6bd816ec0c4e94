use explorer_app_config::{ExitCode, SourceConfig};
use explorer_epoch_source::{FixtureSource, MockSource};
use explorer_error::Error;
use explorer_logger::{error, info};
use explorer_systemtime::SystemClock;
use explorer_traits::DataSource;

/// Opens the configured data source, the fixture when one is set, the mock generator otherwise.
pub(crate) fn open(config: &SourceConfig) -> Result<Box<dyn DataSource>, ExitCode> {
    if let Some(fixture) = &config.fixture {
        let source = FixtureSource::load(fixture).map_err(|err| {
            error!("{}", err);
            Error::from(err)
        })?;
        info!("serving fixture {}", fixture.display());
        return Ok(Box::new(source));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("serving mock history, seed {}", seed);
    Ok(Box::new(MockSource::new(seed, &SystemClock)))
}
