//! Epoch explorer command line arguments and config options.
mod app_config;
mod args;
pub mod cli;
mod exit_code;


pub use app_config::{APP_CONFIG_FILE_NAME, AppConfig, SourceConfig};
pub use args::{CheckpointsArgs, EpochArgs, EpochsArgs, ProgressArgs, TimerArgs};
pub use exit_code::ExitCode;

use clap::ArgMatches;
use explorer_epoch_progress::LabelStyle;
use std::path::PathBuf;

/// The parsed config and the chosen subcommand.
pub struct Setup {
    /// Subcommand name.
    pub subcommand_name: String,
    /// Parsed `explorer.toml` with command line overrides applied.
    pub config: AppConfig,
}

impl Setup {
    /// Loads the config for the subcommand in `matches`.
    ///
    /// `--fixture` and `--seed` replace the `[source]` table of the config file.
    pub fn from_matches(matches: &ArgMatches) -> Result<Setup, ExitCode> {
        let (subcommand_name, sub_matches) = match matches.subcommand() {
            Some(subcommand) => subcommand,
            None => {
                eprintln!("expect a subcommand");
                return Err(ExitCode::Cli);
            }
        };

        let root_dir = Self::root_dir_from_matches(sub_matches)?;
        let mut config = AppConfig::load(&root_dir)?;
        if let Some(fixture) = sub_matches.get_one::<PathBuf>(cli::ARG_FIXTURE) {
            config.source.fixture = Some(fixture.clone());
            config.source.seed = None;
        }
        if let Some(seed) = sub_matches.get_one::<u64>(cli::ARG_SEED) {
            config.source.fixture = None;
            config.source.seed = Some(*seed);
        }

        Ok(Setup {
            subcommand_name: subcommand_name.to_owned(),
            config,
        })
    }

    /// The `-C` directory, or the current directory.
    pub fn root_dir_from_matches(matches: &ArgMatches) -> Result<PathBuf, ExitCode> {
        let config_dir = match matches.get_one::<PathBuf>(cli::ARG_CONFIG_DIR) {
            Some(config_dir) => config_dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(config_dir)
    }

    /// Arguments of `timer`.
    pub fn timer(self, matches: &ArgMatches) -> Result<TimerArgs, ExitCode> {
        let mut config = self.config;
        apply_style(&mut config, matches);
        Ok(TimerArgs {
            config: Box::new(config),
            watch: matches.get_flag(cli::ARG_WATCH),
        })
    }

    /// Arguments of `progress`.
    pub fn progress(self, matches: &ArgMatches) -> Result<ProgressArgs, ExitCode> {
        let mut config = self.config;
        apply_style(&mut config, matches);
        Ok(ProgressArgs {
            config: Box::new(config),
            at: matches.get_one::<u64>(cli::ARG_AT).copied(),
            width: matches
                .get_one::<u64>(cli::ARG_WIDTH)
                .and_then(|width| usize::try_from(*width).ok())
                .unwrap_or(cli::DEFAULT_BAR_WIDTH),
        })
    }

    /// Arguments of `epochs`.
    pub fn epochs(self, matches: &ArgMatches) -> Result<EpochsArgs, ExitCode> {
        Ok(EpochsArgs {
            config: Box::new(self.config),
            limit: matches.get_one::<usize>(cli::ARG_LIMIT).copied(),
        })
    }

    /// Arguments of `epoch`.
    pub fn epoch(self, matches: &ArgMatches) -> Result<EpochArgs, ExitCode> {
        Ok(EpochArgs {
            config: Box::new(self.config),
            number: required_epoch(matches)?,
        })
    }

    /// Arguments of `checkpoints`.
    pub fn checkpoints(self, matches: &ArgMatches) -> Result<CheckpointsArgs, ExitCode> {
        Ok(CheckpointsArgs {
            config: Box::new(self.config),
            epoch: required_epoch(matches)?,
            limit: matches.get_one::<usize>(cli::ARG_LIMIT).copied(),
        })
    }
}

fn apply_style(config: &mut AppConfig, matches: &ArgMatches) {
    match matches.get_one::<String>(cli::ARG_STYLE).map(String::as_str) {
        Some("largest") => config.progress.style = LabelStyle::Largest,
        Some("compound") => config.progress.style = LabelStyle::Compound,
        _ => {}
    }
}

fn required_epoch(matches: &ArgMatches) -> Result<u64, ExitCode> {
    matches.get_one::<u64>(cli::ARG_EPOCH).copied().ok_or_else(|| {
        eprintln!("expect an epoch number");
        ExitCode::Cli
    })
}
