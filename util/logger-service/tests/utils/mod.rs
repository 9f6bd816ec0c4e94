#![allow(dead_code)]

use explorer_logger::Level;
use explorer_logger_config::Config;
use std::{fs, path::Path};

pub fn config_in_tempdir<F>(modify: F) -> (Config, tempfile::TempDir)
where
    F: Fn(&mut Config),
{
    let tmp_dir = tempfile::Builder::new()
        .prefix("explorer_logger_test")
        .tempdir()
        .expect("create tempdir failed");
    let mut config = Config {
        file: tmp_dir.path().join("explorer.log"),
        log_to_file: true,
        log_to_stderr: false,
        color: false,
        ..Default::default()
    };
    modify(&mut config);
    (config, tmp_dir)
}

pub fn do_tests<F>(config: Config, func: F)
where
    F: FnOnce(),
{
    let guard = explorer_logger_service::init(config).expect("init logger");
    func();
    drop(guard);
}

pub fn all_log_levels() -> &'static [Level] {
    &[
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ]
}

pub fn output_log_for_all_log_levels(line_content: &str) {
    explorer_logger::trace!("{}", line_content);
    explorer_logger::debug!("{}", line_content);
    explorer_logger::info!("{}", line_content);
    explorer_logger::warn!("{}", line_content);
    explorer_logger::error!("{}", line_content);
}

pub fn has_line_in_log_file(log_file: &Path, level: Level, line_content: &str) -> bool {
    let content = fs::read_to_string(log_file).unwrap_or_default();
    let level = format!(" {} ", level.as_str());
    content
        .lines()
        .any(|line| line.contains(&level) && line.contains(line_content))
}
