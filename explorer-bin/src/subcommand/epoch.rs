use explorer_app_config::{EpochArgs, ExitCode};
use explorer_epoch_summary::{EpochStats, format_timestamp};
use explorer_jsonrpc_types::EpochView;
use explorer_logger::warn;
use explorer_traits::{DataSource, EpochProvider};

pub fn epoch(args: EpochArgs, source: &dyn DataSource) -> Result<(), ExitCode> {
    match source.get_epoch(args.number)? {
        Some(epoch) => {
            print!("{}", render_epoch(&epoch));
            Ok(())
        }
        None => {
            warn!("epoch {} is not found", args.number);
            eprintln!("Epoch {} not found", args.number);
            Err(ExitCode::Failure)
        }
    }
}

pub(crate) fn render_epoch(epoch: &EpochView) -> String {
    let stats = EpochStats::from(epoch).to_string();
    let mut period = String::new();
    if let Some(start) = epoch.start_timestamp_ms() {
        period.push_str(&format!("Started: {}\n", format_timestamp(start)));
    }
    if let Some(end) = epoch.end_timestamp_ms() {
        period.push_str(&format!("End:     {}\n", format_timestamp(end)));
    }
    if let Some(set) = epoch.checkpoint_set {
        period.push_str(&format!("Checkpoints: {} - {}\n", set.first(), set.last()));
    }
    match stats.split_once('\n') {
        Some((title, rest)) if !period.is_empty() => format!("{title}\n{period}{rest}"),
        _ => stats,
    }
}
