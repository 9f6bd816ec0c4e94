use explorer_app_config::{CheckpointsArgs, ExitCode};
use explorer_epoch_summary::checkpoints_table;
use explorer_jsonrpc_types::CheckpointView;
use explorer_logger::warn;
use explorer_traits::{CheckpointProvider, DataSource, EpochProvider};

pub fn checkpoints(args: CheckpointsArgs, source: &dyn DataSource) -> Result<(), ExitCode> {
    if source.get_epoch(args.epoch)?.is_none() {
        warn!("epoch {} is not found", args.epoch);
        eprintln!("Epoch {} not found", args.epoch);
        return Err(ExitCode::Failure);
    }
    let checkpoints = source.get_checkpoints(args.epoch)?;
    print!("{}", render_checkpoints(args.epoch, &checkpoints, args.limit));
    Ok(())
}

pub(crate) fn render_checkpoints(
    epoch: u64,
    checkpoints: &[CheckpointView],
    limit: Option<usize>,
) -> String {
    if checkpoints.is_empty() {
        return format!("No checkpoints in epoch {epoch}\n");
    }
    let shown = &checkpoints[..limit.unwrap_or(checkpoints.len()).min(checkpoints.len())];
    format!("{}\n", checkpoints_table(shown))
}
