use explorer_app_config::{EpochsArgs, ExitCode};
use explorer_epoch_summary::epochs_table;
use explorer_jsonrpc_types::EpochView;
use explorer_logger::debug;
use explorer_traits::{DataSource, EpochProvider};

pub fn epochs(args: EpochsArgs, source: &dyn DataSource) -> Result<(), ExitCode> {
    let epochs = source.get_epochs()?;
    debug!("{} epochs from source", epochs.len());
    print!("{}", render_epochs(&epochs, args.limit));
    Ok(())
}

pub(crate) fn render_epochs(epochs: &[EpochView], limit: Option<usize>) -> String {
    if epochs.is_empty() {
        return "No epochs\n".to_owned();
    }
    let shown = &epochs[..limit.unwrap_or(epochs.len()).min(epochs.len())];
    format!("{}\n", epochs_table(shown))
}
