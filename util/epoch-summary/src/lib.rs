//! Plain text summaries of epochs and checkpoints.
//!
//! Views are shaped into rows and [`tabled`] tables here; printing them is left to the caller.
mod checkpoints;
mod epochs;
mod format;
mod stats;
mod timer;

#[cfg(test)]
mod tests;

pub use checkpoints::{CHECKPOINT_COLUMNS, CheckpointRow, checkpoints_table};
pub use epochs::{EPOCH_COLUMNS, EpochRow, epochs_table, storage_revenue};
pub use format::{COIN_SYMBOL, format_amount, format_signed_amount, format_timestamp};
pub use stats::EpochStats;
pub use timer::{
    MAX_BAR_WIDTH, epoch_progress, progress_bar, progress_style, progress_widget, show_progress,
    timer_line,
};
