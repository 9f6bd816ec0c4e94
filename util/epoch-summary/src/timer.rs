use explorer_epoch_progress::{EpochProgressCalculator, ProgressResult, ProgressStatus};
use explorer_jsonrpc_types::EpochView;
use explorer_systemtime::Clock;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Widest progress bar drawn, wider requests are narrowed to it.
pub const MAX_BAR_WIDTH: usize = 500;

/// The countdown line of the current epoch, `"Epoch 5 in progress. 3h left"`.
///
/// An unknown epoch number renders as `-`. Once the epoch has ended the line is
/// `"Epoch 5. Epoch ended"`.
pub fn timer_line(epoch: Option<u64>, progress: &ProgressResult) -> String {
    let number = epoch.map_or_else(|| "-".to_owned(), |number| number.to_string());
    let line = match progress.status {
        ProgressStatus::Ended => format!("Epoch {}. {}", number, progress.label),
        ProgressStatus::InProgress | ProgressStatus::Unknown => {
            format!("Epoch {} in progress. {}", number, progress.label)
        }
    };
    line.trim_end().to_owned()
}

/// The progress of `epoch` now.
pub fn epoch_progress<C: Clock>(
    calculator: &EpochProgressCalculator<C>,
    epoch: &EpochView,
) -> ProgressResult {
    calculator.progress(epoch.start_timestamp_ms(), epoch.end_timestamp_ms())
}

/// A text progress bar, `[#####-----] 50%`, with `width` cells.
///
/// This is the plain rendering for output which is not a terminal, see [`progress_widget`].
pub fn progress_bar(progress: &ProgressResult, width: usize) -> String {
    let width = width.min(MAX_BAR_WIDTH);
    let filled = ((progress.fraction.clamp(0.0, 1.0) * width as f64).floor() as usize).min(width);
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress.percent()
    )
}

/// Style of the terminal progress bar, `[#####-----] 50% 3h left`, with `width` cells.
pub fn progress_style(width: usize) -> ProgressStyle {
    let width = width.clamp(1, MAX_BAR_WIDTH);
    ProgressStyle::default_bar()
        .template(&format!("[{{bar:{width}}}] {{pos}}% {{msg}}"))
        .progress_chars("##-")
}

/// A progress bar over percents drawn on `target`.
///
/// The bar is hidden when `target` is not a terminal.
pub fn progress_widget(width: usize, target: ProgressDrawTarget) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(100, target);
    bar.set_style(progress_style(width));
    bar
}

/// Moves `bar` to `progress` with `message` next to it.
pub fn show_progress(bar: &ProgressBar, progress: &ProgressResult, message: String) {
    bar.set_position(u64::from(progress.percent()));
    bar.set_message(message);
}
