use explorer_app_config::{ExitCode, ProgressArgs};
use explorer_epoch_progress::{EpochProgressCalculator, ProgressResult, ProgressStatus};
use explorer_epoch_summary::{
    epoch_progress, format_timestamp, progress_bar, progress_widget, show_progress,
};
use explorer_jsonrpc_types::EpochView;
use explorer_systemtime::{Clock, FixedClock, SystemClock};
use explorer_traits::{DataSource, EpochProvider};
use indicatif::ProgressDrawTarget;

pub fn progress(args: ProgressArgs, source: &dyn DataSource) -> Result<(), ExitCode> {
    let epoch = source.current_epoch()?;
    let config = args.config.progress;
    match args.at {
        Some(at) => show(
            &EpochProgressCalculator::with_config(FixedClock(at), config),
            epoch.as_ref(),
            args.width,
        ),
        None => show(
            &EpochProgressCalculator::with_config(SystemClock, config),
            epoch.as_ref(),
            args.width,
        ),
    }
    Ok(())
}

fn show<C: Clock>(
    calculator: &EpochProgressCalculator<C>,
    epoch: Option<&EpochView>,
    width: usize,
) {
    let bar = progress_widget(width, ProgressDrawTarget::stdout());
    if bar.is_hidden() {
        print!("{}", render_progress(calculator, epoch, width));
        return;
    }
    let (summary, progress) = summarize(calculator, epoch);
    print!("{summary}");
    show_progress(&bar, &progress, progress.label.clone());
    bar.finish_at_current_pos();
}

fn describe(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Unknown => "unknown",
        ProgressStatus::InProgress => "in progress",
        ProgressStatus::Ended => "ended",
    }
}

fn optional_timestamp(timestamp: Option<u64>) -> String {
    timestamp.map(format_timestamp).unwrap_or_else(|| "-".to_owned())
}

// Every line above the bar.
fn summarize<C: Clock>(
    calculator: &EpochProgressCalculator<C>,
    epoch: Option<&EpochView>,
) -> (String, ProgressResult) {
    let Some(epoch) = epoch else {
        let progress = calculator.progress(None, None);
        let summary = format!("Epoch -\nStatus: {}\n", describe(progress.status));
        return (summary, progress);
    };

    let progress = epoch_progress(calculator, epoch);
    let summary = format!(
        "Epoch {}\nStart:  {}\nEnd:    {}\nStatus: {}\n",
        epoch.number(),
        optional_timestamp(epoch.start_timestamp_ms()),
        optional_timestamp(epoch.end_timestamp_ms()),
        describe(progress.status),
    );
    (summary, progress)
}

pub(crate) fn render_progress<C: Clock>(
    calculator: &EpochProgressCalculator<C>,
    epoch: Option<&EpochView>,
    width: usize,
) -> String {
    let (mut output, progress) = summarize(calculator, epoch);
    output.push_str(&progress_bar(&progress, width));
    output.push('\n');
    if !progress.label.is_empty() {
        output.push_str(&progress.label);
        output.push('\n');
    }
    output
}
