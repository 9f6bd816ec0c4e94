use explorer_app_config::{ExitCode, TimerArgs, cli::DEFAULT_BAR_WIDTH};
use explorer_epoch_progress::{EpochProgressCalculator, ProgressResult, ProgressStatus};
use explorer_epoch_summary::{epoch_progress, progress_widget, show_progress, timer_line};
use explorer_jsonrpc_types::EpochView;
use explorer_logger::debug;
use explorer_systemtime::{Clock, SystemClock};
use explorer_traits::{DataSource, EpochProvider};
use indicatif::{ProgressBar, ProgressDrawTarget};
use std::io::{self, Write};
use std::{thread, time::Duration};

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

pub fn timer(args: TimerArgs, source: &dyn DataSource) -> Result<(), ExitCode> {
    let calculator = EpochProgressCalculator::with_config(SystemClock, args.config.progress);
    let countdown = Countdown::new(calculator, source.current_epoch()?);
    let bar = progress_widget(DEFAULT_BAR_WIDTH, ProgressDrawTarget::stdout());
    countdown.run(&mut io::stdout(), &bar, args.watch, || {
        thread::sleep(REFRESH_INTERVAL)
    })?;
    Ok(())
}

/// The countdown of the epoch in progress.
pub(crate) struct Countdown<C> {
    calculator: EpochProgressCalculator<C>,
    epoch: Option<EpochView>,
}

impl<C: Clock> Countdown<C> {
    pub(crate) fn new(calculator: EpochProgressCalculator<C>, epoch: Option<EpochView>) -> Self {
        Countdown { calculator, epoch }
    }

    pub(crate) fn clock(&self) -> &C {
        self.calculator.clock()
    }

    fn progress(&self) -> ProgressResult {
        match &self.epoch {
            Some(epoch) => epoch_progress(&self.calculator, epoch),
            None => self.calculator.progress(None, None),
        }
    }

    /// Shows the countdown on `bar`, then again after every `tick` while `watch` is set and
    /// the epoch is in progress.
    ///
    /// A hidden `bar` means the output is not a terminal, every countdown line is written to
    /// `out` instead.
    pub(crate) fn run<W, F>(
        &self,
        out: &mut W,
        bar: &ProgressBar,
        watch: bool,
        mut tick: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnMut(),
    {
        let number = self.epoch.as_ref().map(EpochView::number);
        loop {
            let progress = self.progress();
            let line = timer_line(number, &progress);
            if bar.is_hidden() {
                writeln!(out, "{line}")?;
                out.flush()?;
            }
            show_progress(bar, &progress, line);
            if !watch || progress.status != ProgressStatus::InProgress {
                debug!("countdown stops: {:?}", progress.status);
                bar.finish_at_current_pos();
                return Ok(());
            }
            tick();
        }
    }
}
