mod checkpoints;
mod epoch;
mod epochs;
mod progress;
mod timer;

pub use self::checkpoints::checkpoints;
pub use self::epoch::epoch;
pub use self::epochs::epochs;
pub use self::progress::progress;
pub use self::timer::timer;

#[cfg(test)]
pub(crate) use self::checkpoints::render_checkpoints;
#[cfg(test)]
pub(crate) use self::epoch::render_epoch;
#[cfg(test)]
pub(crate) use self::epochs::render_epochs;
#[cfg(test)]
pub(crate) use self::progress::render_progress;
#[cfg(test)]
pub(crate) use self::timer::Countdown;
