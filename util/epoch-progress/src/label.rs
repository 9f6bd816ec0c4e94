use serde::{Deserialize, Serialize};

/// Milliseconds in a second.
pub const SECOND_MILLIS: u64 = 1_000;
/// Milliseconds in a minute.
pub const MINUTE_MILLIS: u64 = 60 * SECOND_MILLIS;
/// Milliseconds in an hour.
pub const HOUR_MILLIS: u64 = 60 * MINUTE_MILLIS;
/// Milliseconds in a day.
pub const DAY_MILLIS: u64 = 24 * HOUR_MILLIS;

/// The label of an empty or inverted window.
pub const INVERTED_WINDOW_LABEL: &str = "0s left";

const UNITS: [(u64, &str); 4] = [
    (DAY_MILLIS, "d"),
    (HOUR_MILLIS, "h"),
    (MINUTE_MILLIS, "m"),
    (SECOND_MILLIS, "s"),
];

/// How a remaining duration is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// The largest whole unit only, `"3h left"`.
    #[default]
    Largest,
    /// The largest whole unit and the next smaller one when it is not zero, `"3h 12m left"`.
    Compound,
}

/// Renders `remaining` millis as `"<n><unit> left"`.
///
/// The unit is the largest of days, hours, minutes and seconds with a whole count of at least
/// one. Less than a second renders as `"0s left"`.
///
/// ## Examples
///
/// ```
/// use explorer_epoch_progress::{format_remaining, LabelStyle, HOUR_MILLIS, MINUTE_MILLIS};
///
/// let remaining = 3 * HOUR_MILLIS + 12 * MINUTE_MILLIS;
/// assert_eq!(format_remaining(remaining, LabelStyle::Largest), "3h left");
/// assert_eq!(format_remaining(remaining, LabelStyle::Compound), "3h 12m left");
/// assert_eq!(format_remaining(999, LabelStyle::Largest), "0s left");
/// ```
pub fn format_remaining(remaining: u64, style: LabelStyle) -> String {
    let Some(index) = UNITS.iter().position(|(unit, _)| remaining >= *unit) else {
        return INVERTED_WINDOW_LABEL.to_owned();
    };

    let (unit, suffix) = UNITS[index];
    let mut label = format!("{}{}", remaining / unit, suffix);
    if style == LabelStyle::Compound {
        if let Some((next_unit, next_suffix)) = UNITS.get(index + 1) {
            let count = (remaining % unit) / next_unit;
            if count > 0 {
                label.push_str(&format!(" {count}{next_suffix}"));
            }
        }
    }
    label.push_str(" left");
    label
}
