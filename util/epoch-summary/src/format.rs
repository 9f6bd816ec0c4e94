use chrono::DateTime;
use thousands::Separable;

/// Symbol of the native coin.
pub const COIN_SYMBOL: &str = "SUI";

/// Renders a coin amount, `1,234 SUI`.
pub fn format_amount(amount: u128) -> String {
    format!("{} {}", amount.separate_with_commas(), COIN_SYMBOL)
}

/// Renders a coin amount which may be negative, `-1,234 SUI`.
pub fn format_signed_amount(amount: i128) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}", sign, format_amount(amount.unsigned_abs()))
}

/// Renders millis since the unix epoch as UTC time, or the raw number when out of range.
pub fn format_timestamp(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}
