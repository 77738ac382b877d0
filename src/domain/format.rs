/// Millisecond divisors for the duration breakdown
const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Format a millisecond count as a days/hours/minutes/seconds breakdown.
///
/// Once any higher unit is non-zero, every unit below it is included even
/// when zero, e.g. `3_605_000` renders as "1 hours 0 minutes 5 seconds".
/// Labels are always plural. Anything below one second renders as
/// "0 seconds".
pub fn format_duration(milliseconds: u64) -> String {
    let days = milliseconds / MS_PER_DAY;
    let mut rest = milliseconds % MS_PER_DAY;

    let hours = rest / MS_PER_HOUR;
    rest %= MS_PER_HOUR;

    let minutes = rest / MS_PER_MINUTE;
    rest %= MS_PER_MINUTE;

    let seconds = rest / MS_PER_SECOND;

    let mut parts: Vec<String> = Vec::new();

    if days > 0 {
        parts.push(format!("{} days", days));
    }
    if hours > 0 || !parts.is_empty() {
        parts.push(format!("{} hours", hours));
    }
    if minutes > 0 || !parts.is_empty() {
        parts.push(format!("{} minutes", minutes));
    }
    if seconds > 0 || !parts.is_empty() {
        parts.push(format!("{} seconds", seconds));
    }

    if parts.is_empty() {
        return "0 seconds".to_string();
    }

    parts.join(" ")
}
