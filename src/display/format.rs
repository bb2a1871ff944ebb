//! Display formatting for view counts and upload ages.

use chrono::{Local, NaiveDateTime};

use crate::catalog::loader::parse_upload_date;

/// Formats a view count in compact form.
///
/// Buckets are checked once, top-down. Millions round the floating-point
/// quotient half-up to one decimal; thousands round half-up to an integer:
/// - 5 700 000 → "5.7M"
/// - 1 000 000 → "1.0M"
/// - 999 999 → "1000K" (not renormalized into millions)
/// - 1 000 → "1K"
/// - 999 → "999"
///
/// # Arguments
///
/// * `views` - The raw view count
///
/// # Returns
///
/// The compact string representation.
#[must_use]
pub fn format_view_count(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{}M", round_tenths_half_up(views as f64 / 1_000_000.0))
    } else if views >= 1_000 {
        format!("{}K", (views + 500) / 1_000)
    } else {
        views.to_string()
    }
}

/// Rounds to one decimal, half-up on the exact binary value.
///
/// `{:.1}` already rounds the exact value correctly except on exact ties,
/// which only occur at odd multiples of 0.25 and which it sends to even.
fn round_tenths_half_up(value: f64) -> String {
    let is_exact_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_exact_tie {
        format!("{:.1}", value + 0.05)
    } else {
        format!("{value:.1}")
    }
}

/// Formats the age of an upload relative to `now`.
///
/// The age is the ceiling of the absolute difference in days:
/// under a week "{d}d ago", under a month "{w}w ago", under a year "{m}mo ago",
/// otherwise "{y}y ago".
///
/// # Arguments
///
/// * `upload_date` - Zero-padded `YYYY-MM-DD` date
/// * `now` - Reference instant
///
/// # Returns
///
/// The relative age, or `None` if `upload_date` is not a valid date.
#[must_use]
pub fn format_relative_age(upload_date: &str, now: NaiveDateTime) -> Option<String> {
    let uploaded = parse_upload_date(upload_date)?.and_hms_opt(0, 0, 0)?;
    let seconds = (now - uploaded).num_seconds().unsigned_abs();
    let days = seconds.div_ceil(86_400);

    Some(match days {
        0..7 => format!("{days}d ago"),
        7..30 => format!("{}w ago", days / 7),
        30..365 => format!("{}mo ago", days / 30),
        _ => format!("{}y ago", days / 365),
    })
}

/// Formats the age of an upload relative to the local clock.
#[must_use]
pub fn format_relative_age_now(upload_date: &str) -> Option<String> {
    format_relative_age(upload_date, Local::now().naive_local())
}
