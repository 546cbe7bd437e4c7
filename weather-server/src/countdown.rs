//! Target instant and remaining-time math for the countdown page.
//!
//! The page itself ticks in the browser; this module is the single place
//! where the target is defined, and it stamps that target into the served
//! HTML so the client and server can never disagree about it.

/// Midnight UTC, January 1st 2027, as Unix milliseconds.
pub const TARGET_EPOCH_MS: i64 = 1_798_761_600_000;

/// Human label for the target, shown on the page and in startup logs.
pub const TARGET_LABEL: &str = "New Year 2027";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until [`TARGET_EPOCH_MS`], broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Remaining time at `now_ms`, or `None` once the target has been reached.
///
/// All units floor: 25 hours left reads as 1 day, 1 hour, not 1.04 days.
pub fn remaining_at(now_ms: i64) -> Option<Remaining> {
    let diff = TARGET_EPOCH_MS - now_ms;
    if diff <= 0 {
        return None;
    }

    Some(Remaining {
        days: diff / MS_PER_DAY,
        hours: (diff / MS_PER_HOUR) % 24,
        minutes: (diff / MS_PER_MINUTE) % 60,
        seconds: (diff / MS_PER_SECOND) % 60,
    })
}

/// Render the countdown page with the target stamped in.
pub fn render_page() -> String {
    include_str!("../assets/countdown.html")
        .replace("{{target_ms}}", &TARGET_EPOCH_MS.to_string())
        .replace("{{target_label}}", TARGET_LABEL)
}
