//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Coarse age of `at` relative to `now`, as shown in the activity stream.
///
/// ```rust
/// use jiff::Timestamp;
/// use questforce_core::display::Ago;
///
/// let now = Timestamp::from_second(3_600).unwrap();
/// let at = Timestamp::from_second(3_588).unwrap();
/// assert_eq!(Ago { at: &at, now: &now }.to_string(), "12s ago");
/// assert_eq!(Ago { at: &now, now: &now }.to_string(), "just now");
/// ```
pub struct Ago<'a> {
    pub at: &'a Timestamp,
    pub now: &'a Timestamp,
}

impl fmt::Display for Ago<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.duration_since(*self.at).as_secs();
        match secs {
            i64::MIN..=0 => write!(f, "just now"),
            1..=59 => write!(f, "{secs}s ago"),
            60..=3599 => write!(f, "{}m ago", secs / 60),
            _ => write!(f, "{}h ago", secs / 3600),
        }
    }
}
