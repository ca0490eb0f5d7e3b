use chrono::{Local, NaiveDateTime};

/// Layout of the timestamp embedded in every prompt.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the host's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse an instant written as `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_round_trips_through_format() {
        let clock = FixedClock::parse("2024-03-09 07:05:01").unwrap();
        assert_eq!(format_timestamp(&clock.now()), "2024-03-09 07:05:01");
    }

    #[test]
    fn fixed_clock_rejects_other_layouts() {
        assert!(FixedClock::parse("2024-03-09T07:05:01").is_err());
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn system_clock_formats_to_nineteen_chars() {
        let stamp = format_timestamp(&SystemClock.now());
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
