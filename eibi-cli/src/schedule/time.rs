//! Broadcast time handling.
//!
//! EiBi gives broadcast times as a `"HHMM-HHMM"` UTC range. This module
//! parses that form and renders it in the tool's output format.

use std::fmt;

/// Error returned when parsing an invalid broadcast time range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time range: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A UTC broadcast time range in `"HHMM-HHMM"` form.
///
/// EiBi uses `2400` as an end-of-day sentinel, so hours run 0–24; minutes
/// run 0–59.
///
/// # Examples
///
/// ```
/// use eibi_cli::schedule::TimeRange;
///
/// let range = TimeRange::parse("0700-0800").unwrap();
/// assert_eq!(range.to_string(), "07:00 UTC to 08:00 UTC");
///
/// assert!(TimeRange::parse("0700").is_err());
/// assert!(TimeRange::parse("2500-0100").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: HourMinute,
    end: HourMinute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HourMinute {
    hour: u32,
    minute: u32,
}

impl TimeRange {
    /// Parse a `"HHMM-HHMM"` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 9 characters: HHMM-HHMM
        if s.len() != 9 {
            return Err(TimeError::new("expected HHMM-HHMM format"));
        }

        let bytes = s.as_bytes();
        if bytes[4] != b'-' {
            return Err(TimeError::new("expected dash at position 4"));
        }

        Ok(Self {
            start: parse_hhmm(&bytes[0..4])?,
            end: parse_hhmm(&bytes[5..9])?,
        })
    }

    /// Start hour (0-24).
    pub fn start_hour(&self) -> u32 {
        self.start.hour
    }

    /// End hour (0-24).
    pub fn end_hour(&self) -> u32 {
        self.end.hour
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} UTC to {:02}:{:02} UTC",
            self.start.hour, self.start.minute, self.end.hour, self.end.minute
        )
    }
}

/// Parse four ASCII digit bytes as HHMM.
fn parse_hhmm(bytes: &[u8]) -> Result<HourMinute, TimeError> {
    let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 24 {
        return Err(TimeError::new("hour must be 0-24"));
    }

    let minute =
        parse_two_digits(&bytes[2..4]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    Ok(HourMinute { hour, minute })
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_range()(
            h1 in 0u32..24, m1 in 0u32..60,
            h2 in 0u32..24, m2 in 0u32..60,
        ) -> String {
            format!("{h1:02}{m1:02}-{h2:02}{m2:02}")
        }
    }

    proptest! {
        /// Any valid HHMM-HHMM string parses.
        #[test]
        fn valid_always_parses(s in valid_range()) {
            prop_assert!(TimeRange::parse(&s).is_ok());
        }

        /// Display carries the parsed digits through unchanged.
        #[test]
        fn display_reflects_input(h1 in 0u32..24, m1 in 0u32..60, h2 in 0u32..24, m2 in 0u32..60) {
            let range = TimeRange::parse(&format!("{h1:02}{m1:02}-{h2:02}{m2:02}")).unwrap();
            prop_assert_eq!(
                range.to_string(),
                format!("{h1:02}:{m1:02} UTC to {h2:02}:{m2:02} UTC")
            );
        }

        /// Wrong-length strings never parse.
        #[test]
        fn wrong_length_rejected(s in "[0-9-]{0,8}|[0-9-]{10,14}") {
            prop_assert!(TimeRange::parse(&s).is_err());
        }

        /// Out-of-range hours are rejected.
        #[test]
        fn invalid_hour_rejected(h in 25u32..100, m in 0u32..60) {
            let s = format!("{h:02}{m:02}-0100");
            prop_assert!(TimeRange::parse(&s).is_err());
        }
    }
}
