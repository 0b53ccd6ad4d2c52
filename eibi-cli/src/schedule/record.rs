//! Fixed-width station record parsing.
//!
//! Each body line of eibi.txt is one broadcast, laid out in fixed columns:
//!
//! ```text
//! kHz:75        Time(UTC) Days  ITU Station                  Lng Target      Remarks
//! ```
//!
//! Columns are space-padded; an all-space column means the datum is absent.

/// Byte ranges of the fixed columns, `(start, width)`.
const FREQUENCY: (usize, usize) = (0, 13);
const TIME: (usize, usize) = (14, 9);
const DAYS: (usize, usize) = (24, 5);
const ITU: (usize, usize) = (30, 3);
const STATION: (usize, usize) = (34, 24);
const LANGUAGE: (usize, usize) = (59, 3);
const TARGET_AREA: (usize, usize) = (63, 11);
/// Remarks run from this offset to the end of the line.
const REMARKS_START: usize = 75;

/// One broadcast entry from the schedule.
///
/// Every field is optional: short lines and all-space columns parse to
/// `None` rather than failing, matching how sparsely the schedule is
/// actually populated (days, language, and remarks are often blank).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    /// Transmit frequency in kHz.
    pub frequency: Option<String>,
    /// Broadcast time range, `"HHMM-HHMM"` UTC.
    pub time: Option<String>,
    /// Days of operation (e.g. `"Mo-Fr"`, `"Sa"`).
    pub days: Option<String>,
    /// ITU code of the transmitter country.
    pub itu: Option<String>,
    /// Station name.
    pub station: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Target-area code.
    pub target_area: Option<String>,
    /// Free-text remarks (transmitter site, multiples of exotic info).
    pub remarks: Option<String>,
}

impl StationRecord {
    /// Parse one schedule body line.
    ///
    /// Never fails: columns that are missing (short line), blank, or not
    /// sliceable on a character boundary come back as `None`.
    pub fn parse(line: &str) -> Self {
        Self {
            frequency: column(line, FREQUENCY),
            time: column(line, TIME),
            days: column(line, DAYS),
            itu: column(line, ITU),
            station: column(line, STATION),
            language: column(line, LANGUAGE),
            target_area: column(line, TARGET_AREA),
            remarks: tail(line, REMARKS_START),
        }
    }
}

/// Slice a fixed column, trim its padding, `None` if empty or absent.
fn column(line: &str, (start, width): (usize, usize)) -> Option<String> {
    let end = (start + width).min(line.len());
    if start >= end {
        return None;
    }
    trimmed(line.get(start..end)?)
}

/// Slice from `start` to the end of the line.
fn tail(line: &str, start: usize) -> Option<String> {
    if start >= line.len() {
        return None;
    }
    trimmed(line.get(start..)?)
}

fn trimmed(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a schedule line with the real column widths.
    fn line(
        freq: &str,
        time: &str,
        days: &str,
        itu: &str,
        station: &str,
        lang: &str,
        target: &str,
        remarks: &str,
    ) -> String {
        format!(
            "{freq:<13} {time:<9} {days:<5} {itu:<3} {station:<24} {lang:<3} {target:<11} {remarks}"
        )
    }

    #[test]
    fn parses_full_record() {
        let input = line(
            "6070",
            "0700-0800",
            "Mo-Fr",
            "AUT",
            "Radio DARC",
            "D",
            "Eu",
            "via Moosbrunn",
        );
        let record = StationRecord::parse(&input);

        assert_eq!(record.frequency.as_deref(), Some("6070"));
        assert_eq!(record.time.as_deref(), Some("0700-0800"));
        assert_eq!(record.days.as_deref(), Some("Mo-Fr"));
        assert_eq!(record.itu.as_deref(), Some("AUT"));
        assert_eq!(record.station.as_deref(), Some("Radio DARC"));
        assert_eq!(record.language.as_deref(), Some("D"));
        assert_eq!(record.target_area.as_deref(), Some("Eu"));
        assert_eq!(record.remarks.as_deref(), Some("via Moosbrunn"));
    }

    #[test]
    fn blank_columns_are_none() {
        let input = line("4930", "0300-0600", "", "BOT", "VOA", "E", "EAf", "");
        let record = StationRecord::parse(&input);

        assert_eq!(record.days, None);
        assert_eq!(record.remarks, None);
        assert_eq!(record.itu.as_deref(), Some("BOT"));
    }

    #[test]
    fn right_aligned_frequency_is_trimmed() {
        let input = line("       17830", "1800-1900", "", "ASC", "BBC", "E", "WAf", "");
        let record = StationRecord::parse(&input);

        assert_eq!(record.frequency.as_deref(), Some("17830"));
    }

    #[test]
    fn short_line_yields_trailing_none() {
        let record = StationRecord::parse("6070          0700-0800");

        assert_eq!(record.frequency.as_deref(), Some("6070"));
        assert_eq!(record.time.as_deref(), Some("0700-0800"));
        assert_eq!(record.days, None);
        assert_eq!(record.station, None);
        assert_eq!(record.remarks, None);
    }

    #[test]
    fn empty_line_is_all_none() {
        assert_eq!(StationRecord::parse(""), StationRecord::default());
    }

    #[test]
    fn station_column_is_width_limited() {
        // A 30-char station name is cut at the 24-char column edge.
        let input = line(
            "9400",
            "0000-2400",
            "",
            "BUL",
            "abcdefghijklmnopqrstuvwxyz1234",
            "",
            "",
            "",
        );
        let record = StationRecord::parse(&input);

        assert_eq!(record.station.as_deref(), Some("abcdefghijklmnopqrstuvwx"));
    }
}
