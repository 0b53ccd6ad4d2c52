//! Console rendering of matched stations.
//!
//! Codes are resolved to display names here, and absent data becomes the
//! `"N/A"` placeholder (`"None"` for remarks); the tables themselves only
//! ever answer found / not-found.

use crate::codes::{CodeBooks, CodeTable};
use crate::schedule::{StationRecord, TimeRange};

/// Placeholder for absent fields and unresolvable codes.
const PLACEHOLDER: &str = "N/A";

/// Render one station as its eight-line output block.
pub fn render_station(record: &StationRecord, codes: &CodeBooks) -> String {
    format!(
        "Frequency: {frequency} kHz\n\
         Time: {time}\n\
         Days: {days}\n\
         ITU: {country}\n\
         Station: {station}\n\
         Language: {language}\n\
         Target Area: {target_area}\n\
         Remarks: {remarks}\n",
        frequency = record.frequency.as_deref().unwrap_or(PLACEHOLDER),
        time = render_time(record.time.as_deref()),
        days = record.days.as_deref().unwrap_or(PLACEHOLDER),
        country = resolve(record.itu.as_deref(), &codes.countries),
        station = record.station.as_deref().unwrap_or(PLACEHOLDER),
        language = resolve(record.language.as_deref(), &codes.languages),
        target_area = resolve(record.target_area.as_deref(), &codes.target_areas),
        remarks = record.remarks.as_deref().unwrap_or("None"),
    )
}

/// Render the whole report: match count, then one block per station.
pub fn render_report(records: &[StationRecord], codes: &CodeBooks) -> String {
    let mut out = format!("Number of matches: {}\n\n", records.len());

    for record in records {
        out.push_str(&render_station(record, codes));
        out.push('\n');
    }

    out
}

/// Resolve a code through its table, with placeholders for the absent
/// field and for the unknown code.
fn resolve(code: Option<&str>, table: &CodeTable) -> String {
    match code {
        None => PLACEHOLDER.to_owned(),
        Some(code) => table.get(code).unwrap_or(PLACEHOLDER).to_owned(),
    }
}

/// Format the broadcast time, falling back to the raw field when it does
/// not parse as HHMM-HHMM.
fn render_time(time: Option<&str>) -> String {
    match time {
        None => PLACEHOLDER.to_owned(),
        Some(raw) => match TimeRange::parse(raw) {
            Ok(range) => range.to_string(),
            Err(_) => raw.to_owned(),
        },
    }
}
