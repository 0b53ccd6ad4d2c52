//! Schedule domain: station records, broadcast times, and filtering.

mod filter;
mod record;
mod time;

pub use filter::{HEADER_LINES, Query, filter_lines};
pub use record::StationRecord;
pub use time::{TimeError, TimeRange};
