//! EiBi schedule source: HTTP download and the on-disk copy.
//!
//! EiBi (<http://www.eibispace.de>) publishes the full shortwave broadcast
//! schedule as a fixed-width text file twice a year, stamped with the
//! validity period of the current season. The client downloads it; the
//! cache keeps it on disk and decides when it needs refreshing.

mod cache;
mod client;
mod error;

pub use cache::{ScheduleCache, is_current, validity_end};
pub use client::{EibiClient, EibiConfig};
pub use error::EibiError;
