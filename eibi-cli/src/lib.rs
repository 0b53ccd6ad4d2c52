//! EiBi shortwave schedule browser.
//!
//! A command-line tool that answers: "what shortwave broadcasts match
//! this frequency / time / language / target area right now?" It keeps a
//! local copy of the EiBi schedule, refreshes it when the published
//! validity period lapses, and resolves the schedule's language, country,
//! and target-area codes through lookup tables loaded from the EiBi code
//! files.

pub mod cli;
pub mod codes;
pub mod eibi;
pub mod report;
pub mod schedule;
