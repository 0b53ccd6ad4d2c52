//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::schedule::Query;

#[derive(Parser, Debug)]
#[command(name = "eibi-cli")]
#[command(about = "Browse and filter the EiBi shortwave broadcast schedule")]
#[command(version)]
pub struct Cli {
    /// Station name to match
    #[arg(long)]
    pub name: Option<String>,

    /// Frequency in kHz
    #[arg(short = 'f', long = "freq")]
    pub frequency: Option<String>,

    /// Broadcast time in HHMM-HHMM UTC form
    #[arg(short = 't', long)]
    pub time: Option<String>,

    /// ITU code of the transmitter country
    #[arg(long)]
    pub country: Option<String>,

    /// Language name (e.g. "English")
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Target area name (e.g. "Europe")
    #[arg(long)]
    pub target: Option<String>,

    /// Path of the local schedule copy
    #[arg(long, default_value = "eibi_schedule.txt")]
    pub schedule_file: PathBuf,

    /// Directory holding the three code files
    #[arg(long, default_value = ".")]
    pub codes_dir: PathBuf,
}

impl Cli {
    /// The filter criteria carried by this invocation.
    pub fn query(&self) -> Query {
        Query {
            name: self.name.clone(),
            frequency: self.frequency.clone(),
            time: self.time.clone(),
            country: self.country.clone(),
            language: self.language.clone(),
            target_area: self.target.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_criteria() {
        let cli = Cli::parse_from([
            "eibi-cli",
            "--name",
            "BBC",
            "-f",
            "9400",
            "-t",
            "0700-0800",
            "--country",
            "G",
            "-l",
            "English",
            "--target",
            "Europe",
        ]);

        let query = cli.query();
        assert_eq!(query.name.as_deref(), Some("BBC"));
        assert_eq!(query.frequency.as_deref(), Some("9400"));
        assert_eq!(query.time.as_deref(), Some("0700-0800"));
        assert_eq!(query.country.as_deref(), Some("G"));
        assert_eq!(query.language.as_deref(), Some("English"));
        assert_eq!(query.target_area.as_deref(), Some("Europe"));
    }

    #[test]
    fn defaults_to_no_criteria() {
        let cli = Cli::parse_from(["eibi-cli"]);
        let query = cli.query();

        assert!(query.name.is_none());
        assert!(query.frequency.is_none());
        assert!(query.time.is_none());
        assert!(query.country.is_none());
        assert!(query.language.is_none());
        assert!(query.target_area.is_none());
        assert_eq!(cli.schedule_file, PathBuf::from("eibi_schedule.txt"));
        assert_eq!(cli.codes_dir, PathBuf::from("."));
    }
}
