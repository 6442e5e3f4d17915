use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use panchangam_vedic_base::DisplayMode;

/// Telugu panchangam for any date, time and place.
#[derive(Parser)]
#[command(name = "panchangam", version, about = "Telugu panchangam calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML config file (default: $PANCHANGAM_CONFIG, else built-in defaults).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the panchangam for a local date and time.
    Show(ShowArgs),
    /// List the selectable locations.
    Zones(ZonesArgs),
    /// Find the new moon nearest a local date and time.
    NewMoon(NewMoonArgs),
}

/// Local wall-clock instant; missing parts default to now in the zone.
#[derive(clap::Args)]
pub struct InstantArgs {
    /// Local date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Local time (HH:MM or HH:MM:SS).
    #[arg(long, value_parser = crate::commands::parse_time)]
    pub time: Option<chrono::NaiveTime>,

    /// IANA zone id, country, city or catalog label, e.g. "Asia/Kolkata",
    /// "India" or "United States (New York)".
    #[arg(short, long)]
    pub zone: Option<String>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub instant: InstantArgs,

    /// Output language: telugu, english or bilingual.
    #[arg(short, long)]
    pub mode: Option<DisplayMode>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ZonesArgs {
    /// Only list locations whose label or zone id contains this text.
    pub filter: Option<String>,
}

#[derive(clap::Args)]
pub struct NewMoonArgs {
    #[command(flatten)]
    pub instant: InstantArgs,

    /// Search backward for the new moon on or before the instant.
    #[arg(long)]
    pub previous: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show() {
        let cli = Cli::try_parse_from([
            "panchangam", "-vv", "show", "--date", "2024-01-15", "--time", "10:00", "--zone",
            "Kolkata", "--mode", "english",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.instant.date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(args.instant.time, chrono::NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(args.mode, Some(DisplayMode::Romanized));
        assert!(!args.json);
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["panchangam", "show", "--date", "2024-13-01"]).is_err());
        assert!(Cli::try_parse_from(["panchangam", "show", "--time", "25:00"]).is_err());
        assert!(Cli::try_parse_from(["panchangam", "show", "--mode", "latin"]).is_err());
    }

    #[test]
    fn parses_new_moon_previous() {
        let cli = Cli::try_parse_from(["panchangam", "new-moon", "--previous", "--json"]).unwrap();
        let Command::NewMoon(args) = cli.command else {
            panic!("expected new-moon");
        };
        assert!(args.previous && args.json);
        assert!(args.instant.date.is_none());
    }
}
