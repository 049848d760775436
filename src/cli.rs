use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar date-range generator.
#[derive(Parser)]
#[command(
    name = "daterange",
    version,
    about = "Print day, week and month date ranges"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands, one per range kind.
#[derive(Subcommand)]
pub enum Command {
    /// A run of consecutive days starting at the reference date.
    Days(DaysArgs),
    /// Seven days starting on the reference weekday.
    Week(WeekArgs),
    /// Every day of the reference date's month.
    Month(CommonArgs),
    /// The reference date's month widened to whole weeks.
    MonthExtended(WeekArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Missing files are ignored.
    #[arg(short, long, default_value = "daterange.toml")]
    pub config: PathBuf,

    /// Reference date (YYYY-MM-DD or RFC 3339). Defaults to today.
    #[arg(short, long)]
    pub ref_date: Option<String>,

    /// Days to add before the range start (negative trims).
    #[arg(long, allow_hyphen_values = true)]
    pub start_offset: Option<i32>,

    /// Days to add after the range end (negative trims).
    #[arg(long, allow_hyphen_values = true)]
    pub end_offset: Option<i32>,

    /// Step to the next (positive) or previous (negative) range this many times.
    #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
    pub shift: i32,

    /// Print the range as JSON instead of one date per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `days` subcommand.
#[derive(clap::Args)]
pub struct DaysArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of days in the range.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}

/// Arguments for the `week` and `month-extended` subcommands.
#[derive(clap::Args)]
pub struct WeekArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Weekday the range is aligned to (1 = Monday .. 7 = Sunday).
    #[arg(short, long)]
    pub weekday: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_week_with_negative_offsets() {
        let cli = Cli::try_parse_from([
            "daterange",
            "week",
            "--ref-date",
            "2023-01-10",
            "--weekday",
            "7",
            "--start-offset",
            "-1",
            "--shift",
            "-2",
        ])
        .unwrap();
        let Command::Week(args) = cli.command else {
            panic!("expected week subcommand");
        };
        assert_eq!(args.weekday, Some(7));
        assert_eq!(args.common.ref_date.as_deref(), Some("2023-01-10"));
        assert_eq!(args.common.start_offset, Some(-1));
        assert_eq!(args.common.shift, -2);
        assert!(!args.common.json);
    }

    #[test]
    fn parses_days_count_and_verbosity() {
        let cli = Cli::try_parse_from(["daterange", "-vv", "days", "-n", "3", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Days(args) = cli.command else {
            panic!("expected days subcommand");
        };
        assert_eq!(args.count, Some(3));
        assert!(args.common.json);
        assert_eq!(args.common.config, PathBuf::from("daterange.toml"));
    }

    #[test]
    fn month_has_no_weekday_flag() {
        assert!(Cli::try_parse_from(["daterange", "month", "--weekday", "1"]).is_err());
        assert!(Cli::try_parse_from(["daterange", "month-extended", "--weekday", "1"]).is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
