//! Pure conversion functions: TOML config + CLI arguments -> library option types.

use anyhow::{Context, Result};

use daterange_range::{
    CalendarDay, Clock, FixedClock, RangeKind, RangeOptions, SystemClock, validate_ref_date,
};

use crate::cli::{CommonArgs, DaysArgs, WeekArgs};
use crate::config::DateRangeConfig;

/// Either clock the CLI can run with.
#[derive(Debug, Clone, Copy)]
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn today(&self) -> CalendarDay {
        match self {
            Self::System(c) => c.today(),
            Self::Fixed(c) => c.today(),
        }
    }
}

/// Builds the clock from the optional `today` pin in the config.
pub fn build_clock(config: &DateRangeConfig) -> Result<CliClock> {
    match config.today.as_deref() {
        Some(s) => {
            let today = validate_ref_date(s).context("invalid `today` in config")?;
            Ok(CliClock::Fixed(FixedClock(today)))
        }
        None => Ok(CliClock::System(SystemClock)),
    }
}

/// Builds options for the `days` subcommand.
pub fn days_options(args: &DaysArgs, config: &DateRangeConfig) -> Result<RangeOptions> {
    let options = common_options(&args.common, config)?
        .with_day_count(args.count.unwrap_or(config.defaults.day_count));
    checked(options, RangeKind::Days)
}

/// Builds options for the `week` and `month-extended` subcommands.
pub fn week_options(
    args: &WeekArgs,
    config: &DateRangeConfig,
    kind: RangeKind,
) -> Result<RangeOptions> {
    let options = common_options(&args.common, config)?
        .with_ref_weekday(args.weekday.unwrap_or(config.defaults.weekday));
    checked(options, kind)
}

/// Builds options for the `month` subcommand.
pub fn month_options(args: &CommonArgs, config: &DateRangeConfig) -> Result<RangeOptions> {
    checked(common_options(args, config)?, RangeKind::MonthExact)
}

/// Whether output should be JSON: the flag, or the config default.
pub fn wants_json(args: &CommonArgs, config: &DateRangeConfig) -> bool {
    args.json || config.defaults.json
}

fn common_options(args: &CommonArgs, config: &DateRangeConfig) -> Result<RangeOptions> {
    let mut options = RangeOptions::new()
        .with_start_offset(args.start_offset.unwrap_or(config.defaults.start_offset))
        .with_end_offset(args.end_offset.unwrap_or(config.defaults.end_offset));
    if let Some(ref s) = args.ref_date {
        options = options.with_ref_date(validate_ref_date(s)?);
    }
    Ok(options)
}

fn checked(options: RangeOptions, kind: RangeKind) -> Result<RangeOptions> {
    options
        .validate(kind)
        .with_context(|| format!("invalid options for {kind} range"))?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn common() -> CommonArgs {
        CommonArgs {
            config: PathBuf::from("daterange.toml"),
            ref_date: None,
            start_offset: None,
            end_offset: None,
            shift: 0,
            json: false,
        }
    }

    fn config(toml_str: &str) -> DateRangeConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn clock_from_config() {
        let clock = build_clock(&config("today = \"2020-01-17\"")).unwrap();
        assert_eq!(clock.today(), CalendarDay::new(2020, 1, 17).unwrap());
        assert!(matches!(
            build_clock(&DateRangeConfig::default()).unwrap(),
            CliClock::System(_)
        ));
        assert!(build_clock(&config("today = \"soon\"")).is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let cfg = config("[defaults]\nweekday = 3\nstart_offset = 2\n");
        let args = WeekArgs {
            common: CommonArgs {
                start_offset: Some(-1),
                ..common()
            },
            weekday: None,
        };
        let options = week_options(&args, &cfg, RangeKind::Week).unwrap();
        assert_eq!(options.ref_weekday(), Some(3));
        assert_eq!(options.start_offset(), Some(-1));
        assert_eq!(options.end_offset(), Some(0));
    }

    #[test]
    fn days_count_default_from_config() {
        let cfg = config("[defaults]\nday_count = 14\n");
        let args = DaysArgs {
            common: common(),
            count: None,
        };
        let options = days_options(&args, &cfg).unwrap();
        assert_eq!(options.day_count(), Some(14));
        assert_eq!(options.ref_weekday(), None);
    }

    #[test]
    fn month_ignores_weekday_and_count_defaults() {
        let cfg = config("[defaults]\nweekday = 7\nday_count = 3\n");
        let options = month_options(&common(), &cfg).unwrap();
        assert_eq!(options.ref_weekday(), None);
        assert_eq!(options.day_count(), None);
    }

    #[test]
    fn invalid_values_rejected() {
        let args = WeekArgs {
            common: common(),
            weekday: Some(9),
        };
        let err = week_options(&args, &DateRangeConfig::default(), RangeKind::Week).unwrap_err();
        assert!(format!("{err:#}").contains("ref_weekday"));

        let args = CommonArgs {
            ref_date: Some("2021-02-30".to_string()),
            ..common()
        };
        assert!(month_options(&args, &DateRangeConfig::default()).is_err());
    }

    #[test]
    fn json_flag_or_config() {
        assert!(!wants_json(&common(), &DateRangeConfig::default()));
        assert!(wants_json(&common(), &config("[defaults]\njson = true\n")));
        let args = CommonArgs {
            json: true,
            ..common()
        };
        assert!(wants_json(&args, &DateRangeConfig::default()));
    }
}
