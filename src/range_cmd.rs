//! Range commands: build options, generate, navigate, print.

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use daterange_range::{DateRange, GeneratedRange, RangeGenerator, RangeKind};

use crate::cli::{CommonArgs, Command};
use crate::config::{self, DateRangeConfig};
use crate::convert::{self, CliClock};

/// Run a range subcommand and print the result to stdout.
pub fn run(command: Command) -> Result<()> {
    let (range, json) = execute(&command)?;
    let rendered = render(&range, json)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write range to stdout")?;
    Ok(())
}

/// Generates the range a subcommand asks for. Returns the range and whether
/// it should be printed as JSON.
pub fn execute(command: &Command) -> Result<(GeneratedRange, bool)> {
    let common = common_args(command);
    let _cmd = info_span!("range", kind = %kind_of(command)).entered();

    let config = config::load(&common.config)?;
    let clock = convert::build_clock(&config)?;
    let generator = RangeGenerator::with_clock(clock);

    let range = generate(&generator, command, &config)?;
    info!(
        ref_date = %range.ref_date().context("generator returned no range")?,
        "range generated"
    );
    let range = shift(&generator, range, common.shift)?;

    let generated = range
        .into_generated()
        .ok_or_else(|| anyhow!("generator returned no range"))?;
    Ok((generated, convert::wants_json(common, &config)))
}

/// Formats a range as one ISO date per line, or as pretty JSON.
pub fn render(range: &GeneratedRange, json: bool) -> Result<String> {
    if json {
        let mut out =
            serde_json::to_string_pretty(range).context("failed to serialize range")?;
        out.push('\n');
        return Ok(out);
    }
    Ok(range.iter().map(|d| format!("{d}\n")).collect())
}

fn generate(
    generator: &RangeGenerator<CliClock>,
    command: &Command,
    config: &DateRangeConfig,
) -> Result<DateRange> {
    let range = match command {
        Command::Days(args) => generator.days(Some(&convert::days_options(args, config)?)),
        Command::Week(args) => {
            generator.week(Some(&convert::week_options(args, config, RangeKind::Week)?))
        }
        Command::Month(args) => {
            generator.month_exact(Some(&convert::month_options(args, config)?))
        }
        Command::MonthExtended(args) => generator.month_extended(Some(&convert::week_options(
            args,
            config,
            RangeKind::MonthExtended,
        )?)),
    };
    range.with_context(|| format!("failed to generate {} range", kind_of(command)))
}

fn shift(generator: &RangeGenerator<CliClock>, mut range: DateRange, steps: i32) -> Result<DateRange> {
    for step in 0..steps.unsigned_abs() {
        let shifted = if steps > 0 {
            generator.next(Some(&range))
        } else {
            generator.previous(Some(&range))
        };
        range = shifted.with_context(|| format!("failed to shift range (step {})", step + 1))?;
        debug!(step = step + 1, first = %range.days()?[0], "range shifted");
    }
    Ok(range)
}

fn common_args(command: &Command) -> &CommonArgs {
    match command {
        Command::Days(args) => &args.common,
        Command::Week(args) | Command::MonthExtended(args) => &args.common,
        Command::Month(args) => args,
    }
}

fn kind_of(command: &Command) -> RangeKind {
    match command {
        Command::Days(_) => RangeKind::Days,
        Command::Week(_) => RangeKind::Week,
        Command::Month(_) => RangeKind::MonthExact,
        Command::MonthExtended(_) => RangeKind::MonthExtended,
    }
}
