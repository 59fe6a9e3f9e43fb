//! Command-line arguments for the `anthro` binary.

use std::path::PathBuf;

use anthro_model::{Indicator, Sex};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anthro",
    version,
    about = "WHO child growth z-scores (0-5 years)",
    long_about = "Compute WHO Child Growth Standards z-scores and nutritional status.\n\n\
                  Indicators: weight-for-age, length/height-for-age, weight-for-length/height,\n\
                  BMI-for-age and head circumference-for-age, using the LMS method."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow measurement values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Engine options file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Interpolate at the exact fractional age instead of completed months.
    #[arg(long = "fractional-age", global = true)]
    pub fractional_age: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score and classify a single measurement.
    Evaluate(EvaluateArgs),

    /// Score every row of a CSV file.
    Batch(BatchArgs),

    /// List the embedded reference tables.
    Tables,

    /// Print reference curves (-3, -2, 0, +2, +3 SD) for one table.
    Curve(CurveArgs),
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// male/female (also m/f, boy/girl).
    #[arg(long, value_parser = parse_sex)]
    pub sex: Sex,

    #[command(flatten)]
    pub age: AgeArgs,

    /// Weight in kilograms.
    #[arg(long = "weight", value_name = "KG")]
    pub weight_kg: Option<f64>,

    /// Recumbent length or standing height in centimetres.
    #[arg(long = "height", value_name = "CM")]
    pub height_cm: Option<f64>,

    /// Head circumference in centimetres.
    #[arg(long = "head-circumference", value_name = "CM")]
    pub head_circumference_cm: Option<f64>,

    /// Print the assessment as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Age, either directly or from two dates.
#[derive(Args)]
#[group(required = true, multiple = true)]
pub struct AgeArgs {
    #[arg(long = "age-months", value_name = "MONTHS", conflicts_with_all = ["birth_date", "measured_on"])]
    pub age_months: Option<f64>,

    /// Date of birth (YYYY-MM-DD).
    #[arg(long = "birth-date", value_name = "DATE", requires = "measured_on")]
    pub birth_date: Option<NaiveDate>,

    /// Date of measurement (YYYY-MM-DD).
    #[arg(long = "measured-on", value_name = "DATE", requires = "birth_date")]
    pub measured_on: Option<NaiveDate>,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with one measurement per row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: BatchFormatArg,
}

#[derive(Args)]
pub struct CurveArgs {
    /// Indicator code: wfa, hfa, wfh, bfa, hcfa.
    #[arg(long, value_parser = parse_indicator)]
    pub indicator: Indicator,

    #[arg(long, value_parser = parse_sex)]
    pub sex: Sex,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BatchFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_sex(value: &str) -> Result<Sex, String> {
    value.parse()
}

fn parse_indicator(value: &str) -> Result<Indicator, String> {
    value.parse()
}
