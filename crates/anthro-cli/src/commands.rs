use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anthro_model::{EngineOptions, GrowthAssessment, MeasurementInput};
use anthro_standards::ReferenceStore;
use anthro_zscore::{GrowthEngine, age_in_months};
use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use anthro_cli::batch::{BatchReport, evaluate_csv, write_csv, write_json};
use anthro_cli::logging::redact_measurement;
use anthro_cli::summary::{assessment_table, curve_table, failures_table, tables_table};

use crate::cli::{BatchArgs, BatchFormatArg, CurveArgs, EvaluateArgs};

fn engine(options: EngineOptions) -> Result<GrowthEngine<'static>> {
    let engine = GrowthEngine::builtin().context("load reference tables")?;
    Ok(engine.with_options(options))
}

pub fn run_evaluate(args: &EvaluateArgs, options: EngineOptions) -> Result<GrowthAssessment> {
    let age_months = match (args.age.age_months, args.age.birth_date, args.age.measured_on) {
        (Some(age), _, _) => age,
        (None, Some(birth), Some(measured)) => {
            age_in_months(birth, measured).context("derive age from dates")?
        }
        _ => anyhow::bail!("either --age-months or --birth-date with --measured-on is required"),
    };
    let input = MeasurementInput {
        sex: args.sex,
        age_months,
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        head_circumference_cm: args.head_circumference_cm,
    };
    debug!(
        sex = %input.sex,
        age_months = %redact_measurement(Some(input.age_months)),
        weight_kg = %redact_measurement(input.weight_kg),
        height_cm = %redact_measurement(input.height_cm),
        head_circumference_cm = %redact_measurement(input.head_circumference_cm),
        "evaluating measurement"
    );

    let assessment = engine(options)?.evaluate(&input)?;
    if args.json {
        let json = serde_json::to_string_pretty(&assessment).context("serialize assessment")?;
        println!("{json}");
    } else {
        println!("{}", assessment_table(&input, &assessment));
        for rejection in &assessment.rejections {
            eprintln!("{}: {}", rejection.indicator.label(), rejection.message);
        }
    }
    Ok(assessment)
}

pub fn run_batch(args: &BatchArgs, options: EngineOptions) -> Result<BatchReport> {
    let span = info_span!("run_batch", input = %args.input.display());
    let _guard = span.enter();

    let engine = engine(options)?;
    let file = File::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let report = evaluate_csv(&engine, BufReader::new(file))?;

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_report(&report, args.format, BufWriter::new(file))?;
            info!(path = %path.display(), rows = report.outcomes.len(), "wrote batch results");
        }
        None => write_report(&report, args.format, io::stdout().lock())?,
    }

    if report.has_failures() {
        eprintln!("{} row(s) skipped:", report.failures.len());
        eprintln!("{}", failures_table(&report));
    }
    Ok(report)
}

fn write_report<W: Write>(report: &BatchReport, format: BatchFormatArg, writer: W) -> Result<()> {
    match format {
        BatchFormatArg::Csv => write_csv(report, writer),
        BatchFormatArg::Json => write_json(report, writer),
    }
}

pub fn run_tables() -> Result<()> {
    let store = ReferenceStore::builtin().context("load reference tables")?;
    println!("{}", tables_table(&store.summaries()));
    Ok(())
}

pub fn run_curve(args: &CurveArgs) -> Result<()> {
    let store = ReferenceStore::builtin().context("load reference tables")?;
    let table = store.lookup(args.indicator, args.sex)?;
    println!("{} ({})", args.indicator.label(), args.sex);
    println!("{}", curve_table(table));
    Ok(())
}
