//! CSV batch evaluation.
//!
//! Input columns: `id`, `sex`, then either `age_months` or both
//! `birth_date` and `measured_on` (YYYY-MM-DD), then any of `weight_kg`,
//! `height_cm`, `head_circumference_cm`. Empty cells are absent values.
//! Column order does not matter; unknown columns are ignored.
//!
//! A row that cannot be turned into a measurement is recorded as a
//! [`RowFailure`] and skipped. Only a fatal engine error stops the batch.

use std::io::{Read, Write};

use anthro_model::{
    GrowthAssessment, MeasurementInput, NutritionalStatus, Sex, StuntingStatus, WastingStatus,
};
use anthro_zscore::{GrowthEngine, age_in_months};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::logging::redact_value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw CSV row before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputRow {
    id: Option<String>,
    sex: Option<String>,
    age_months: Option<f64>,
    birth_date: Option<String>,
    measured_on: Option<String>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    head_circumference_cm: Option<f64>,
}

/// A row that was evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub id: String,
    pub input: MeasurementInput,
    pub assessment: GrowthAssessment,
}

/// A row that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// 1-based line number in the input file.
    pub line: u64,
    pub id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Outcomes where at least one indicator was rejected.
    pub fn rejected_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.assessment.has_rejections())
            .count()
    }
}

/// Read and evaluate every row of a CSV document.
///
/// # Errors
///
/// Fails on unreadable input or a fatal engine error. Row-level problems
/// are collected in [`BatchReport::failures`].
pub fn evaluate_csv<R: Read>(engine: &GrowthEngine<'_>, reader: R) -> Result<BatchReport> {
    let span = info_span!("batch");
    let _guard = span.enter();

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers().context("read CSV header")?.clone();

    let mut report = BatchReport::default();
    for record in csv_reader.records() {
        let record = record.context("read CSV record")?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: InputRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(error) => {
                report.failures.push(failure(line, None, error.to_string()));
                continue;
            }
        };
        let id = row.id.clone().unwrap_or_else(|| format!("line {line}"));
        let input = match measurement_from_row(&row) {
            Ok(input) => input,
            Err(error) => {
                report
                    .failures
                    .push(failure(line, row.id.clone(), format!("{error:#}")));
                continue;
            }
        };
        debug!(id = redact_value(&id), line, "evaluating row");
        let assessment = engine
            .evaluate(&input)
            .with_context(|| format!("evaluate row at line {line}"))?;
        report.outcomes.push(BatchOutcome {
            id,
            input,
            assessment,
        });
    }

    info!(
        evaluated = report.outcomes.len(),
        skipped = report.failures.len(),
        with_rejections = report.rejected_count(),
        "batch complete"
    );
    Ok(report)
}

fn failure(line: u64, id: Option<String>, message: String) -> RowFailure {
    warn!(line, "skipping row: {message}");
    RowFailure { line, id, message }
}

fn measurement_from_row(row: &InputRow) -> Result<MeasurementInput> {
    let sex: Sex = row
        .sex
        .as_deref()
        .ok_or_else(|| anyhow!("missing sex"))?
        .parse()
        .map_err(|error: String| anyhow!(error))?;
    let age_months = match (row.age_months, &row.birth_date, &row.measured_on) {
        (Some(age), _, _) => age,
        (None, Some(birth), Some(measured)) => {
            let birth = parse_date(birth).context("birth_date")?;
            let measured = parse_date(measured).context("measured_on")?;
            age_in_months(birth, measured)?
        }
        _ => return Err(anyhow!("missing age_months or birth_date/measured_on")),
    };
    Ok(MeasurementInput {
        sex,
        age_months,
        weight_kg: row.weight_kg,
        height_cm: row.height_cm,
        head_circumference_cm: row.head_circumference_cm,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

/// Flat output row. CSV cannot express nested or flattened structs.
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    id: &'a str,
    sex: Sex,
    age_months: f64,
    weight_for_age_zscore: Option<f64>,
    height_for_age_zscore: Option<f64>,
    weight_for_height_zscore: Option<f64>,
    bmi_for_age_zscore: Option<f64>,
    head_circumference_zscore: Option<f64>,
    nutritional_status: Option<NutritionalStatus>,
    stunting_status: Option<StuntingStatus>,
    wasting_status: Option<WastingStatus>,
    /// Codes of rejected indicators, `;`-separated.
    rejected: String,
}

impl<'a> From<&'a BatchOutcome> for OutputRow<'a> {
    fn from(outcome: &'a BatchOutcome) -> Self {
        let z = &outcome.assessment.z_scores;
        let status = &outcome.assessment.classification;
        let rejected = outcome
            .assessment
            .rejections
            .iter()
            .map(|rejection| rejection.indicator.code())
            .collect::<Vec<_>>()
            .join(";");
        Self {
            id: &outcome.id,
            sex: outcome.input.sex,
            age_months: outcome.input.age_months,
            weight_for_age_zscore: z.weight_for_age_zscore,
            height_for_age_zscore: z.height_for_age_zscore,
            weight_for_height_zscore: z.weight_for_height_zscore,
            bmi_for_age_zscore: z.bmi_for_age_zscore,
            head_circumference_zscore: z.head_circumference_zscore,
            nutritional_status: status.nutritional_status,
            stunting_status: status.stunting_status,
            wasting_status: status.wasting_status,
            rejected,
        }
    }
}

/// One JSON record: the id, the input echo and the flat assessment.
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    id: &'a str,
    #[serde(flatten)]
    input: &'a MeasurementInput,
    #[serde(flatten)]
    assessment: &'a GrowthAssessment,
}

pub fn write_csv<W: Write>(report: &BatchReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in &report.outcomes {
        csv_writer
            .serialize(OutputRow::from(outcome))
            .context("write CSV row")?;
    }
    csv_writer.flush().context("flush CSV output")?;
    Ok(())
}

pub fn write_json<W: Write>(report: &BatchReport, mut writer: W) -> Result<()> {
    let rows: Vec<JsonRow<'_>> = report
        .outcomes
        .iter()
        .map(|outcome| JsonRow {
            id: &outcome.id,
            input: &outcome.input,
            assessment: &outcome.assessment,
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rows).context("write JSON output")?;
    writeln!(writer).context("write JSON output")?;
    Ok(())
}
