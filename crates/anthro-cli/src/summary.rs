//! Terminal tables.

use anthro_model::{GrowthAssessment, Indicator, MeasurementInput};
use anthro_standards::{ReferenceTable, TableSummary};
use anthro_zscore::value_at_z;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::batch::BatchReport;

/// SD lines drawn by the `curve` command.
pub const CURVE_LINES: [f64; 5] = [-3.0, -2.0, 0.0, 2.0, 3.0];

pub fn assessment_table(input: &MeasurementInput, assessment: &GrowthAssessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Measured"),
        header_cell("Z-score"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for indicator in Indicator::ALL {
        let rejected = assessment
            .rejections
            .iter()
            .any(|rejection| rejection.indicator == indicator);
        let z = assessment.z_scores.get(indicator);
        table.add_row(vec![
            Cell::new(indicator.label()),
            measured_cell(indicator, input),
            z_cell(z, rejected),
            status_cell(indicator, assessment),
        ]);
    }
    table
}

pub fn tables_table(summaries: &[TableSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Indicator"),
        header_cell("Sex"),
        header_cell("Key"),
        header_cell("Rows"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.indicator.code())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.indicator.label()),
            Cell::new(summary.sex),
            Cell::new(summary.kind.unit()),
            Cell::new(summary.breakpoint_count),
            Cell::new(format!("{}-{}", summary.first_key, summary.last_key)),
        ]);
    }
    table
}

/// Values at each SD line for every breakpoint of `reference`.
pub fn curve_table(reference: &ReferenceTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell(reference.kind().unit())];
    header.extend(CURVE_LINES.iter().map(|z| header_cell(&sd_label(*z))));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for row in reference.breakpoints() {
        let mut cells = vec![Cell::new(row.key)];
        cells.extend(CURVE_LINES.iter().map(|z| match value_at_z(row.lms, *z) {
            Some(value) => {
                let cell = Cell::new(format!("{value:.2}"));
                if *z == 0.0 {
                    cell.add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            }
            None => dim_cell("-"),
        }));
        table.add_row(cells);
    }
    table
}

/// Per-row failures of a batch run.
pub fn failures_table(report: &BatchReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Id"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &report.failures {
        table.add_row(vec![
            Cell::new(failure.line),
            Cell::new(failure.id.as_deref().unwrap_or("-")),
            Cell::new(&failure.message).fg(Color::Red),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn sd_label(z: f64) -> String {
    if z == 0.0 {
        "median".to_string()
    } else {
        format!("{z:+} SD")
    }
}

fn measured_cell(indicator: Indicator, input: &MeasurementInput) -> Cell {
    let value = match indicator {
        Indicator::WeightForAge | Indicator::WeightForHeight => input.weight_kg,
        Indicator::HeightForAge => input.height_cm,
        Indicator::BmiForAge => input.bmi(),
        Indicator::HeadCircumferenceForAge => input.head_circumference_cm,
    };
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn z_cell(z: Option<f64>, rejected: bool) -> Cell {
    match z {
        Some(z) => {
            let cell = Cell::new(format!("{z:.2}"));
            if z.abs() > 3.0 {
                cell.fg(Color::Red).add_attribute(Attribute::Bold)
            } else if z.abs() > 2.0 {
                cell.fg(Color::Yellow)
            } else {
                cell
            }
        }
        None if rejected => Cell::new("invalid").fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn status_cell(indicator: Indicator, assessment: &GrowthAssessment) -> Cell {
    let status = &assessment.classification;
    let label = match indicator {
        Indicator::WeightForAge => status.nutritional_status.map(|s| s.as_str()),
        Indicator::HeightForAge => status.stunting_status.map(|s| s.as_str()),
        Indicator::WeightForHeight => status.wasting_status.map(|s| s.as_str()),
        Indicator::BmiForAge | Indicator::HeadCircumferenceForAge => None,
    };
    match label {
        Some("normal") => Cell::new("normal").fg(Color::Green),
        Some(label) => Cell::new(label).fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sd_labels() {
        assert_eq!(sd_label(0.0), "median");
        assert_eq!(sd_label(-3.0), "-3 SD");
        assert_eq!(sd_label(2.0), "+2 SD");
    }
}
