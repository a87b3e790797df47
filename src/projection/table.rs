use std::collections::BTreeSet;

use serde::Serialize;

use super::{format_value, SeriesGroups};
use crate::data::model::{year_label, Company, Record};
use crate::error::ProjectionError;

// ---------------------------------------------------------------------------
// Pivot table: rows = years, columns = (company, metric)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub company: Company,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub year: i32,
    pub year_label: String,
    /// One cell per column, rounded to 3 decimals; `None` = no data.
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    /// CSV rendering of the grid.
    pub text: String,
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Pivot the filtered records.
///
/// Columns are every company present in `filtered` crossed with every metric
/// of the group, so a pair without records in range still gets an (empty)
/// column. Rows are the distinct years of `filtered`, ascending.
pub fn project_table(
    metrics: &[String],
    filtered: &[&Record],
    groups: &SeriesGroups<'_>,
) -> Result<TableView, ProjectionError> {
    let present: BTreeSet<Company> = filtered.iter().map(|r| r.company).collect();
    let years: BTreeSet<i32> = filtered.iter().map(|r| r.year).collect();

    let columns: Vec<TableColumn> = present
        .iter()
        .flat_map(|&company| {
            metrics.iter().map(move |metric| TableColumn {
                company,
                metric: metric.clone(),
            })
        })
        .collect();

    let rows: Vec<TableRow> = years
        .iter()
        .map(|&year| TableRow {
            year,
            year_label: year_label(year),
            cells: columns
                .iter()
                .map(|col| {
                    groups
                        .get(&(col.company, col.metric.as_str()))
                        .and_then(|recs| recs.iter().find(|r| r.year == year))
                        .and_then(|r| r.value)
                        .map(round3)
                })
                .collect(),
        })
        .collect();

    let text = render_csv(&columns, &rows)?;
    Ok(TableView {
        columns,
        rows,
        text,
    })
}

/// Two header lines (company, metric) followed by one line per year.
fn render_csv(columns: &[TableColumn], rows: &[TableRow]) -> Result<String, ProjectionError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let to_err = |e: csv::Error| ProjectionError::TableText(e.to_string());

    let company_header =
        std::iter::once("Company").chain(columns.iter().map(|c| c.company.name()));
    writer.write_record(company_header).map_err(to_err)?;

    let metric_header =
        std::iter::once("Metric").chain(columns.iter().map(|c| c.metric.as_str()));
    writer.write_record(metric_header).map_err(to_err)?;

    for row in rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.year_label.clone());
        record.extend(row.cells.iter().map(|&cell| format_value(cell, 3)));
        writer.write_record(&record).map_err(to_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ProjectionError::TableText(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ProjectionError::TableText(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dataset;
    use crate::projection::{group_by_series, NO_DATA};

    fn rec(company: Company, metric: &str, year: i32, value: Option<f64>) -> Record {
        Record {
            company,
            metric: metric.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn missing_pair_gets_empty_column() {
        let ds = Dataset::from_records(vec![
            rec(Company::Ambuja, "Current Ratio", 2021, Some(1.62)),
            rec(Company::Ambuja, "Quick Ratio", 2021, Some(1.41)),
            rec(Company::UltraTech, "Current Ratio", 2021, Some(0.37)),
            rec(Company::Ambuja, "Current Ratio", 2022, Some(1.42)),
        ])
        .unwrap();
        let metrics = vec!["Current Ratio".to_string(), "Quick Ratio".to_string()];
        let filtered: Vec<&Record> = ds.all_records().iter().collect();
        let groups = group_by_series(&filtered);

        let table = project_table(&metrics, &filtered, &groups).unwrap();
        assert_eq!(table.columns.len(), 4);
        assert_eq!(table.columns[3].company, Company::UltraTech);
        assert_eq!(table.columns[3].metric, "Quick Ratio");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, [Some(1.62), Some(1.41), Some(0.37), None]);
        assert_eq!(table.rows[1].cells, [Some(1.42), None, None, None]);
    }

    #[test]
    fn csv_text_layout() {
        let ds = Dataset::from_records(vec![
            rec(Company::UltraTech, "Asset Turnover", 2021, None),
            rec(Company::UltraTech, "Asset Turnover", 2022, Some(0.8649)),
        ])
        .unwrap();
        let metrics = vec!["Asset Turnover".to_string()];
        let filtered: Vec<&Record> = ds.all_records().iter().collect();
        let groups = group_by_series(&filtered);

        let table = project_table(&metrics, &filtered, &groups).unwrap();
        let expected = format!(
            "Company,UltraTech Cement\nMetric,Asset Turnover\nMar-21,{NO_DATA}\nMar-22,0.865\n"
        );
        assert_eq!(table.text, expected);
    }
}
