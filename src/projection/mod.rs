//! Projection engine: pure functions from (dataset, catalogs, selection) to
//! display-ready views.
//!
//! ```text
//!   Selection ──┐
//!               ▼
//!   Dataset ──► filter ──► group by (company, metric), sort by year
//!               │              │
//!               ▼              ├──► chart      (bar series)
//!   Catalogs ──► kpi           ├──► sparkline  (primary metric)
//!               insights       └──► table      (pivot + CSV text)
//! ```
//!
//! Nothing here mutates its inputs; calling [`project`] twice with the same
//! selection yields equal views.

pub mod chart;
pub mod kpi;
pub mod sparkline;
pub mod table;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::data::filter::filter_records;
use crate::data::model::{year_label, Company, Dataset, Record};
use crate::error::ProjectionError;
use crate::state::Selection;

pub use chart::{categories, ChartView, Series, SeriesPoint};
pub use kpi::{Insight, Kpi, KpiValue};
pub use sparkline::SparklineView;
pub use table::{TableColumn, TableRow, TableView};

/// Marker shown wherever a value is absent.
pub const NO_DATA: &str = "—";

/// Format a value with `decimals` places, or the no-data marker.
pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => NO_DATA.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Grouping shared by chart, sparkline and table
// ---------------------------------------------------------------------------

/// Records grouped by (company, metric), each group sorted by year ascending.
pub(crate) type SeriesGroups<'a> = BTreeMap<(Company, &'a str), Vec<&'a Record>>;

pub(crate) fn group_by_series<'a>(records: &[&'a Record]) -> SeriesGroups<'a> {
    let mut groups: SeriesGroups<'a> = BTreeMap::new();
    for &rec in records {
        groups
            .entry((rec.company, rec.metric.as_str()))
            .or_default()
            .push(rec);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|r| r.year);
    }
    groups
}

/// One chart/sparkline point per record, absent values kept in place.
pub(crate) fn points_for(records: Option<&Vec<&Record>>) -> Vec<SeriesPoint> {
    records
        .map(|recs| {
            recs.iter()
                .map(|r| SeriesPoint {
                    year: r.year,
                    year_label: year_label(r.year),
                    value: r.value,
                    text: format_value(r.value, 2),
                })
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// All views for one selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub selection: Selection,
    pub kpis: Vec<Kpi>,
    pub insights: Vec<Insight>,
    pub chart: ChartView,
    pub sparkline: SparklineView,
    pub table: TableView,
}

/// Compute every view for `selection`.
pub fn project(
    dataset: &Dataset,
    catalogs: &Catalogs,
    selection: &Selection,
) -> Result<DashboardViews, ProjectionError> {
    let group = catalogs.metrics.group(&selection.group)?;
    let filtered = filter_records(dataset, &group.metrics, selection.year_range);
    let groups = group_by_series(&filtered);

    log::debug!(
        "Projecting {:?} / {} / {:?}: {} of {} records in range",
        selection.company,
        group.key,
        selection.year_range,
        filtered.len(),
        dataset.len()
    );

    Ok(DashboardViews {
        selection: selection.clone(),
        kpis: kpi::project_kpis(dataset, selection.company, &group.metrics),
        insights: kpi::project_insights(&catalogs.insights, &group.metrics),
        chart: chart::project_chart(&catalogs.metrics, group, selection.company, &groups),
        sparkline: sparkline::project_sparkline(catalogs, group, selection.company, &groups),
        table: table::project_table(&group.metrics, &filtered, &groups)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_uses_marker_for_absent() {
        assert_eq!(format_value(Some(1.5), 2), "1.50");
        assert_eq!(format_value(Some(37.14), 3), "37.140");
        assert_eq!(format_value(None, 2), NO_DATA);
    }

    #[test]
    fn groups_are_sorted_by_year() {
        let recs = [
            Record {
                company: Company::Ambuja,
                metric: "Quick Ratio".to_string(),
                year: 2023,
                value: Some(1.72),
            },
            Record {
                company: Company::Ambuja,
                metric: "Quick Ratio".to_string(),
                year: 2021,
                value: Some(1.41),
            },
        ];
        let refs: Vec<&Record> = recs.iter().collect();
        let groups = group_by_series(&refs);
        let years: Vec<i32> = groups[&(Company::Ambuja, "Quick Ratio")]
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, [2021, 2023]);
    }
}
