use serde::Serialize;

use super::{points_for, SeriesGroups};
use crate::catalog::{MetricCatalog, MetricGroup};
use crate::color::SeriesStyle;
use crate::data::model::{Company, CompanySelection};

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub year_label: String,
    pub value: Option<f64>,
    /// Bar label: two decimals, or the no-data marker.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub company: Company,
    pub metric: String,
    pub style: SeriesStyle,
    /// Ascending by year.
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    pub series: Vec<Series>,
}

impl ChartView {
    pub fn categories(&self) -> Vec<(i32, String)> {
        categories(&self.series)
    }
}

/// Distinct (year, label) pairs across all series, ascending by year.
pub fn categories(series: &[Series]) -> Vec<(i32, String)> {
    let mut cats: Vec<(i32, String)> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| (p.year, p.year_label.clone())))
        .collect();
    cats.sort();
    cats.dedup();
    cats
}

/// Metric-major series: with both companies every metric yields one series
/// per company, the second company hatched in the same metric colour.
pub fn project_chart(
    catalog: &MetricCatalog,
    group: &MetricGroup,
    company: CompanySelection,
    groups: &SeriesGroups<'_>,
) -> ChartView {
    let companies = company.companies();
    let mut series = Vec::with_capacity(group.metrics.len() * companies.len());

    for metric in &group.metrics {
        let color = catalog.color_for(metric);
        for (idx, &comp) in companies.iter().enumerate() {
            let (label, style) = if company.is_both() {
                let style = if idx == 0 {
                    SeriesStyle::solid(color)
                } else {
                    SeriesStyle::hatched(color)
                };
                (format!("{} — {}", comp.name(), metric), style)
            } else {
                (metric.clone(), SeriesStyle::solid(color))
            };

            series.push(Series {
                label,
                company: comp,
                metric: metric.clone(),
                style,
                points: points_for(groups.get(&(comp, metric.as_str()))),
            });
        }
    }

    let title = match company {
        CompanySelection::Both => "Comparison — grouped by metric & company".to_string(),
        CompanySelection::Single(c) => format!("{} — {}", c.name(), group.title()),
    };

    ChartView { title, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FillPattern;
    use crate::data::constants::builtin_dataset;
    use crate::data::filter::{filter_records, YearRange};
    use crate::projection::{group_by_series, NO_DATA};

    fn chart_for(group_key: &str, company: CompanySelection, from: i32, to: i32) -> ChartView {
        let ds = builtin_dataset().unwrap();
        let catalog = MetricCatalog::builtin().unwrap();
        let group = catalog.group(group_key).unwrap();
        let range = YearRange::clamped(from, to, ds.year_bounds());
        let filtered = filter_records(&ds, &group.metrics, range);
        let groups = group_by_series(&filtered);
        project_chart(&catalog, group, company, &groups)
    }

    #[test]
    fn both_companies_hatch_the_second() {
        let chart = chart_for("profitability", CompanySelection::Both, 2021, 2025);
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Ambuja Cements — Gross Profit Margin",
                "UltraTech Cement — Gross Profit Margin",
                "Ambuja Cements — Net Profit Margin",
                "UltraTech Cement — Net Profit Margin",
            ]
        );
        assert_eq!(chart.series[0].style.pattern, FillPattern::Solid);
        assert_eq!(chart.series[1].style.pattern, FillPattern::Hatched);
        assert_eq!(chart.series[0].style.color, chart.series[1].style.color);
    }

    #[test]
    fn single_company_uses_metric_labels() {
        let chart = chart_for(
            "turnover",
            CompanySelection::Single(Company::Ambuja),
            2021,
            2025,
        );
        assert_eq!(chart.title, "Ambuja Cements — Turnover");
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[2].label, "Trade Receivable Turnover");
        assert!(chart
            .series
            .iter()
            .all(|s| s.style.pattern == FillPattern::Solid));
    }

    #[test]
    fn absent_point_keeps_its_category() {
        let chart = chart_for(
            "turnover",
            CompanySelection::Single(Company::UltraTech),
            2021,
            2022,
        );
        let inventory = &chart.series[0];
        assert_eq!(inventory.points.len(), 2);
        assert_eq!(inventory.points[0].year_label, "Mar-21");
        assert_eq!(inventory.points[0].value, None);
        assert_eq!(inventory.points[0].text, NO_DATA);
        assert_eq!(inventory.points[1].text, "5.59");
        assert_eq!(
            chart.categories(),
            [(2021, "Mar-21".to_string()), (2022, "Mar-22".to_string())]
        );
    }
}
