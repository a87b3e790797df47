use serde::Serialize;

use super::chart::categories;
use super::{points_for, Series, SeriesGroups, NO_DATA};
use crate::catalog::{Catalogs, MetricGroup};
use crate::color::SeriesStyle;
use crate::data::model::CompanySelection;

/// Trend of the group's primary metric, one line per company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparklineView {
    pub title: String,
    pub metric: Option<String>,
    pub series: Vec<Series>,
}

impl SparklineView {
    pub fn categories(&self) -> Vec<(i32, String)> {
        categories(&self.series)
    }
}

pub fn project_sparkline(
    catalogs: &Catalogs,
    group: &MetricGroup,
    company: CompanySelection,
    groups: &SeriesGroups<'_>,
) -> SparklineView {
    let Some(primary) = group.primary_metric() else {
        return SparklineView {
            title: format!("Trend — {NO_DATA}"),
            metric: None,
            series: Vec::new(),
        };
    };

    let series = company
        .companies()
        .into_iter()
        .map(|comp| Series {
            label: comp.name().to_string(),
            company: comp,
            metric: primary.to_string(),
            style: SeriesStyle::solid(catalogs.company_color(comp)),
            points: points_for(groups.get(&(comp, primary))),
        })
        .collect();

    SparklineView {
        title: format!("Trend — {primary}"),
        metric: Some(primary.to_string()),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::builtin_dataset;
    use crate::data::filter::{filter_records, YearRange};
    use crate::data::model::{Company, Dataset, Record};
    use crate::projection::group_by_series;

    #[test]
    fn uses_primary_metric_and_company_colours() {
        let ds = builtin_dataset().unwrap();
        let catalogs = Catalogs::builtin().unwrap();
        let group = catalogs.metrics.group("turnover").unwrap();
        let filtered = filter_records(&ds, &group.metrics, YearRange::full(&ds));
        let groups = group_by_series(&filtered);

        let spark = project_sparkline(&catalogs, group, CompanySelection::Both, &groups);
        assert_eq!(spark.title, "Trend — Inventory Turnover");
        assert_eq!(spark.series.len(), 2);
        assert_eq!(spark.series[1].label, "UltraTech Cement");
        assert_eq!(spark.series[1].style.color.to_hex(), "#ff7f0e");
        assert_eq!(spark.series[1].points.len(), 5);
        assert_eq!(spark.series[1].points[0].value, None);
    }

    #[test]
    fn primary_metric_missing_for_one_company() {
        let ds = Dataset::from_records(vec![Record {
            company: Company::Ambuja,
            metric: "Cash Ratio".to_string(),
            year: 2023,
            value: Some(0.8),
        }])
        .unwrap();
        let catalogs = Catalogs::builtin().unwrap();
        let group = MetricGroup::new("cash", "Cash Ratios", &["Cash Ratio"]);
        let filtered = filter_records(&ds, &group.metrics, YearRange::full(&ds));
        let groups = group_by_series(&filtered);

        let spark = project_sparkline(&catalogs, &group, CompanySelection::Both, &groups);
        assert_eq!(spark.series.len(), 2);
        assert_eq!(spark.series[0].points.len(), 1);
        assert!(spark.series[1].points.is_empty());
    }
}
