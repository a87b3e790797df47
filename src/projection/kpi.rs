use serde::Serialize;

use crate::catalog::InsightCatalog;
use crate::data::model::{Company, CompanySelection, Dataset};

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiValue {
    pub company: Company,
    pub value: Option<f64>,
}

/// Latest value per selected company for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub metric: String,
    pub values: Vec<KpiValue>,
}

impl Kpi {
    pub fn value_for(&self, company: Company) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.company == company)
            .and_then(|v| v.value)
    }
}

/// Value of the most recent record for (company, metric).
///
/// Looks at the whole dataset: the year-range slider does not apply to KPI
/// cards.
pub fn latest_value(dataset: &Dataset, company: Company, metric: &str) -> Option<f64> {
    dataset
        .all_records()
        .iter()
        .filter(|r| r.company == company && r.metric == metric)
        .max_by_key(|r| r.year)
        .and_then(|r| r.value)
}

/// One KPI per metric, in the order given.
pub fn project_kpis(dataset: &Dataset, company: CompanySelection, metrics: &[String]) -> Vec<Kpi> {
    let companies = company.companies();
    metrics
        .iter()
        .map(|metric| Kpi {
            metric: metric.clone(),
            values: companies
                .iter()
                .map(|&c| KpiValue {
                    company: c,
                    value: latest_value(dataset, c, metric),
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub metric: String,
    pub text: String,
}

pub fn project_insights(insights: &InsightCatalog, metrics: &[String]) -> Vec<Insight> {
    metrics
        .iter()
        .map(|metric| Insight {
            metric: metric.clone(),
            text: insights.insight_for(metric).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NO_INSIGHT;
    use crate::data::constants::builtin_dataset;
    use crate::data::model::Record;

    #[test]
    fn latest_ignores_record_order() {
        let ds = Dataset::from_records(vec![
            Record {
                company: Company::Ambuja,
                metric: "Asset Turnover".to_string(),
                year: 2025,
                value: Some(0.61),
            },
            Record {
                company: Company::Ambuja,
                metric: "Asset Turnover".to_string(),
                year: 2024,
                value: Some(0.74),
            },
        ])
        .unwrap();
        assert_eq!(latest_value(&ds, Company::Ambuja, "Asset Turnover"), Some(0.61));
    }

    #[test]
    fn latest_is_absent_without_records() {
        let ds = builtin_dataset().unwrap();
        assert_eq!(latest_value(&ds, Company::UltraTech, "Debt to Equity"), None);
    }

    #[test]
    fn kpis_follow_metric_order_and_selection() {
        let ds = builtin_dataset().unwrap();
        let metrics = vec!["Quick Ratio".to_string(), "Current Ratio".to_string()];
        let kpis = project_kpis(&ds, CompanySelection::Single(Company::UltraTech), &metrics);
        assert_eq!(kpis.len(), 2);
        assert_eq!(kpis[0].metric, "Quick Ratio");
        assert_eq!(kpis[0].values.len(), 1);
        assert_eq!(kpis[1].value_for(Company::UltraTech), Some(0.44));
        assert_eq!(kpis[1].value_for(Company::Ambuja), None);
    }

    #[test]
    fn insights_fall_back() {
        let catalog = InsightCatalog::from_pairs(&[("Current Ratio", "steady")]);
        let metrics = vec!["Current Ratio".to_string(), "Cash Ratio".to_string()];
        let out = project_insights(&catalog, &metrics);
        assert_eq!(out[0].text, "steady");
        assert_eq!(out[1].text, NO_INSIGHT);
    }
}
