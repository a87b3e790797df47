use std::collections::BTreeMap;

use crate::color::{Color, ColorError, ColorMap};
use crate::data::constants::{
    ASSET_TURNOVER, CURRENT_RATIO, GROSS_PROFIT_MARGIN, INTEREST_COVERAGE_RATIO,
    INVENTORY_TURNOVER, NET_PROFIT_MARGIN, QUICK_RATIO, TRADE_RECEIVABLE_TURNOVER,
};
use crate::data::model::Company;
use crate::error::ProjectionError;

pub const NO_INSIGHT: &str = "No insight available.";

// ---------------------------------------------------------------------------
// Metric catalog
// ---------------------------------------------------------------------------

/// A named, ordered subset of metrics shown together.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGroup {
    pub key: String,
    /// Dropdown label, e.g. "Liquidity Ratios".
    pub label: String,
    /// Metric names in display order.
    pub metrics: Vec<String>,
}

impl MetricGroup {
    pub fn new(key: &str, label: &str, metrics: &[&str]) -> Self {
        MetricGroup {
            key: key.to_string(),
            label: label.to_string(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Key with its first letter upper-cased, used in chart titles.
    pub fn title(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The group's first metric, shown in the sparkline.
    pub fn primary_metric(&self) -> Option<&str> {
        self.metrics.first().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct MetricCatalog {
    /// Insertion order is kept.
    groups: Vec<MetricGroup>,
    colors: ColorMap,
}

impl MetricCatalog {
    pub fn new(groups: Vec<MetricGroup>, colors: ColorMap) -> Self {
        MetricCatalog { groups, colors }
    }

    pub fn builtin() -> Result<Self, ColorError> {
        let groups = vec![
            MetricGroup::new("liquidity", "Liquidity Ratios", &[CURRENT_RATIO, QUICK_RATIO]),
            MetricGroup::new(
                "profitability",
                "Profitability Ratios",
                &[GROSS_PROFIT_MARGIN, NET_PROFIT_MARGIN],
            ),
            MetricGroup::new(
                "turnover",
                "Turnover Ratios",
                &[INVENTORY_TURNOVER, ASSET_TURNOVER, TRADE_RECEIVABLE_TURNOVER],
            ),
            MetricGroup::new("leverage", "Leverage Ratios", &[INTEREST_COVERAGE_RATIO]),
        ];
        let colors = ColorMap::from_hex_pairs(&[
            (CURRENT_RATIO, "#1f77b4"),
            (QUICK_RATIO, "#aec7e8"),
            (GROSS_PROFIT_MARGIN, "#2ca02c"),
            (NET_PROFIT_MARGIN, "#98df8a"),
            (INTEREST_COVERAGE_RATIO, "#9467bd"),
            (INVENTORY_TURNOVER, "#ff7f0e"),
            (ASSET_TURNOVER, "#ffbb78"),
            (TRADE_RECEIVABLE_TURNOVER, "#d62728"),
        ])?;
        Ok(MetricCatalog::new(groups, colors))
    }

    pub fn groups(&self) -> &[MetricGroup] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Result<&MetricGroup, ProjectionError> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .ok_or_else(|| ProjectionError::UnknownGroup(key.to_string()))
    }

    pub fn metrics_in_group(&self, key: &str) -> Result<&[String], ProjectionError> {
        self.group(key).map(|g| g.metrics.as_slice())
    }

    pub fn color_for(&self, metric: &str) -> Color {
        self.colors.color_for(metric)
    }
}

// ---------------------------------------------------------------------------
// Insight catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InsightCatalog {
    insights: BTreeMap<String, String>,
}

impl InsightCatalog {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        InsightCatalog {
            insights: pairs
                .iter()
                .map(|&(metric, text)| (metric.to_string(), text.to_string()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        InsightCatalog::from_pairs(&[
            (
                CURRENT_RATIO,
                "Ambuja’s 1.62 (’21) to 1.55 (’25) shows solid liquidity, peaking at 2.03 (’24), but recent dip hints at tighter operations. UltraTech’s low 0.37–0.44 signals lean liquidity, risking strain but efficient for capital-heavy cement.",
            ),
            (
                QUICK_RATIO,
                "Ambuja’s 1.41–1.30 (’21–’25) reflects strong immediate liquidity, though declining. UltraTech’s 0.20–0.17 shows vulnerability, prioritizing efficiency over cash reserves.",
            ),
            (
                GROSS_PROFIT_MARGIN,
                "Ambuja’s volatile 17.46% (’21) to 9.96% (’25) suggests cost pressures, recovering to 14.40% (’24). UltraTech’s robust 56.22%–49.03% showcases superior pricing power and scale.",
            ),
            (
                NET_PROFIT_MARGIN,
                "Ambuja improves from 6.25% (’22) to 11.89% (’25), signaling better cost control. UltraTech peaks at 13.69% (’22) but falls to 8.47% (’25), indicating moderated profitability.",
            ),
            (
                INTEREST_COVERAGE_RATIO,
                "Ambuja’s strong 37.14–28.46 (’21–’25) reflects low debt risk. UltraTech’s 7.31–6.67 suggests higher leverage but manageable coverage.",
            ),
            (
                INVENTORY_TURNOVER,
                "Ambuja’s 10.58–8.25 (’21–’25) shows slowing inventory movement, risking costs. UltraTech’s 5.59–4.41 (’22–’25) indicates even slower turnover, less efficient.",
            ),
            (
                ASSET_TURNOVER,
                "Ambuja’s 0.94–0.61 (’21–’25) reflects declining asset efficiency. UltraTech’s 0.86–0.92 (’22–’25) is steadier, slightly outperforming in sales generation.",
            ),
            (
                TRADE_RECEIVABLE_TURNOVER,
                "Ambuja’s 48.00–25.00 (’21–’25) signals slower collections, risking cash flow. UltraTech’s 2.54–2.28 (’22–’25) is far slower, highlighting credit leniency.",
            ),
        ])
    }

    /// Never fails: unknown metrics get [`NO_INSIGHT`].
    pub fn insight_for(&self, metric: &str) -> &str {
        self.insights
            .get(metric)
            .map(String::as_str)
            .unwrap_or(NO_INSIGHT)
    }
}

// ---------------------------------------------------------------------------
// Catalogs – everything the projections read besides the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalogs {
    pub metrics: MetricCatalog,
    pub company_colors: ColorMap,
    pub insights: InsightCatalog,
}

impl Catalogs {
    pub fn builtin() -> Result<Self, ColorError> {
        Ok(Catalogs {
            metrics: MetricCatalog::builtin()?,
            company_colors: ColorMap::from_hex_pairs(&[
                (Company::Ambuja.name(), "#1f77b4"),
                (Company::UltraTech.name(), "#ff7f0e"),
            ])?,
            insights: InsightCatalog::builtin(),
        })
    }

    pub fn company_color(&self, company: Company) -> Color {
        self.company_colors.color_for(company.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_insertion_order() {
        let catalog = MetricCatalog::builtin().unwrap();
        let keys: Vec<&str> = catalog.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["liquidity", "profitability", "turnover", "leverage"]);
        assert_eq!(
            catalog.metrics_in_group("turnover").unwrap(),
            [INVENTORY_TURNOVER, ASSET_TURNOVER, TRADE_RECEIVABLE_TURNOVER]
        );
    }

    #[test]
    fn unknown_group_is_an_error() {
        let catalog = MetricCatalog::builtin().unwrap();
        assert_eq!(
            catalog.metrics_in_group("solvency").unwrap_err(),
            ProjectionError::UnknownGroup("solvency".to_string())
        );
    }

    #[test]
    fn unknown_metric_colour_is_black() {
        let catalog = MetricCatalog::builtin().unwrap();
        assert_eq!(catalog.color_for("Debt to Equity"), Color::BLACK);
        assert_eq!(catalog.color_for(TRADE_RECEIVABLE_TURNOVER).to_hex(), "#d62728");
    }

    #[test]
    fn insight_fallback_text() {
        let insights = InsightCatalog::builtin();
        assert!(insights.insight_for(QUICK_RATIO).starts_with("Ambuja’s 1.41"));
        assert_eq!(insights.insight_for("Debt to Equity"), NO_INSIGHT);
    }

    #[test]
    fn group_title_capitalises_key() {
        let catalog = MetricCatalog::builtin().unwrap();
        assert_eq!(catalog.group("profitability").unwrap().title(), "Profitability");
        assert_eq!(
            catalog.group("leverage").unwrap().primary_metric(),
            Some(INTEREST_COVERAGE_RATIO)
        );
    }

    #[test]
    fn company_colours() {
        let catalogs = Catalogs::builtin().unwrap();
        assert_eq!(catalogs.company_color(Company::UltraTech).to_hex(), "#ff7f0e");
    }
}
