use super::model::{Company, Dataset, DatasetError, Record};

// ---------------------------------------------------------------------------
// Compiled-in ratio tables (Mar-21 → Mar-25)
// ---------------------------------------------------------------------------

pub const YEARS: [i32; 5] = [2021, 2022, 2023, 2024, 2025];

pub const CURRENT_RATIO: &str = "Current Ratio";
pub const QUICK_RATIO: &str = "Quick Ratio";
pub const GROSS_PROFIT_MARGIN: &str = "Gross Profit Margin";
pub const NET_PROFIT_MARGIN: &str = "Net Profit Margin";
pub const INTEREST_COVERAGE_RATIO: &str = "Interest Coverage Ratio";
pub const INVENTORY_TURNOVER: &str = "Inventory Turnover";
pub const ASSET_TURNOVER: &str = "Asset Turnover";
pub const TRADE_RECEIVABLE_TURNOVER: &str = "Trade Receivable Turnover";

type MetricRow = (&'static str, [Option<f64>; 5]);

const AMBUJA: [MetricRow; 8] = [
    (CURRENT_RATIO, [Some(1.62), Some(1.42), Some(1.96), Some(2.03), Some(1.55)]),
    (QUICK_RATIO, [Some(1.41), Some(1.22), Some(1.72), Some(1.79), Some(1.30)]),
    (GROSS_PROFIT_MARGIN, [Some(17.46), Some(8.35), Some(8.93), Some(14.40), Some(9.96)]),
    (NET_PROFIT_MARGIN, [Some(9.59), Some(6.25), Some(6.63), Some(10.78), Some(11.89)]),
    (INTEREST_COVERAGE_RATIO, [Some(37.14), Some(19.33), Some(21.63), Some(21.50), Some(28.46)]),
    (INVENTORY_TURNOVER, [Some(10.58), Some(9.26), Some(11.90), Some(9.19), Some(8.25)]),
    (ASSET_TURNOVER, [Some(0.94), Some(0.95), Some(1.09), Some(0.74), Some(0.61)]),
    (TRADE_RECEIVABLE_TURNOVER, [Some(48.00), Some(36.51), Some(43.26), Some(28.01), Some(25.00)]),
];

// UltraTech has no turnover figures for Mar-21.
const ULTRATECH: [MetricRow; 8] = [
    (CURRENT_RATIO, [Some(0.37), Some(0.39), Some(0.42), Some(0.43), Some(0.44)]),
    (QUICK_RATIO, [Some(0.20), Some(0.14), Some(0.17), Some(0.15), Some(0.17)]),
    (GROSS_PROFIT_MARGIN, [Some(56.22), Some(50.97), Some(45.01), Some(48.87), Some(49.03)]),
    (NET_PROFIT_MARGIN, [Some(12.30), Some(13.69), Some(7.86), Some(9.97), Some(8.47)]),
    (INTEREST_COVERAGE_RATIO, [Some(7.31), Some(11.37), Some(10.62), Some(11.71), Some(6.67)]),
    (INVENTORY_TURNOVER, [None, Some(5.59), Some(6.00), Some(4.97), Some(4.41)]),
    (ASSET_TURNOVER, [None, Some(0.86), Some(1.01), Some(1.07), Some(0.92)]),
    (TRADE_RECEIVABLE_TURNOVER, [None, Some(2.54), Some(2.58), Some(2.55), Some(2.28)]),
];

fn table_for(company: Company) -> &'static [MetricRow; 8] {
    match company {
        Company::Ambuja => &AMBUJA,
        Company::UltraTech => &ULTRATECH,
    }
}

/// Build the tidy record set: year-major, then company, then metric.
pub fn builtin_records() -> Vec<Record> {
    let mut records = Vec::with_capacity(YEARS.len() * Company::ALL.len() * AMBUJA.len());
    for (i, &year) in YEARS.iter().enumerate() {
        for company in Company::ALL {
            for (metric, values) in table_for(company) {
                records.push(Record {
                    company,
                    metric: (*metric).to_string(),
                    year,
                    value: values[i],
                });
            }
        }
    }
    records
}

/// The built-in dataset.
pub fn builtin_dataset() -> Result<Dataset, DatasetError> {
    let dataset = Dataset::from_records(builtin_records())?;
    log::info!(
        "Built dataset with {} records covering {:?}",
        dataset.len(),
        dataset.year_bounds()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_has_eighty_records() {
        let ds = builtin_dataset().unwrap();
        assert_eq!(ds.len(), 80);
        assert_eq!(ds.year_bounds(), (2021, 2025));
    }

    #[test]
    fn only_ultratech_turnover_2021_is_absent() {
        let ds = builtin_dataset().unwrap();
        let absent: Vec<(Company, &str, i32)> = ds
            .all_records()
            .iter()
            .filter(|r| r.value.is_none())
            .map(|r| (r.company, r.metric.as_str(), r.year))
            .collect();
        assert_eq!(
            absent,
            vec![
                (Company::UltraTech, INVENTORY_TURNOVER, 2021),
                (Company::UltraTech, ASSET_TURNOVER, 2021),
                (Company::UltraTech, TRADE_RECEIVABLE_TURNOVER, 2021),
            ]
        );
    }
}
