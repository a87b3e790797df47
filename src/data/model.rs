use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Company – one of the two compared issuers
// ---------------------------------------------------------------------------

/// The companies present in the dataset. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Company {
    #[serde(rename = "Ambuja Cements")]
    Ambuja,
    #[serde(rename = "UltraTech Cement")]
    UltraTech,
}

impl Company {
    pub const ALL: [Company; 2] = [Company::Ambuja, Company::UltraTech];

    /// Full name, also used as the colour-catalog key.
    pub fn name(self) -> &'static str {
        match self {
            Company::Ambuja => "Ambuja Cements",
            Company::UltraTech => "UltraTech Cement",
        }
    }

    /// Label used inside KPI cards.
    pub fn short_name(self) -> &'static str {
        match self {
            Company::Ambuja => "Ambuja",
            Company::UltraTech => "UltraTech",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// CompanySelection – the company dropdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CompanySelection {
    Single(Company),
    #[default]
    Both,
}

impl CompanySelection {
    pub const OPTIONS: [CompanySelection; 3] = [
        CompanySelection::Single(Company::Ambuja),
        CompanySelection::Single(Company::UltraTech),
        CompanySelection::Both,
    ];

    /// Companies covered by this selection, in display order.
    pub fn companies(self) -> Vec<Company> {
        match self {
            CompanySelection::Single(c) => vec![c],
            CompanySelection::Both => Company::ALL.to_vec(),
        }
    }

    pub fn is_both(self) -> bool {
        matches!(self, CompanySelection::Both)
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySelection::Single(c) => c.name(),
            CompanySelection::Both => "Both Companies",
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one (company, metric, year) observation
// ---------------------------------------------------------------------------

/// A single observation. `value == None` is the explicit "no data" state and
/// is never the same thing as `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub company: Company,
    pub metric: String,
    pub year: i32,
    pub value: Option<f64>,
}

/// Display label for a fiscal year end, e.g. `2021` → `Mar-21`.
pub fn year_label(year: i32) -> String {
    format!("Mar-{:02}", year.rem_euclid(100))
}

// ---------------------------------------------------------------------------
// Dataset – the immutable record set
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("duplicate record for {company} / {metric} / {year}")]
    DuplicateRecord {
        company: Company,
        metric: String,
        year: i32,
    },
    #[error("dataset contains no records")]
    Empty,
}

/// The full tidy record set with pre-computed year bounds.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// Distinct years, ascending.
    years: Vec<i32>,
}

impl Dataset {
    /// Build a dataset, enforcing at most one record per (company, metric, year).
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let years: Vec<i32> = {
            let mut seen: BTreeSet<(Company, &str, i32)> = BTreeSet::new();
            let mut years: BTreeSet<i32> = BTreeSet::new();
            for rec in &records {
                if !seen.insert((rec.company, rec.metric.as_str(), rec.year)) {
                    return Err(DatasetError::DuplicateRecord {
                        company: rec.company,
                        metric: rec.metric.clone(),
                        year: rec.year,
                    });
                }
                years.insert(rec.year);
            }
            years.into_iter().collect()
        };

        Ok(Dataset { records, years })
    }

    /// All records in construction order.
    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Inclusive (min, max) year of the dataset.
    pub fn year_bounds(&self) -> (i32, i32) {
        // `from_records` rejects empty input, so `years` is never empty.
        let min = self.years.first().copied().unwrap_or_default();
        let max = self.years.last().copied().unwrap_or(min);
        (min, max)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(company: Company, metric: &str, year: i32, value: Option<f64>) -> Record {
        Record {
            company,
            metric: metric.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn year_labels_are_two_digit() {
        assert_eq!(year_label(2021), "Mar-21");
        assert_eq!(year_label(2005), "Mar-05");
    }

    #[test]
    fn duplicate_records_are_rejected() {
        let err = Dataset::from_records(vec![
            rec(Company::Ambuja, "Current Ratio", 2021, Some(1.62)),
            rec(Company::Ambuja, "Current Ratio", 2021, None),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::DuplicateRecord {
                company: Company::Ambuja,
                metric: "Current Ratio".to_string(),
                year: 2021,
            }
        );
    }

    #[test]
    fn same_year_for_other_company_is_allowed() {
        let ds = Dataset::from_records(vec![
            rec(Company::Ambuja, "Current Ratio", 2022, Some(1.42)),
            rec(Company::UltraTech, "Current Ratio", 2022, Some(0.39)),
            rec(Company::UltraTech, "Current Ratio", 2021, Some(0.37)),
        ])
        .unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years(), &[2021, 2022]);
        assert_eq!(ds.year_bounds(), (2021, 2022));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert_eq!(Dataset::from_records(Vec::new()).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn selection_companies_follow_display_order() {
        assert_eq!(
            CompanySelection::Both.companies(),
            vec![Company::Ambuja, Company::UltraTech]
        );
        assert_eq!(
            CompanySelection::Single(Company::UltraTech).companies(),
            vec![Company::UltraTech]
        );
    }
}
