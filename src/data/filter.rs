use serde::Serialize;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Year range: the slider selection
// ---------------------------------------------------------------------------

/// Inclusive year range. Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Clamp both ends into `bounds` and put them in order.
    ///
    /// An out-of-bounds or reversed request is adjusted, never rejected.
    pub fn clamped(min: i32, max: i32, bounds: (i32, i32)) -> Self {
        let (lo, hi) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        let (a, b) = if min <= max { (min, max) } else { (max, min) };
        let range = YearRange {
            min: a.clamp(lo, hi),
            max: b.clamp(lo, hi),
        };
        if (range.min, range.max) != (min, max) {
            log::warn!(
                "Year range [{min}, {max}] adjusted to [{}, {}] (dataset covers {lo}..={hi})",
                range.min,
                range.max
            );
        }
        range
    }

    /// The whole span of the dataset.
    pub fn full(dataset: &Dataset) -> Self {
        let (min, max) = dataset.year_bounds();
        YearRange { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

// ---------------------------------------------------------------------------
// Record filtering
// ---------------------------------------------------------------------------

/// Records whose metric is in `metrics` and whose year lies in `range`.
///
/// Records with an absent value are kept: they still occupy their year slot.
/// Dataset order is preserved.
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    metrics: &[String],
    range: YearRange,
) -> Vec<&'a Record> {
    dataset
        .all_records()
        .iter()
        .filter(|rec| range.contains(rec.year) && metrics.iter().any(|m| *m == rec.metric))
        .collect()
}
