use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::data::filter::YearRange;
use crate::data::model::{CompanySelection, Dataset};
use crate::error::ProjectionError;
use crate::projection::{project, DashboardViews};

// ---------------------------------------------------------------------------
// Selection – the three filter values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub company: CompanySelection,
    /// Key into the metric catalog.
    pub group: String,
    pub year_range: YearRange,
}

impl Selection {
    pub const DEFAULT_GROUP: &'static str = "liquidity";

    /// Both companies, liquidity ratios, the whole dataset span.
    pub fn default_for(dataset: &Dataset) -> Self {
        Selection {
            company: CompanySelection::Both,
            group: Self::DEFAULT_GROUP.to_string(),
            year_range: YearRange::full(dataset),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Dataset and catalogs are shared read-only. Each setter builds a new
/// [`Selection`] and recomputes every view; the selection is only committed
/// when the projection succeeds.
pub struct DashboardState {
    dataset: Arc<Dataset>,
    catalogs: Arc<Catalogs>,
    selection: Selection,
    views: DashboardViews,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl DashboardState {
    pub fn new(dataset: Arc<Dataset>, catalogs: Arc<Catalogs>) -> Result<Self, ProjectionError> {
        let selection = Selection::default_for(&dataset);
        let views = project(&dataset, &catalogs, &selection)?;
        Ok(DashboardState {
            dataset,
            catalogs,
            selection,
            views,
            status_message: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    pub fn set_company(&mut self, company: CompanySelection) -> Result<(), ProjectionError> {
        if company == self.selection.company {
            return Ok(());
        }
        self.apply(Selection {
            company,
            ..self.selection.clone()
        })
    }

    pub fn set_group(&mut self, group: &str) -> Result<(), ProjectionError> {
        if group == self.selection.group {
            return Ok(());
        }
        self.apply(Selection {
            group: group.to_string(),
            ..self.selection.clone()
        })
    }

    /// Out-of-bounds or reversed ranges are clamped, not rejected.
    pub fn set_year_range(&mut self, min: i32, max: i32) -> Result<(), ProjectionError> {
        let year_range = YearRange::clamped(min, max, self.dataset.year_bounds());
        if year_range == self.selection.year_range {
            return Ok(());
        }
        self.apply(Selection {
            year_range,
            ..self.selection.clone()
        })
    }

    /// Replace the selection and recompute. On failure the previous selection
    /// and views stay in place.
    fn apply(&mut self, selection: Selection) -> Result<(), ProjectionError> {
        match project(&self.dataset, &self.catalogs, &selection) {
            Ok(views) => {
                self.selection = selection;
                self.views = views;
                self.status_message = None;
                Ok(())
            }
            Err(e) => {
                log::error!("Projection failed for {selection:?}: {e}");
                self.status_message = Some(format!("Error: {e}"));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::builtin_dataset;
    use crate::data::model::Company;

    fn state() -> DashboardState {
        DashboardState::new(
            Arc::new(builtin_dataset().unwrap()),
            Arc::new(Catalogs::builtin().unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn defaults() {
        let st = state();
        let sel = st.selection();
        assert_eq!(sel.company, CompanySelection::Both);
        assert_eq!(sel.group, "liquidity");
        assert_eq!((sel.year_range.min(), sel.year_range.max()), (2021, 2025));
        assert_eq!(st.views().chart.series.len(), 4);
    }

    #[test]
    fn company_change_recomputes() {
        let mut st = state();
        st.set_company(CompanySelection::Single(Company::Ambuja)).unwrap();
        assert_eq!(st.views().chart.series.len(), 2);
        assert_eq!(st.views().sparkline.series.len(), 1);
    }

    #[test]
    fn unknown_group_keeps_previous_views() {
        let mut st = state();
        let before = st.views().clone();
        let err = st.set_group("solvency").unwrap_err();
        assert_eq!(err, ProjectionError::UnknownGroup("solvency".to_string()));
        assert_eq!(st.selection().group, "liquidity");
        assert_eq!(st.views(), &before);
        assert!(st.status_message.is_some());
    }

    #[test]
    fn year_range_is_clamped() {
        let mut st = state();
        st.set_year_range(2025, 2019).unwrap();
        let r = st.selection().year_range;
        assert_eq!((r.min(), r.max()), (2021, 2025));
        st.set_year_range(2024, 2024).unwrap();
        assert_eq!(st.views().table.rows.len(), 1);
    }
}
