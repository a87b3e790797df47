//! Ratio comparison dashboard for Ambuja Cements and UltraTech Cement.
//!
//! The window lives in the `ratio-dash` binary; this library holds everything
//! that can run without one: the compiled-in dataset, the catalogs, the
//! selection state and the projection engine that turns a selection into
//! KPI cards, bar-chart series, a sparkline and a pivot table.

pub mod catalog;
pub mod color;
pub mod data;
pub mod error;
pub mod projection;
pub mod state;

pub use catalog::Catalogs;
pub use data::model::{Company, CompanySelection, Dataset, Record};
pub use error::ProjectionError;
pub use projection::{project, DashboardViews};
pub use state::{DashboardState, Selection};
