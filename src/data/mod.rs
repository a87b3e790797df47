//! Data layer: core types, the compiled-in tables, and filtering.
//!
//! Architecture:
//! ```text
//!  compiled-in ratio tables
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ constants │  tables → Vec<Record>
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Vec<Record>, year bounds, uniqueness checked
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  metric set + year range → &Record slice
//!   └──────────┘
//! ```

pub mod constants;
pub mod filter;
pub mod model;
