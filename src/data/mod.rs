//! Data models and processing for the space-weather feed.
//!
//! This module turns raw feed bytes into structured, classified data
//! suitable for display.
//!
//! ## Submodules
//!
//! - [`catalog`]: The fixed [`FieldCatalog`] of recognized feed keys and labels
//! - [`extract`]: Tree-wide field extraction into a [`Snapshot`]
//! - [`snapshot`]: [`Reading`] and [`FieldValue`] (numeric or textual)
//! - [`classify`]: Propagation tiers for Solar Flux, Sunspot Count, A-Index and K-Index
//! - [`assessment`]: A snapshot plus its classified [`Condition`]s
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "2h", "90m")
//!
//! ## Data Flow
//!
//! ```text
//! feed bytes
//!      │
//!      ▼
//! extract()  ──▶ Snapshot (readings in catalog order)
//!      │
//!      ▼
//! Assessment::from_snapshot()
//!      │
//!      └──▶ Condition (metric, value, ConditionVerdict from classify())
//! ```

pub mod assessment;
pub mod catalog;
pub mod classify;
pub mod duration;
pub mod extract;
pub mod snapshot;

pub use assessment::{Assessment, Condition};
pub use catalog::{Field, FieldCatalog};
pub use duration::{format_duration, parse_duration};
pub use classify::{classify, classify_metric, ConditionVerdict, Metric, SeverityColor, Tier};
pub use extract::{extract, extract_with, ParseError};
pub use snapshot::{FieldValue, Reading, Snapshot};
