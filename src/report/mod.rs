//! One-shot text presenters.
//!
//! Each presenter renders an [`Assessment`] to a writer:
//!
//! - [`plain`]: `label: value` listing
//! - [`summary`]: aligned listing plus a colour-coded propagation summary
//! - [`json`]: machine-readable dump
//!
//! Every catalog field is listed in catalog order; fields the feed did not
//! provide (or provided empty) are shown as [`NO_DATA`].

pub mod json;
pub mod plain;
pub mod summary;

use crate::data::{FieldCatalog, Snapshot};

/// Placeholder for catalog fields without a value.
pub const NO_DATA: &str = "No data";

/// Heading printed above the field listing.
pub const HEADING: &str = "Solar Activity Information";

/// `(label, value)` for every catalog field, in catalog order.
pub fn field_rows(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    FieldCatalog::standard()
        .iter()
        .map(|field| {
            let value = snapshot
                .get(field.key)
                .and_then(|r| r.display_value())
                .unwrap_or(NO_DATA);
            (field.label, value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::extract;

    #[test]
    fn test_field_rows_cover_catalog() {
        let snapshot = extract(b"<solar><solarflux> 120.5 </solarflux><muf/></solar>").unwrap();
        let rows = field_rows(&snapshot);

        assert_eq!(rows.len(), FieldCatalog::standard().len());
        assert_eq!(rows[0], ("Last Updated", NO_DATA.to_string()));
        assert_eq!(rows[1], ("Solar Flux", "120.5".to_string()));
        assert_eq!(rows[19], ("Maximum Usable Frequency", NO_DATA.to_string()));
    }
}
