//! The fixed catalog of recognized feed fields.

/// A recognized feed field: the element name in the feed and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
}

const STANDARD_FIELDS: &[Field] = &[
    Field { key: "updated", label: "Last Updated" },
    Field { key: "solarflux", label: "Solar Flux" },
    Field { key: "aindex", label: "A-Index" },
    Field { key: "kindex", label: "K-Index" },
    Field { key: "kindexnt", label: "K-Index (Non-Telemetered)" },
    Field { key: "xray", label: "X-Ray Level" },
    Field { key: "sunspots", label: "Sunspot Count" },
    Field { key: "heliumline", label: "Helium Line" },
    Field { key: "protonflux", label: "Proton Flux" },
    Field { key: "electronflux", label: "Electron Flux" },
    Field { key: "aurora", label: "Aurora Level" },
    Field { key: "normalization", label: "Normalization Factor" },
    Field { key: "latitude", label: "Latitude" },
    Field { key: "longitude", label: "Longitude" },
    Field { key: "solarwind", label: "Solar Wind Speed" },
    Field { key: "magneticfield", label: "Magnetic Field Strength" },
    Field { key: "geomagfield", label: "Geomagnetic Field" },
    Field { key: "signalnoise", label: "Signal Noise Level" },
    Field { key: "fof2", label: "Critical Frequency foF2" },
    Field { key: "muf", label: "Maximum Usable Frequency" },
];

/// Ordered, read-only mapping from feed keys to display labels.
///
/// Keys are unique. Catalog order is the display order of every presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCatalog {
    fields: &'static [Field],
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FieldCatalog {
    /// The catalog of fields published by the solar XML feed.
    pub const fn standard() -> Self {
        Self {
            fields: STANDARD_FIELDS,
        }
    }

    /// Build a catalog over a custom field list.
    ///
    /// Returns `None` if two fields share a key.
    pub fn new(fields: &'static [Field]) -> Option<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.key == field.key) {
                return None;
            }
        }
        Some(Self { fields })
    }

    /// Position of `key` in catalog order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Look up a field by its feed key.
    pub fn get(&self, key: &str) -> Option<&'static Field> {
        self.position(key).map(|i| &self.fields[i])
    }

    /// Display label for `key`.
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|f| f.label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
