use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder stored whenever a field cannot be located in the detail panel.
pub const NOT_AVAILABLE: &str = "N/A";

/// One extracted business listing.
///
/// Every field is always present in the serialized output; missing data is
/// the "N/A" sentinel (scalars) or an empty map (`about`), never an omitted
/// key. Rating and review count are kept as the text the page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub rating: String,
    pub total_reviews: String,
    pub category: String,
    pub address: String,
    pub website: String,
    pub phone: String,
    /// About-tab sections, keyed by heading ("Accessibility", "Amenities",
    /// ...), each holding its attribute labels in document order. Headings
    /// serialize sorted; the BTreeMap trades the page's section order for a
    /// deterministic artifact.
    pub about: BTreeMap<String, Vec<String>>,
}

impl Default for BusinessRecord {
    fn default() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            rating: NOT_AVAILABLE.to_string(),
            total_reviews: NOT_AVAILABLE.to_string(),
            category: NOT_AVAILABLE.to_string(),
            address: NOT_AVAILABLE.to_string(),
            website: NOT_AVAILABLE.to_string(),
            phone: NOT_AVAILABLE.to_string(),
            about: BTreeMap::new(),
        }
    }
}

/// Serialize records as a human-readable JSON array with 4-space indent.
/// Non-ASCII text is written literally, not escaped.
pub fn to_json_document(records: &[BusinessRecord]) -> serde_json::Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
}
