//! JSON encoding of a computed layout, for debugging and golden assertions.
//!
//! Output is deterministic: rows in order, the inverse index in key order.

use crate::level::Layout;

/// Compact form: `{"levels":[...],"level_of":{...}}`.
pub fn to_json(layout: &Layout) -> serde_json::Result<String> {
    serde_json::to_string(layout)
}

pub fn to_json_pretty(layout: &Layout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(layout)
}
