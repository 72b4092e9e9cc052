//! Lazy, process-lifetime icon catalogs.
//!
//! Two disjoint name → SVG-markup tables (outline and filled variants) are
//! loaded from fixed on-disk JSON resources at first use and cached for the
//! life of the process. The tables are read-only after the load, so sharing
//! them without locking is safe.
//!
//! A missing or malformed resource is a fatal initialization error: the
//! catalog never substitutes an empty table and never retries per call.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{IconError, IconResult};

const OUTLINE_RESOURCE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/icons/outline.json"
);
const FILLED_RESOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/icons/filled.json");

/// Synchronously load one name → markup table.
///
/// # Panics
///
/// Panics if the resource is unreadable or not a JSON string map — the
/// catalog contract is fail-fast, observable initialization.
fn load_table(path: &str) -> HashMap<String, String> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("icon resource '{}' unreadable: {}", path, e);
            panic!("icon resource '{path}' unreadable: {e}");
        }
    };
    let table: HashMap<String, String> = match serde_json::from_str(&data) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("icon resource '{}' malformed: {}", path, e);
            panic!("icon resource '{path}' malformed: {e}");
        }
    };
    tracing::debug!("loaded {} icons from '{}'", table.len(), path);
    table
}

/// The outline icon table.
pub(crate) fn outline_icons() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| load_table(OUTLINE_RESOURCE))
}

/// The filled icon table.
pub(crate) fn filled_icons() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| load_table(FILLED_RESOURCE))
}

/// Look up an icon's SVG markup by name.
///
/// With `filled` set, the filled table is consulted first, falling back to
/// the outline entry when no filled variant exists. An unknown name in the
/// table ultimately consulted is an error — there is no fallback icon.
pub(crate) fn lookup(name: &str, filled: bool) -> IconResult<&'static str> {
    let table = if filled && filled_icons().contains_key(name) {
        filled_icons()
    } else {
        outline_icons()
    };

    table
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| IconError::UnknownIcon {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_outline() {
        assert!(lookup("close", false).is_ok());
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = lookup("nonexistent_icon_xyz", false).unwrap_err();
        assert!(matches!(err, IconError::UnknownIcon { name } if name == "nonexistent_icon_xyz"));
    }

    #[test]
    fn test_filled_falls_back_to_outline() {
        // "settings" has no filled variant; the outline entry is used
        assert!(!filled_icons().contains_key("settings"));
        let markup = lookup("settings", true).unwrap();
        assert_eq!(markup, lookup("settings", false).unwrap());
    }

    #[test]
    fn test_filled_variant_preferred() {
        // "star" has a dedicated filled variant
        assert!(filled_icons().contains_key("star"));
        assert_ne!(lookup("star", true).unwrap(), lookup("star", false).unwrap());
    }

    #[test]
    fn test_filled_table_covers_fewer_names() {
        // The filled set only carries icons with a distinct solid variant
        assert!(filled_icons().len() < outline_icons().len());
        for name in filled_icons().keys() {
            assert!(outline_icons().contains_key(name), "filled-only icon {name}");
        }
    }
}
