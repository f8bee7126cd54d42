//! Domain values rebuilt from FOS command output.
//!
//! Every value here is produced fresh by one parse call. Nothing is cached
//! between calls; the switch is the only store of zoning state.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::Serialize;

/// Alias name to member WWNs (case preserved), in listing order.
pub type AliasMap = IndexMap<String, BTreeSet<String>>;

/// Zone name to member tokens (alias names or raw WWNs), in listing order.
pub type ZoneMap = IndexMap<String, BTreeSet<String>>;

/// Domain id to the remaining `fabricShow` columns of that row.
pub type FabricTable = BTreeMap<String, Vec<String>>;

/// `version` key/value lines.
pub type VersionInfo = BTreeMap<String, String>;

/// WWN to the aliases containing it, in first-seen order.
pub type WwnAliasMap = IndexMap<String, Vec<String>>;

/// Parsed `switchShow` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwitchDescriptor {
    /// Header `key: value` pairs (`switchName`, `switchType`, `switchWwn`, ...).
    pub fields: BTreeMap<String, String>,

    /// Port table rows below the `===` delimiter, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
}

impl SwitchDescriptor {
    /// Gets a header field, if present.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `switchType` model code, e.g. `"77.2"`.
    pub fn switch_type(&self) -> Option<&str> {
        self.field(crate::commands::SWITCH_TYPE_FIELD)
    }
}
