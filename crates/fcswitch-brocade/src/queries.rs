//! Cross-reference queries over parsed zoning state.

use crate::types::{AliasMap, WwnAliasMap, ZoneMap};

/// Inverts alias → WWNs into WWN → aliases.
///
/// Alias names are appended in the order they are first seen for a WWN and
/// never repeated.
pub fn invert_alias_map(aliases: &AliasMap) -> WwnAliasMap {
    let mut map = WwnAliasMap::new();

    for (alias, wwns) in aliases {
        for wwn in wwns {
            let names = map.entry(wwn.clone()).or_default();
            if !names.contains(alias) {
                names.push(alias.clone());
            }
        }
    }

    map
}

/// Names of every zone listing `alias` as a member (exact match).
pub fn zones_containing(zones: &ZoneMap, alias: &str) -> Vec<String> {
    zones
        .iter()
        .filter(|(_, members)| members.contains(alias))
        .map(|(zone, _)| zone.clone())
        .collect()
}

/// Aliases of `wwn`, trying its all-lowercase then all-uppercase form.
///
/// A key stored in mixed case is only found if it equals one of those two
/// forms.
pub fn lookup_wwn_aliases(map: &WwnAliasMap, wwn: &str) -> Vec<String> {
    map.get(&wwn.to_lowercase())
        .or_else(|| map.get(&wwn.to_uppercase()))
        .cloned()
        .unwrap_or_default()
}
