//! Parsers for FOS command output.
//!
//! Each parser is a pure function over the raw stdout lines of one command.
//! Parsing is permissive: lines that do not fit the expected shape are
//! skipped, so the worst case is an incomplete result, never an error.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{AliasMap, FabricTable, SwitchDescriptor, VersionInfo, ZoneMap};

/// A World Wide Name: eight colon-separated hex byte pairs, any case.
pub static WWN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9a-f]{2}(?::[0-9a-f]{2}){7}").expect("Invalid WWN regex pattern")
});

static ALIAS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"alias:(.*)").expect("Invalid regex pattern"));

static ZONE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"zone:(.*)").expect("Invalid regex pattern"));

static FABRIC_ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):").expect("Invalid regex pattern"));

static SWITCH_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+:").expect("Invalid regex pattern"));

static PORT_TABLE_DELIM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"={3,}").expect("Invalid regex pattern"));

static VERSION_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+ ").expect("Invalid regex pattern"));

static ACTIVE_CFG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cfg:(.*)").expect("Invalid regex pattern"));

/// Phrase FOS prints when a pattern matches no object.
const NO_MATCH_PHRASE: &str = "does not exist";

/// Returns true if a listing reports that nothing matched.
pub fn reports_no_match(lines: &[String]) -> bool {
    lines
        .join(" ")
        .to_lowercase()
        .contains(NO_MATCH_PHRASE)
}

/// Splits a block header such as `alias:  srv1  10:00:...` into the block
/// name and the text following it. A header with no name yields `None`.
fn block_header<'a>(re: &Regex, line: &'a str) -> Option<(Option<String>, &'a str)> {
    let rest = re.captures(line)?.get(1)?.as_str().trim();
    let (name, tail) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    let name = (!name.is_empty()).then(|| name.to_string());
    Some((name, tail))
}

fn split_members(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Parses `aliShow` output into alias name → member WWNs.
///
/// An `alias:<name>` line opens a block; every WWN seen from there (the rest
/// of the header line included) until the next header belongs to it. WWNs
/// before the first header are dropped.
pub fn parse_ali_show(lines: &[String]) -> AliasMap {
    let mut aliases = AliasMap::new();
    if lines.is_empty() || reports_no_match(lines) {
        return aliases;
    }

    let mut current: Option<String> = None;
    let mut members = BTreeSet::new();

    for line in lines {
        let mut text = line.trim();
        if let Some((name, tail)) = block_header(&ALIAS_HEADER_RE, text) {
            current = name;
            members.clear();
            text = tail;
        }

        members.extend(WWN_RE.find_iter(text).map(|m| m.as_str().to_string()));

        if let Some(name) = &current {
            aliases.insert(name.clone(), members.clone());
        }
    }

    aliases
}

/// Parses `zoneShow` output into zone name → member tokens.
///
/// Members are the `;`-separated tokens of every line following a
/// `zone:<name>` line, up to the next zone header.
pub fn parse_zone_show(lines: &[String]) -> ZoneMap {
    let mut zones = ZoneMap::new();
    if lines.is_empty() || reports_no_match(lines) {
        return zones;
    }

    let mut current: Option<String> = None;
    let mut members = BTreeSet::new();

    for line in lines {
        let text = line.trim();
        if let Some((name, tail)) = block_header(&ZONE_HEADER_RE, text) {
            current = name;
            members.clear();
            members.extend(split_members(tail));
        } else {
            members.extend(split_members(text));
        }

        if let Some(name) = &current {
            zones.insert(name.clone(), members.clone());
        }
    }

    zones
}

/// Parses `fabricShow` rows (`<domain>: col col ...`) keyed by domain id.
pub fn parse_fabric_show(lines: &[String]) -> FabricTable {
    let mut fabric = FabricTable::new();

    for line in lines {
        let text = line.trim();
        let Some(caps) = FABRIC_ROW_RE.captures(text) else {
            continue;
        };
        let (Some(domain), Some(row)) = (caps.get(1), caps.get(0)) else {
            continue;
        };
        let values = text[row.end()..]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        fabric.insert(domain.as_str().to_string(), values);
    }

    fabric
}

/// Parses `switchShow` output.
///
/// Header lines of the form `key: value` become fields (last duplicate
/// wins). Everything after the first run of three or more `=` is kept as
/// the raw port table.
pub fn parse_switch_show(lines: &[String]) -> SwitchDescriptor {
    let mut descriptor = SwitchDescriptor::default();
    if lines.is_empty() {
        return descriptor;
    }

    for line in lines {
        let text = line.trim();
        if !SWITCH_FIELD_RE.is_match(text) {
            continue;
        }
        if let Some((key, value)) = text.split_once(':') {
            descriptor
                .fields
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let joined = lines.join("\n");
    if let Some(delim) = PORT_TABLE_DELIM_RE.find(&joined) {
        let ports = joined[delim.end()..]
            .trim()
            .lines()
            .map(str::to_string)
            .collect();
        descriptor.ports = Some(ports);
    }

    descriptor
}

/// Parses `version` output; only lines splitting into exactly two tokens count.
pub fn parse_version(lines: &[String]) -> VersionInfo {
    let mut version = VersionInfo::new();

    for line in lines {
        let tokens: Vec<&str> = VERSION_SPLIT_RE.split(line.trim()).collect();
        if let [key, value] = tokens.as_slice() {
            version.insert(key.to_string(), value.to_string());
        }
    }

    version
}

/// Parses `switchName` output.
pub fn parse_switch_name(lines: &[String]) -> Option<String> {
    let name = lines.concat();
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Returns true if `nodefind` output mentions `wwn` in any letter case.
pub fn parse_node_find(lines: &[String], wwn: &str) -> bool {
    !lines.is_empty()
        && lines
            .join(" ")
            .to_lowercase()
            .contains(&wwn.to_lowercase())
}

/// Extracts the configuration name from `cfgactvshow` output.
pub fn parse_active_config(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| ACTIVE_CFG_RE.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}
