//! FOS command names and switch model constants

use serde::Serialize;

/// Alias listing; takes a name pattern
pub const ALI_SHOW: &str = "aliShow";

/// Zone listing; takes a name pattern
pub const ZONE_SHOW: &str = "zoneShow";

/// Fabric membership table
pub const FABRIC_SHOW: &str = "fabricShow";

/// Switch name
pub const SWITCH_NAME: &str = "switchName";

/// Switch descriptor and port table
pub const SWITCH_SHOW: &str = "switchShow";

/// Firmware version block
pub const VERSION: &str = "version";

/// Name server lookup for a WWN
pub const NODE_FIND: &str = "nodefind";

/// Effective zoning configuration
pub const CFG_ACTV_SHOW: &str = "cfgactvshow";

/// Pattern matching every alias or zone
pub const MATCH_ALL: &str = "*";

/// `switchShow` field carrying the model code
pub const SWITCH_TYPE_FIELD: &str = "switchType";

/// Model codes of chassis-based (director) platforms.
pub const DIRECTOR_CLASS_TYPES: [&str; 5] = ["42", "62", "77", "120", "121"];

/// Returns true if a `switchType` value such as `"77.2"` names a director.
///
/// Only the part before the first `.` is compared.
pub fn is_director_class(switch_type: &str) -> bool {
    let model = switch_type.split('.').next().unwrap_or_default();
    DIRECTOR_CLASS_TYPES.contains(&model)
}

/// Which `fabricShow` table to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricVariant {
    /// Domain, WWN, addresses and switch name
    #[default]
    Plain,
    /// `-membership`
    Membership,
    /// `-chassis`
    Chassis,
}

impl FabricVariant {
    /// Picks the variant from the two request flags.
    ///
    /// Asking for both falls back to the plain listing.
    pub fn from_flags(membership: bool, chassis: bool) -> Self {
        match (membership, chassis) {
            (true, false) => FabricVariant::Membership,
            (false, true) => FabricVariant::Chassis,
            _ => FabricVariant::Plain,
        }
    }

    /// The full command line for this variant.
    pub fn command(self) -> String {
        match self {
            FabricVariant::Plain => FABRIC_SHOW.to_string(),
            FabricVariant::Membership => format!("{} -membership", FABRIC_SHOW),
            FabricVariant::Chassis => format!("{} -chassis", FABRIC_SHOW),
        }
    }
}
