//! BrocadeSwitch - read-only client for a Brocade FOS switch

use tracing::{debug, instrument, warn};

use fcswitch_common::{fidify_command, CommandOutput, CommandRunner, FcSwitchResult, Fid};

use crate::commands::{self, FabricVariant};
use crate::parsers;
use crate::queries;
use crate::types::{AliasMap, FabricTable, SwitchDescriptor, VersionInfo, WwnAliasMap, ZoneMap};

/// Client for one Brocade switch session.
///
/// Each call issues its command(s) through the runner and parses the fresh
/// output; no switch state is kept between calls. A `fid` argument of `None`
/// falls back to the client's default context, if any.
pub struct BrocadeSwitch<R> {
    runner: R,
    default_fid: Option<Fid>,
}

impl<R: CommandRunner> BrocadeSwitch<R> {
    /// Creates a client over an already-connected runner.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            default_fid: None,
        }
    }

    /// Runs every command in `fid` unless a call names its own.
    pub fn with_default_fid(mut self, fid: Option<Fid>) -> Self {
        self.default_fid = fid;
        self
    }

    /// The underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs an arbitrary read command in the given context.
    #[instrument(skip(self))]
    pub fn command(&self, cmd: &str, fid: Option<Fid>) -> FcSwitchResult<CommandOutput> {
        let cmd = fidify_command(cmd, fid.or(self.default_fid));
        self.run(&cmd)
    }

    /// Sends `cmd` as-is and logs what came back.
    fn run(&self, cmd: &str) -> FcSwitchResult<CommandOutput> {
        let output = self.runner.execute(cmd)?;

        if !output.errors.is_empty() {
            warn!(command = %cmd, stderr = ?output.errors, "Command wrote to stderr");
        }
        debug!(command = %cmd, lines = output.lines.len(), "Command returned");

        Ok(output)
    }

    /// Aliases matching `pattern` (`*` for all) with their member WWNs.
    #[instrument(skip(self))]
    pub fn ali_show(&self, pattern: &str, fid: Option<Fid>) -> FcSwitchResult<AliasMap> {
        let cmd = format!("{} {}", commands::ALI_SHOW, pattern);
        let output = self.command(&cmd, fid)?;
        Ok(parsers::parse_ali_show(&output.lines))
    }

    /// Zones matching `pattern` (`*` for all) with their members.
    #[instrument(skip(self))]
    pub fn zone_show(&self, pattern: &str, fid: Option<Fid>) -> FcSwitchResult<ZoneMap> {
        let cmd = format!("{} {}", commands::ZONE_SHOW, pattern);
        let output = self.command(&cmd, fid)?;
        Ok(parsers::parse_zone_show(&output.lines))
    }

    /// Fabric member table keyed by domain id.
    ///
    /// Requesting both `membership` and `chassis` returns the plain table.
    #[instrument(skip(self))]
    pub fn fabric_show(
        &self,
        membership: bool,
        chassis: bool,
        fid: Option<Fid>,
    ) -> FcSwitchResult<FabricTable> {
        let variant = FabricVariant::from_flags(membership, chassis);
        let output = self.command(&variant.command(), fid)?;
        Ok(parsers::parse_fabric_show(&output.lines))
    }

    /// The switch name, if the switch printed one.
    #[instrument(skip(self))]
    pub fn switch_name(&self, fid: Option<Fid>) -> FcSwitchResult<Option<String>> {
        let output = self.command(commands::SWITCH_NAME, fid)?;
        Ok(parsers::parse_switch_name(&output.lines))
    }

    /// Switch header fields and the raw port table.
    #[instrument(skip(self))]
    pub fn switch_show(&self, fid: Option<Fid>) -> FcSwitchResult<SwitchDescriptor> {
        let output = self.command(commands::SWITCH_SHOW, fid)?;
        Ok(parsers::parse_switch_show(&output.lines))
    }

    /// Firmware version fields. Version is chassis-wide, so no context
    /// wrapper is applied.
    #[instrument(skip(self))]
    pub fn version(&self) -> FcSwitchResult<VersionInfo> {
        let output = self.run(commands::VERSION)?;
        Ok(parsers::parse_version(&output.lines))
    }

    /// Returns true if the name server knows `wwn` (port or node name).
    #[instrument(skip(self))]
    pub fn is_wwn_on_fabric(&self, wwn: &str, fid: Option<Fid>) -> FcSwitchResult<bool> {
        let cmd = format!("{} {}", commands::NODE_FIND, wwn);
        let output = self.command(&cmd, fid)?;
        Ok(parsers::parse_node_find(&output.lines, wwn))
    }

    /// Name of the effective zoning configuration, if one is active.
    #[instrument(skip(self))]
    pub fn get_current_active_config_name(
        &self,
        fid: Option<Fid>,
    ) -> FcSwitchResult<Option<String>> {
        let output = self.command(commands::CFG_ACTV_SHOW, fid)?;
        Ok(parsers::parse_active_config(&output.lines))
    }

    /// Every WWN with the aliases it belongs to.
    #[instrument(skip(self))]
    pub fn wwn_alias_map(&self, fid: Option<Fid>) -> FcSwitchResult<WwnAliasMap> {
        let aliases = self.ali_show(commands::MATCH_ALL, fid)?;
        Ok(queries::invert_alias_map(&aliases))
    }

    /// Zones that list `alias` as a member.
    #[instrument(skip(self))]
    pub fn get_alias_zones(&self, alias: &str, fid: Option<Fid>) -> FcSwitchResult<Vec<String>> {
        let zones = self.zone_show(commands::MATCH_ALL, fid)?;
        Ok(queries::zones_containing(&zones, alias))
    }

    /// Aliases containing `wwn`, matched in all-lower or all-upper case.
    #[instrument(skip(self))]
    pub fn get_wwn_aliases(&self, wwn: &str, fid: Option<Fid>) -> FcSwitchResult<Vec<String>> {
        let map = self.wwn_alias_map(fid)?;
        Ok(queries::lookup_wwn_aliases(&map, wwn))
    }

    /// Whether the switch is a chassis-based director, from its `switchType`.
    ///
    /// `None` if `switchShow` carried no `switchType` field.
    #[instrument(skip(self))]
    pub fn is_director(&self, fid: Option<Fid>) -> FcSwitchResult<Option<bool>> {
        let descriptor = self.switch_show(fid)?;
        Ok(descriptor.switch_type().map(commands::is_director_class))
    }
}
