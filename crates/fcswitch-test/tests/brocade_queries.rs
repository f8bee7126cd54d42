//! End-to-end queries against a scripted Brocade switch
//!
//! Each test scripts the exact CLI text the client must send and checks the
//! parsed result.

use std::collections::BTreeSet;

use fcswitch_brocade::{is_director_class, BrocadeSwitch};
use fcswitch_common::{FcSwitchError, Fid};
use fcswitch_test::{fixtures, ScriptedRunner};
use pretty_assertions::assert_eq;

fn members(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_ali_show_all() {
    let runner = ScriptedRunner::new().with_response("aliShow *", fixtures::ALI_SHOW_ALL);
    let switch = BrocadeSwitch::new(&runner);

    let aliases = switch.ali_show("*", None).unwrap();
    assert_eq!(
        aliases.keys().collect::<Vec<_>>(),
        vec![
            "array01_spa0",
            "array01_spb0",
            "srv01_hba0",
            "srv01_hba1",
            "srv01_all",
            "srv02_hba0"
        ]
    );
    assert_eq!(
        aliases["srv01_all"],
        members(&["10:00:00:00:c9:12:34:56", "10:00:00:00:c9:12:34:57"])
    );
    assert_eq!(aliases["srv02_hba0"], members(&["10:00:00:00:C9:AB:CD:EF"]));
    assert_eq!(runner.executed(), vec!["aliShow *"]);
}

#[test]
fn test_no_match_listings_are_empty() {
    let runner = ScriptedRunner::new()
        .with_response("aliShow nothere*", fixtures::ALI_SHOW_NO_MATCH)
        .with_response("zoneShow nothere*", fixtures::ZONE_SHOW_NO_MATCH);
    let switch = BrocadeSwitch::new(&runner);

    assert!(switch.ali_show("nothere*", None).unwrap().is_empty());
    assert!(switch.zone_show("nothere*", None).unwrap().is_empty());
}

#[test]
fn test_empty_output_is_tolerated() {
    let runner = ScriptedRunner::new()
        .with_response("aliShow *", "")
        .with_response("zoneShow *", "")
        .with_response("fabricShow", "")
        .with_response("switchShow", "")
        .with_response("switchName", "")
        .with_response("version", "")
        .with_response("cfgactvshow", "")
        .with_response("nodefind 10:00:00:00:c9:12:34:56", "");
    let switch = BrocadeSwitch::new(&runner);

    assert!(switch.ali_show("*", None).unwrap().is_empty());
    assert!(switch.zone_show("*", None).unwrap().is_empty());
    assert!(switch.fabric_show(false, false, None).unwrap().is_empty());
    let descriptor = switch.switch_show(None).unwrap();
    assert!(descriptor.fields.is_empty());
    assert!(descriptor.ports.is_none());
    assert_eq!(switch.switch_name(None).unwrap(), None);
    assert!(switch.version().unwrap().is_empty());
    assert_eq!(switch.get_current_active_config_name(None).unwrap(), None);
    assert!(!switch
        .is_wwn_on_fabric("10:00:00:00:c9:12:34:56", None)
        .unwrap());
}

#[test]
fn test_zone_show_in_fabric_context() {
    let runner = ScriptedRunner::new().with_response(
        "fosexec --fid 128 -cmd \"zoneShow srv01*\" ",
        fixtures::ZONE_SHOW_DEFINED,
    );
    let switch = BrocadeSwitch::new(&runner);

    let zones = switch.zone_show("srv01*", Fid::new(128)).unwrap();
    assert_eq!(
        zones["z_srv01_array01"],
        members(&["srv01_hba0", "srv01_hba1", "array01_spa0", "array01_spb0"])
    );
}

#[test]
fn test_fabric_show_variants() {
    let runner = ScriptedRunner::new()
        .with_response("fabricShow", fixtures::FABRIC_SHOW)
        .with_response("fabricShow -membership", fixtures::FABRIC_SHOW_MEMBERSHIP)
        .with_response("fabricShow -chassis", fixtures::FABRIC_SHOW_CHASSIS);
    let switch = BrocadeSwitch::new(&runner);

    let plain = switch.fabric_show(false, false, None).unwrap();
    assert_eq!(plain.keys().collect::<Vec<_>>(), vec!["1", "3"]);
    assert_eq!(plain["3"][1], "10:00:00:05:1e:35:8a:03");

    let membership = switch.fabric_show(true, false, None).unwrap();
    assert_eq!(membership["1"], vec!["core01", "4", "48", "v8.2.1c"]);

    let chassis = switch.fabric_show(false, true, None).unwrap();
    assert_eq!(chassis["3"], vec!["edge03", "10:00:00:05:1e:35:8a:10", "g620_03"]);

    let both = switch.fabric_show(true, true, None).unwrap();
    assert_eq!(both, plain);

    assert_eq!(
        runner.executed(),
        vec![
            "fabricShow",
            "fabricShow -membership",
            "fabricShow -chassis",
            "fabricShow"
        ]
    );
}

#[test]
fn test_switch_show_director() {
    let runner = ScriptedRunner::new().with_response("switchShow", fixtures::SWITCH_SHOW);
    let switch = BrocadeSwitch::new(&runner);

    let descriptor = switch.switch_show(None).unwrap();
    assert_eq!(descriptor.field("switchName"), Some("core01"));
    assert_eq!(descriptor.field("zoning"), Some("ON (prod_cfg)"));
    assert_eq!(
        descriptor.field("LS Attributes"),
        Some("[FID: 128, Base Switch: No, Default Switch: Yes, Address Mode 0]")
    );
    let ports = descriptor.ports.as_ref().unwrap();
    assert_eq!(ports.len(), 3);
    assert!(ports[0].starts_with("0    1    0   010000"));
    assert!(ports[2].ends_with("No_Module   FC"));

    assert!(is_director_class(descriptor.switch_type().unwrap()));
    assert_eq!(switch.is_director(None).unwrap(), Some(true));
}

#[test]
fn test_switch_show_without_ports() {
    let runner = ScriptedRunner::new().with_response("switchShow", fixtures::SWITCH_SHOW_NO_PORTS);
    let switch = BrocadeSwitch::new(&runner);

    let descriptor = switch.switch_show(None).unwrap();
    assert!(descriptor.ports.is_none());
    assert_eq!(switch.is_director(None).unwrap(), Some(false));
}

#[test]
fn test_switch_name_and_version() {
    let runner = ScriptedRunner::new()
        .with_response("switchName", "core01\n")
        .with_response("version", fixtures::VERSION);
    let switch = BrocadeSwitch::new(&runner);

    assert_eq!(switch.switch_name(None).unwrap().as_deref(), Some("core01"));
    let version = switch.version().unwrap();
    assert_eq!(version["Fabric OS"], "v8.2.1c");
    assert_eq!(version["Kernel"], "2.6.34.6");
    assert_eq!(version.len(), 5);
}

#[test]
fn test_is_wwn_on_fabric() {
    let runner = ScriptedRunner::new()
        .with_response("nodefind 10:00:00:00:c9:12:34:56", fixtures::NODEFIND_FOUND)
        .with_response("nodefind 10:00:00:00:C9:12:34:56", fixtures::NODEFIND_FOUND)
        .with_response("nodefind 10:00:00:00:c9:00:00:00", fixtures::NODEFIND_NOT_FOUND);
    let switch = BrocadeSwitch::new(&runner);

    assert!(switch.is_wwn_on_fabric("10:00:00:00:c9:12:34:56", None).unwrap());
    assert!(switch.is_wwn_on_fabric("10:00:00:00:C9:12:34:56", None).unwrap());
    assert!(!switch.is_wwn_on_fabric("10:00:00:00:c9:00:00:00", None).unwrap());
}

#[test]
fn test_active_config_name() {
    let active = ScriptedRunner::new().with_response("cfgactvshow", fixtures::CFG_ACTV_SHOW);
    assert_eq!(
        BrocadeSwitch::new(&active)
            .get_current_active_config_name(None)
            .unwrap()
            .as_deref(),
        Some("prod_cfg")
    );

    let none = ScriptedRunner::new().with_response("cfgactvshow", fixtures::CFG_ACTV_SHOW_NONE);
    assert_eq!(
        BrocadeSwitch::new(&none)
            .get_current_active_config_name(None)
            .unwrap(),
        None
    );
}

#[test]
fn test_wwn_alias_map_matches_alias_listing() {
    let runner = ScriptedRunner::new().with_response("aliShow *", fixtures::ALI_SHOW_ALL);
    let switch = BrocadeSwitch::new(&runner);

    let aliases = switch.ali_show("*", None).unwrap();
    let map = switch.wwn_alias_map(None).unwrap();

    for (alias, wwns) in &aliases {
        for wwn in wwns {
            assert!(map[wwn].contains(alias), "{} missing for {}", alias, wwn);
        }
    }
    for (wwn, names) in &map {
        for name in names {
            assert!(aliases[name].contains(wwn));
        }
    }
    assert_eq!(
        map["10:00:00:00:c9:12:34:56"],
        vec!["srv01_hba0".to_string(), "srv01_all".to_string()]
    );
}

#[test]
fn test_get_wwn_aliases_case_handling() {
    let runner = ScriptedRunner::new().with_response("aliShow *", fixtures::ALI_SHOW_ALL);
    let switch = BrocadeSwitch::new(&runner);

    assert_eq!(
        switch.get_wwn_aliases("50:06:01:60:3c:e0:1b:7f", None).unwrap(),
        vec!["array01_spa0"]
    );
    assert_eq!(
        switch.get_wwn_aliases("50:06:01:60:3C:E0:1B:7F", None).unwrap(),
        vec!["array01_spa0"]
    );
    assert_eq!(
        switch.get_wwn_aliases("10:00:00:00:C9:12:34:57", None).unwrap(),
        vec!["srv01_hba1", "srv01_all"]
    );
    assert!(switch
        .get_wwn_aliases("20:00:00:00:00:00:00:01", None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_get_wwn_aliases_mixed_case_key_is_not_normalised() {
    let runner = ScriptedRunner::new().with_response(
        "aliShow *",
        " alias:\tmixed\n\t\t50:06:01:60:3c:E0:1b:7F\n",
    );
    let switch = BrocadeSwitch::new(&runner);

    assert!(switch
        .get_wwn_aliases("50:06:01:60:3C:E0:1B:7F", None)
        .unwrap()
        .is_empty());
    assert!(switch
        .get_wwn_aliases("50:06:01:60:3c:e0:1b:7f", None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_get_alias_zones() {
    let runner = ScriptedRunner::new().with_response("zoneShow *", fixtures::ZONE_SHOW_ALL);
    let switch = BrocadeSwitch::new(&runner);

    assert_eq!(
        switch.get_alias_zones("array01_spa0", None).unwrap(),
        vec!["z_srv01_array01", "z_srv02_array01", "z_legacy"]
    );
    assert_eq!(
        switch.get_alias_zones("srv02_hba0", None).unwrap(),
        vec!["z_srv02_array01"]
    );
    assert!(switch.get_alias_zones("srv0", None).unwrap().is_empty());
}

#[test]
fn test_transport_failure_is_passed_through() {
    let runner = ScriptedRunner::new().with_failure(
        "fosexec --fid 5 -cmd \"aliShow *\" ",
        "channel closed",
    );
    let switch = BrocadeSwitch::new(&runner).with_default_fid(Fid::new(5));

    match switch.get_wwn_aliases("10:00:00:00:c9:12:34:56", None) {
        Err(FcSwitchError::Transport { command, message }) => {
            assert_eq!(command, "fosexec --fid 5 -cmd \"aliShow *\" ");
            assert_eq!(message, "channel closed");
        }
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[test]
fn test_stderr_lines_do_not_affect_parsing() {
    let runner = ScriptedRunner::new().with_output(
        "switchName",
        "edge03\n",
        "warning: session idle timeout in 60s\n",
    );
    let switch = BrocadeSwitch::new(&runner);

    assert_eq!(switch.switch_name(None).unwrap().as_deref(), Some("edge03"));
}
