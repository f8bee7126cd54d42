//! Canned FOS command output
//!
//! Captured-style text for a small two-switch fabric: one director
//! (`core01`, FID 128) and one edge switch. Line layout follows what FOS
//! prints, tabs included.

/// `aliShow *`
pub const ALI_SHOW_ALL: &str = "\
 alias:\tarray01_spa0
\t\t50:06:01:60:3C:E0:1B:7F
 alias:\tarray01_spb0
\t\t50:06:01:68:3C:E0:1B:7F
 alias:\tsrv01_hba0
\t\t10:00:00:00:c9:12:34:56
 alias:\tsrv01_hba1
\t\t10:00:00:00:c9:12:34:57
 alias:\tsrv01_all
\t\t10:00:00:00:c9:12:34:56; 10:00:00:00:c9:12:34:57;
\t\t10:00:00:00:c9:12:34:56
 alias:\tsrv02_hba0
\t\t10:00:00:00:C9:AB:CD:EF
";

/// `aliShow nothere*`
pub const ALI_SHOW_NO_MATCH: &str = "\
Alias \"nothere*\" does not exist.
";

/// `zoneShow *`
pub const ZONE_SHOW_ALL: &str = "\
 zone:\tz_srv01_array01
\t\tsrv01_hba0; srv01_hba1; array01_spa0;
\t\tarray01_spb0
 zone:\tz_srv02_array01
\t\tsrv02_hba0; array01_spa0; array01_spb0
 zone:\tz_legacy
\t\t10:00:00:00:c9:99:99:99; array01_spa0
";

/// `zoneShow srv01*`: defined zones only
pub const ZONE_SHOW_DEFINED: &str = "\
 zone:\tz_srv01_array01
\t\tsrv01_hba0; srv01_hba1; array01_spa0;
\t\tarray01_spb0
";

/// `zoneShow nothere*`
pub const ZONE_SHOW_NO_MATCH: &str = "\
Zone \"nothere*\" Does Not Exist.
";

/// `fabricShow`
pub const FABRIC_SHOW: &str = "\
Switch ID   Worldwide Name           Enet IP Addr    FC IP Addr      Name
-------------------------------------------------------------------------
  1: fffc01 10:00:00:05:1e:35:8a:01 10.20.30.1      0.0.0.0        >\"core01\"
  3: fffc03 10:00:00:05:1e:35:8a:03 10.20.30.3      0.0.0.0         \"edge03\"

The Fabric has 2 switches
";

/// `fabricShow -membership`
pub const FABRIC_SHOW_MEMBERSHIP: &str = "\
Switch ID   Name         ISL  Num   Firmware
------------------------------------------
  1: core01       4    48    v8.2.1c
  3: edge03       2    24    v8.2.1c
";

/// `fabricShow -chassis`
pub const FABRIC_SHOW_CHASSIS: &str = "\
Switch ID   Name      Chassis WWN                Chassis Name
-------------------------------------------------------------
  1: core01    10:00:00:05:1e:35:8a:00    dcx01
  3: edge03    10:00:00:05:1e:35:8a:10    g620_03
";

/// `switchShow` on the director
pub const SWITCH_SHOW: &str = "\
switchName:\tcore01
switchType:\t77.2
switchState:\tOnline
switchMode:\tNative
switchRole:\tPrincipal
switchDomain:\t1
switchId:\tfffc01
switchWwn:\t10:00:00:05:1e:35:8a:01
zoning:\t\tON (prod_cfg)
switchBeacon:\tOFF
FC Router:\tOFF
Allow XISL Use:\tOFF
LS Attributes:\t[FID: 128, Base Switch: No, Default Switch: Yes, Address Mode 0]

Index Slot Port Address Media Speed State     Proto
===================================================
   0    1    0   010000   id    N8   Online      FC  F-Port  10:00:00:00:c9:12:34:56
   1    1    1   010100   id    N8   Online      FC  F-Port  50:06:01:60:3c:e0:1b:7f
   2    1    2   010200   --    N8   No_Module   FC
";

/// `switchShow` on a switch that printed no port table
pub const SWITCH_SHOW_NO_PORTS: &str = "\
switchName:\tedge03
switchType:\t162.0
switchState:\tOnline
";

/// `version`
pub const VERSION: &str = "\
Kernel:     2.6.34.6
Fabric OS:  v8.2.1c
Made on:    Fri Jul 12 21:08:36 2019
Flash:      Wed Aug 28 16:36:50 2019
BootProm:   1.0.11
";

/// `nodefind 10:00:00:00:c9:12:34:56`
pub const NODEFIND_FOUND: &str = "\
Local:
 Type Pid    COS     PortName                NodeName                 SCR
 N    010000;      3;10:00:00:00:C9:12:34:56;20:00:00:00:c9:12:34:56; 0x00000003
    Fabric Port Name: 20:00:00:05:1e:35:8a:01
    Permanent Port Name: 10:00:00:00:c9:12:34:56
    Device type: Physical Initiator
    Port Index: 0
    Aliases: srv01_hba0 srv01_all
";

/// `nodefind` for an absent WWN
pub const NODEFIND_NOT_FOUND: &str = "\
No device found
";

/// `cfgactvshow`
pub const CFG_ACTV_SHOW: &str = "\
Effective configuration:
 cfg:\tprod_cfg\t
 zone:\tz_srv01_array01
\t\t10:00:00:00:c9:12:34:56
\t\t50:06:01:60:3c:e0:1b:7f
";

/// `cfgactvshow` with zoning disabled
pub const CFG_ACTV_SHOW_NONE: &str = "\
Effective configuration:
 no configuration in effect
";
