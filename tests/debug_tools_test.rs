//! Integration tests for `ticc13x0 debug-tools`

mod common;

use common::TestPlatform;
use serde_json::json;

#[test]
fn test_debug_tools_descriptor() {
    let platform = TestPlatform::new();

    let tools = platform.run_json(&["debug-tools", "cc1310_launchxl"]);

    let executable = if cfg!(windows) {
        "JLinkGDBServerCL.exe"
    } else {
        "JLinkGDBServer"
    };
    assert_eq!(
        tools["jlink"],
        json!({
            "server": {
                "package": "tool-jlink",
                "executable": executable,
                "arguments": [
                    "-singlerun", "-if", "JTAG", "-select", "USB",
                    "-device", "CC1310F128", "-port", "2331"
                ]
            },
            "onboard": false
        })
    );
    assert_eq!(
        tools["xds110"]["server"]["arguments"],
        json!([
            "-s", "$PACKAGE_DIR/scripts",
            "-f", "interface/xds110.cfg",
            "-c", "set CHIPNAME cc13x0",
            "-f", "target/ti_cc13x0.cfg"
        ])
    );
}

#[test]
fn test_debug_tools_keeps_declared_entries() {
    let platform = TestPlatform::new();
    platform.add_board(
        "custom",
        r#"{
  "name": "Custom",
  "upload": {"protocols": ["xds110"]},
  "debug": {
    "tools": {
      "xds110": {"server": {"package": "tool-openocd", "executable": "bin/openocd", "arguments": ["-f", "board.cfg"]}, "onboard": true}
    }
  }
}"#,
    );

    let tools = platform.run_json(&["debug-tools", "custom"]);

    assert_eq!(tools["xds110"]["server"]["arguments"], json!(["-f", "board.cfg"]));
}

#[test]
fn test_debug_tools_missing_chipname() {
    let platform = TestPlatform::new();
    platform.add_board("nochip", r#"{"upload": {"protocols": ["xds110"]}}"#);

    let output = platform.run(&["debug-tools", "nochip"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OpenOCD chip name"));
}
