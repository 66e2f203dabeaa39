//! Integration tests for `ticc13x0 packages`

mod common;

use common::TestPlatform;

fn uploaders(report: &serde_json::Value) -> Vec<String> {
    report["packages"]
        .as_object()
        .expect("packages object")
        .iter()
        .filter(|(_, opts)| opts["type"] == "uploader")
        .map(|(name, _)| name.clone())
        .collect()
}

#[test]
fn test_jlink_protocol_keeps_only_jlink() {
    let platform = TestPlatform::new();

    let report = platform.run_json(&[
        "--json", "packages", "--board", "cc1310_launchxl", "--upload-protocol", "jlink",
    ]);

    assert_eq!(uploaders(&report), vec!["tool-jlink"]);
}

#[test]
fn test_board_default_protocol() {
    let platform = TestPlatform::new();

    let report = platform.run_json(&["--json", "packages", "--board", "cc1350_launchxl"]);

    assert_eq!(uploaders(&report), vec!["tool-dslite"]);
}

#[test]
fn test_settings_supply_default_protocol() {
    let platform = TestPlatform::new();
    platform.create_file("config/config.toml", "[upload]\nprotocol = \"xds110\"\n");

    let report = platform.run_json(&["--json", "packages", "--board", "cc1310_launchxl"]);

    assert_eq!(uploaders(&report), vec!["tool-openocd"]);
}

#[test]
fn test_arduino_leaves_registered_framework_optional() {
    let platform = TestPlatform::new();

    let report = platform.run_json(&[
        "--json", "packages", "--board", "cc1310_launchxl", "--framework", "arduino",
    ]);

    assert_eq!(report["packages"]["framework-energiaticc13x0"]["optional"], true);
    assert!(report["packages"].get("framework-energia-ticc13x0").is_none());
    let required: Vec<_> = report["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["toolchain-gccarmnoneeabi"]);
}

#[test]
fn test_upload_target_requires_selected_uploader() {
    let platform = TestPlatform::new();

    let report = platform.run_json(&[
        "--json", "packages", "--board", "cc1310_launchxl", "-u", "jlink", "--target", "upload",
    ]);

    assert_eq!(report["packages"]["tool-jlink"]["optional"], false);
}

#[test]
fn test_without_board_keeps_all_uploaders() {
    let platform = TestPlatform::new();

    let report = platform.run_json(&["--json", "packages"]);

    assert_eq!(uploaders(&report).len(), 3);
}

#[test]
fn test_text_output() {
    let platform = TestPlatform::new();

    let output = platform.run(&["packages", "--board", "cc1310_launchxl", "-u", "jlink"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("tool-jlink"));
    assert!(!stdout.contains("tool-openocd"));
    assert!(stdout.contains("package(s) required"));
}
