// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;

#[test]
fn help_lists_every_top_level_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_mappings"))
        .arg("--help")
        .output()
        .expect("run help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8 help");
    for command in ["validate", "convert", "index", "version"] {
        assert!(text.contains(command), "help is missing {command}");
    }
}

#[test]
fn version_output_contains_crate_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_mappings"))
        .args(["--json", "version"])
        .output()
        .expect("run version");
    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("version payload json");
    assert_eq!(payload["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn unknown_flag_exits_with_usage_code() {
    let output = Command::new(env!("CARGO_BIN_EXE_mappings"))
        .args(["version", "--unknown-flag"])
        .output()
        .expect("run with bad flag");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_servers_dir_is_a_dependency_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_mappings"))
        .args([
            "validate",
            "media",
            "--servers-dir",
            "/nonexistent/servers",
        ])
        .output()
        .expect("run validate media");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn quiet_suppresses_success_payload() {
    let output = Command::new(env!("CARGO_BIN_EXE_mappings"))
        .args(["--quiet", "version"])
        .output()
        .expect("run quiet version");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
