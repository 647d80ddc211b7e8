use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_vcmi-balancer"))
        .current_dir(workspace_root())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run vcmi-balancer CLI")
}

fn temp_output_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}", std::process::id(), nanos))
}

fn golden(name: &str) -> String {
    fs::read_to_string(workspace_root().join("tests/balanced").join(name))
        .expect("read balanced golden")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn version_flag_prints_name_and_version() {
    let output = run_cli(&["-v"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "vcmi-balancer 1.0");

    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn missing_paths_is_a_usage_error() {
    let output = run_cli(&[]);
    assert!(!output.status.success());
}

#[test]
fn directory_is_balanced_into_mirrored_tree() {
    let out_dir = temp_output_path("vcmi_balancer_dir");
    let out = out_dir.to_string_lossy().to_string();
    let output = run_cli(&["tests/creatures", "--output", &out]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Done.");

    for name in [
        "halberdier.json",
        "pikeman.json",
        "red_dragon.json",
        "wyvern_monarch.json",
    ] {
        let written = out_dir.join("tests/creatures").join(name);
        assert_eq!(read(&written), golden(name), "{name}");
    }

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn single_file_input_is_written_under_output() {
    let out_dir = temp_output_path("vcmi_balancer_file");
    let out = out_dir.to_string_lossy().to_string();
    let output = run_cli(&["-o", &out, "tests/creatures/pikeman.json"]);
    assert!(output.status.success());

    let written = out_dir.join("tests/creatures/pikeman.json");
    assert_eq!(read(&written), golden("pikeman.json"));
    assert!(!out_dir.join("tests/creatures/halberdier.json").exists());

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn missing_path_is_warned_about_and_skipped() {
    let out_dir = temp_output_path("vcmi_balancer_missing");
    let out = out_dir.to_string_lossy().to_string();
    let output = run_cli(&["-o", &out, "tests/no_such_creature.json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Warning: tests/no_such_creature.json is not file nor directory",
            "Done.",
        ]
    );
    assert!(!out_dir.exists());
}

#[test]
fn failing_document_does_not_stop_the_others() {
    let out_dir = temp_output_path("vcmi_balancer_failure");
    let out = out_dir.to_string_lossy().to_string();
    let output = run_cli(&[
        "-o",
        &out,
        "tests/creatures_invalid/missing_level.json",
        "tests/creatures/halberdier.json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Error balancing tests/creatures_invalid/missing_level.json: FieldNotFound"
    ));
    assert!(!out_dir.join("tests/creatures_invalid/missing_level.json").exists());
    assert_eq!(
        read(&out_dir.join("tests/creatures/halberdier.json")),
        golden("halberdier.json")
    );

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn json_flag_reports_each_document() {
    let out_dir = temp_output_path("vcmi_balancer_json");
    let out = out_dir.to_string_lossy().to_string();
    let output = run_cli(&[
        "--json",
        "-o",
        &out,
        "tests/creatures_invalid",
        "tests/creatures/red_dragon.json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let entries = json.as_array().expect("array of documents");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["path"], "tests/creatures_invalid/impenetrable.json");
    assert!(entries[0]["error"].as_str().unwrap().starts_with("DegenerateModel"));
    assert_eq!(entries[1]["path"], "tests/creatures_invalid/missing_level.json");
    assert!(entries[1]["error"].as_str().unwrap().starts_with("FieldNotFound"));

    let dragon = &entries[2];
    assert_eq!(dragon["path"], "tests/creatures/red_dragon.json");
    assert_eq!(dragon["report"]["fight_value"], 3958);
    assert_eq!(dragon["report"]["ai_value"], 4914);
    assert_eq!(dragon["report"]["quantity"]["min"], 3);
    assert!(Path::new(dragon["output"].as_str().unwrap()).is_file());

    let _ = fs::remove_dir_all(&out_dir);
}
