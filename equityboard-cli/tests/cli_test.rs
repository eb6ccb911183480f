//! Runs the `equityboard` binary against temporary input files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use equityboard_core::data::{reference, DashboardInputs};
use equityboard_core::domain::RawPoint;

fn equityboard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_equityboard"))
        .args(args)
        .output()
        .expect("failed to run equityboard")
}

fn write_inputs(dir: &Path, points: Vec<RawPoint>) -> String {
    let inputs = DashboardInputs {
        points,
        monthly_returns: reference::monthly_returns(),
        trades: reference::trades(),
        statistics: reference::statistics(),
    };
    let path = dir.join("inputs.json");
    fs::write(&path, serde_json::to_string(&inputs).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn render_synthetic_prints_json() {
    let out = equityboard(&["render", "--seed", "7", "--points", "30"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let panels = json["panels"].as_array().unwrap();
    assert_eq!(panels.len(), 5);
    assert_eq!(panels[0]["id"], "equity");
    assert_eq!(panels[0]["body"]["x_axis"]["domain"]["max"], 29);
}

#[test]
fn render_is_deterministic_per_seed() {
    let a = equityboard(&["render", "--seed", "11"]);
    let b = equityboard(&["render", "--seed", "11"]);
    let c = equityboard(&["render", "--seed", "12"]);
    assert_eq!(a.stdout, b.stdout);
    assert_ne!(a.stdout, c.stdout);
}

#[test]
fn render_applies_config_palette() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("board.toml");
    fs::write(&config, "[palette]\nloss_bar = \"#ff0000\"\n[source]\npoints = 10\n").unwrap();

    let out = equityboard(&["render", "--config", config.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["style"]["palette"]["loss_bar"], "#ff0000");
}

#[test]
fn render_from_csv_points() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("equity.csv");
    fs::write(&csv, "time,equity,trade_delta\n0,10000,50\n1,10050,-30\n").unwrap();

    let out = equityboard(&["render", "--equity-csv", csv.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let bars = &json["panels"][0]["body"]["series"][1]["points"];
    assert_eq!(bars[0]["label"], "+50.00");
    assert_eq!(bars[1]["label"], "-30.00");
}

#[test]
fn check_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_inputs(
        dir.path(),
        vec![RawPoint::new(0, 10000.0, 50.0), RawPoint::new(1, 10050.0, -30.0)],
    );

    let out = equityboard(&["check", "--input", &input]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "ok: 2 points, 6 months, 5 trades, 5 panels"
    );
}

#[test]
fn check_rejects_duplicate_time() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_inputs(
        dir.path(),
        vec![RawPoint::new(0, 100.0, 0.0), RawPoint::new(0, 101.0, 0.0)],
    );

    let out = equityboard(&["check", "--input", &input]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("duplicate time index"));
}

#[test]
fn check_rejects_partial_drawdown_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_inputs(dir.path(), vec![RawPoint::new(0, 1.0, 0.0)]);
    let csv = dir.path().join("equity.csv");
    fs::write(&csv, "time,equity,trade_delta,drawdown\n0,100,0,-1\n1,101,0,\n").unwrap();

    let out = equityboard(&["check", "--input", &input, "--equity-csv", csv.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("drawdown"));
}
