use std::{fs, path::Path, process::Command};

use ndarray::Array2;

fn optostat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_optostat"))
}

fn write_recording(dir: &Path, name: &str, rows: usize) {
    let data = Array2::<f64>::from_shape_fn((rows, 4), |(r, c)| {
        if c % 2 == 0 { r as f64 } else { -(r as f64) }
    });
    ndarray_npy::write_npy(dir.join(name), &data).unwrap();
}

#[test]
fn summarize_writes_table_and_reports_progress() {
    let input = tempfile::tempdir().unwrap();
    for i in 0..3 {
        write_recording(input.path(), &format!("P{i:02}_OptoForce.npy"), 7);
    }
    write_recording(input.path(), "P00_Encoder.npy", 7);
    let output = input.path().join("summary.csv");

    let result = optostat()
        .args(["summarize", "--sort-by-name", "--progress-every", "2"])
        .arg("--input-dir")
        .arg(input.path())
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "2 of 3 ...");
    assert_eq!(lines[3], "3 of 3 ...");
    assert!(lines[4].starts_with("Done."));

    let csv = fs::read_to_string(&output).unwrap();
    let rows = csv.lines().collect::<Vec<_>>();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with(",Fx_min,"));
    // Fx row is [1, -1, 1, -1]; Tz row is [6, -6, 6, -6]
    assert!(rows[1].starts_with("0,-1.0,1.0,1.0,1.0,0.0,-2.0,2.0,2.0,2.0,0.0,-6.0,6.0,6.0,6.0,0.0,"));
    assert!(rows[3].starts_with("2,"));
}

#[test]
fn summarize_aborts_on_missing_rows() {
    let input = tempfile::tempdir().unwrap();
    write_recording(input.path(), "P00_OptoForce.npy", 5);
    let output = input.path().join("summary.csv");

    let result = optostat()
        .arg("summarize")
        .arg("--input-dir")
        .arg(input.path())
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("structural mismatch"));
    assert!(stderr.contains("P00_OptoForce.npy"));
    assert!(!output.exists());
}

#[test]
fn summarize_requires_input_directory() {
    let result = optostat()
        .args(["summarize", "--output", "summary.csv"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr).unwrap().contains("No input directory"));
}

#[test]
fn show_config_prints_effective_configuration() {
    let result = optostat()
        .args([
            "show-config",
            "--input-dir",
            "data",
            "--output",
            "out.csv",
            "--channels",
            "fz,tz",
            "--skip-invalid",
        ])
        .output()
        .unwrap();
    assert!(result.status.success());

    let config: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(config["input_directory"], "data");
    assert_eq!(config["channel_map"][0]["channel"], "Fz");
    assert_eq!(config["channel_map"][1]["row"], 6);
    assert_eq!(config["failure_policy"], "skip");
    assert_eq!(config["progress_every"], 10);
}
