use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(parts: &[&str]) -> PathBuf {
    let mut p = repo_root().join("fixtures");
    for part in parts {
        p = p.join(part);
    }
    assert!(p.exists(), "fixture missing: {}", p.display());
    p
}

fn trefoil() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("trefoil"));
    cmd.current_dir(repo_root());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn cli_scores_answers() {
    let answers = fixture(&["answers", "mixed.json"]);
    let out = stdout_of(trefoil().args(["score", answers.to_string_lossy().as_ref()]));
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");

    assert_eq!(value["weakestArea"]["areaId"], "lifestyle-exit");
    assert_eq!(value["weakestArea"]["score"], 4);
    assert_eq!(value["overallHealth"]["totalScore"], 83);
    assert_eq!(value["overallHealth"]["percentage"], 61);
    assert_eq!(value["overallHealth"]["statusCounts"]["low"], 1);
    assert_eq!(value["overallHealth"]["statusCounts"]["medium"], 5);
    assert_eq!(value["overallHealth"]["statusCounts"]["high"], 3);
    assert_eq!(value["areaResults"].as_array().map(Vec::len), Some(9));
}

#[test]
fn cli_renders_svg_from_answers() {
    let answers = fixture(&["answers", "mixed.json"]);
    let svg = stdout_of(trefoil().args([
        "render",
        "--id",
        "report 1",
        answers.to_string_lossy().as_ref(),
    ]));
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    assert_eq!(doc.root_element().attribute("id"), Some("report-1"));

    let fill_of = |area: &str| {
        doc.descendants()
            .find(|n| {
                n.attribute("class") == Some("segment") && n.attribute("data-area") == Some(area)
            })
            .and_then(|n| n.attribute("fill"))
            .map(str::to_string)
    };
    assert_eq!(fill_of("lifestyle-exit").as_deref(), Some("#E53935"));
    assert_eq!(fill_of("drive-change").as_deref(), Some("#FFB300"));
    assert_eq!(fill_of("financial-control").as_deref(), Some("#43A047"));
}

#[test]
fn cli_renders_statuses_with_config_overrides() {
    let statuses = fixture(&["statuses", "complete.json"]);
    let config = fixture(&["config", "spread.json"]);
    let svg = stdout_of(trefoil().args([
        "render",
        "--input-kind",
        "statuses",
        "--config",
        config.to_string_lossy().as_ref(),
        statuses.to_string_lossy().as_ref(),
    ]));
    assert!(svg.contains(r#"width="1200""#));
    assert!(svg.contains("#F5F5F5"));
    assert!(!svg.contains(r#"class="overlap""#));
}

#[test]
fn cli_reports_every_invalid_status_entry() {
    let statuses = fixture(&["statuses", "invalid.json"]);
    let assert = trefoil()
        .args([
            "render",
            "--input-kind",
            "statuses",
            statuses.to_string_lossy().as_ref(),
        ])
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("People Management"), "{stderr}");
    assert!(stderr.contains("Selling & Salespeople: purple"), "{stderr}");
    assert!(stderr.contains("Customer Delight"), "{stderr}");
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("mixed.json");
    fs::copy(fixture(&["answers", "mixed.json"]), &input).expect("copy fixture");

    trefoil()
        .args(["render", "--format", "png", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let bytes = fs::read(input.with_extension("png")).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
}

#[test]
fn cli_renders_jpg_to_explicit_out() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("diagram.jpg");
    let answers = fixture(&["answers", "mixed.json"]);

    trefoil()
        .args([
            "render",
            "--format",
            "jpg",
            "--scale",
            "0.5",
            "--out",
            out.to_string_lossy().as_ref(),
            answers.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read jpg");
    assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]), "output is not a JPG");
}

#[test]
fn cli_prints_data_uri() {
    let answers = fixture(&["answers", "mixed.json"]);
    let out = stdout_of(trefoil().args([
        "render",
        "--format",
        "data-uri",
        answers.to_string_lossy().as_ref(),
    ]));
    assert!(out.trim_end().starts_with("data:image/svg+xml;base64,PHN2Zy"));
}

#[test]
fn cli_reads_stdin_for_layout() {
    let statuses = fs::read(fixture(&["statuses", "complete.json"])).unwrap();
    let mut cmd = assert_cmd::Command::from_std(trefoil());
    let output = cmd
        .args(["layout", "--input-kind", "statuses", "-"])
        .write_stdin(statuses)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["overlaps"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["segments"][0]["area"], "financial-control");
}

#[test]
fn cli_lists_the_catalogue() {
    let out = stdout_of(trefoil().arg("catalogue"));
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["version"], "diagnostic-v3.0");
    assert_eq!(value["maxScore"], 15);
    assert_eq!(value["questions"].as_array().map(Vec::len), Some(27));
    assert_eq!(value["areas"].as_array().map(Vec::len), Some(9));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    trefoil().args(["render", "--frobnicate"]).assert().failure().code(2);
    trefoil().args(["render", "--format", "gif"]).assert().failure().code(2);
    trefoil().args(["render", "--scale", "-1"]).assert().failure().code(2);
}

#[test]
fn cli_scores_answers_with_non_rating_values() {
    let mut cmd = assert_cmd::Command::from_std(trefoil());
    let output = cmd
        .args(["score", "-"])
        .write_stdin(r#"{"name": "Ada", "fc-1": null, "fc-2": "4", "fc-3": 5, "gs-1": 4.0}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output).unwrap()).expect("json");
    assert_eq!(value["overallHealth"]["totalScore"], 5);
    assert_eq!(value["areaResults"][0]["score"], 5);
}

#[test]
fn cli_survives_a_closed_stdout() {
    let answers = fixture(&["answers", "mixed.json"]);
    let mut child = trefoil()
        .args(["render", answers.to_string_lossy().as_ref()])
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("spawn");
    drop(child.stdout.take());
    let output = child.wait_with_output().expect("wait");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_ne!(output.status.code(), Some(101), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
