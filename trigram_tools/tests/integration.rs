use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn json_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    write!(f, "{}", contents).unwrap();
    f
}

fn trigram_tools() -> Command {
    let mut cmd = Command::cargo_bin("trigram_tools").unwrap();
    cmd.env_remove("TRIGRAM_INPUT").env_remove("TRIGRAM_FORMAT");
    cmd
}

#[test]
fn keys_collapses_shared_tokens() {
    let f = json_file(r#"{"a,b": 1, "b,c": 2}"#);
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .success()
        .stdout("{\"a\", \"b\", \"c\"}\n");
}

#[test]
fn keys_keeps_empty_tokens() {
    let f = json_file(r#"{"a,,b": 1}"#);
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .success()
        .stdout("{\"\", \"a\", \"b\"}\n");

    let f = json_file(r#"{"": 1}"#);
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .success()
        .stdout("{\"\"}\n");
}

#[test]
fn keys_on_empty_object_prints_empty_set() {
    let f = json_file("{}");
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn keys_json_format() {
    let f = json_file(r#"{"KeyT,KeyH,KeyE": [120], "KeyH,KeyE,Space": [98, 101]}"#);
    trigram_tools()
        .arg("keys")
        .arg("--format")
        .arg("json")
        .arg(f.path())
        .assert()
        .success()
        .stdout("[\"KeyE\",\"KeyH\",\"KeyT\",\"Space\"]\n");
}

#[test]
fn keys_is_repeatable() {
    let f = json_file(r#"{"x,y,z": [], "z,y,x": [], "y,y,y": []}"#);
    let first = trigram_tools().arg("keys").arg(f.path()).output().unwrap();
    let second = trigram_tools().arg("keys").arg(f.path()).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_file_fails_without_output() {
    let dir = tempdir().unwrap();
    trigram_tools()
        .arg("keys")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn truncated_json_fails_without_output() {
    let f = json_file(r#"{"a,b": 1, "b,c"#);
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("as JSON"));
}

#[test]
fn non_object_root_fails() {
    let f = json_file("[\"a,b\"]");
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn default_input_is_read_from_working_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/0.json"), r#"{"KeyA,KeyS": [1]}"#).unwrap();
    trigram_tools()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("{\"KeyA\", \"KeyS\"}\n");
}

#[test]
fn config_file_selects_input_and_format() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("session.json");
    fs::write(&input, r#"{"b,a": 1}"#).unwrap();
    let cfg = dir.path().join("trigram_tools.toml");
    fs::write(
        &cfg,
        format!("input = {:?}\nformat = \"json\"\n", input.display().to_string()),
    )
    .unwrap();

    trigram_tools()
        .arg("--config")
        .arg(&cfg)
        .arg("keys")
        .assert()
        .success()
        .stdout("[\"a\",\"b\"]\n");
}

#[test]
fn environment_overrides_default_input() {
    let f = json_file(r#"{"q,w,e": 1}"#);
    let dir = tempdir().unwrap();
    Command::cargo_bin("trigram_tools")
        .unwrap()
        .current_dir(dir.path())
        .env("TRIGRAM_INPUT", f.path())
        .env_remove("TRIGRAM_FORMAT")
        .assert()
        .success()
        .stdout("{\"e\", \"q\", \"w\"}\n");
}

#[test]
fn positions_flags_unknown_codes() {
    let f = json_file(r#"{"KeyA,Space,Bogus": [120]}"#);
    trigram_tools()
        .arg("positions")
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("KeyA\t2,1"))
        .stdout(predicate::str::contains("Space\t4,3"))
        .stdout(predicate::str::contains("Bogus\tunknown"));
}

#[test]
fn timings_summarises_all_durations() {
    let f = json_file(r#"{"KeyA,KeyS,KeyD": [100, 200], "KeyS,KeyD,KeyF": [300]}"#);
    trigram_tools()
        .arg("timings")
        .arg(f.path())
        .assert()
        .success()
        .stdout("mean: 200  sd: 100  n: 3  wpm: 120\n");
}

#[test]
fn non_utf8_input_fails_without_output() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"{\"a,\xff\": 1}").unwrap();
    trigram_tools()
        .arg("keys")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("as JSON"));
}

#[test]
fn format_flag_ignores_case() {
    let f = json_file(r#"{"b,a": 1}"#);
    trigram_tools()
        .arg("keys")
        .arg("--format")
        .arg("JSON")
        .arg(f.path())
        .assert()
        .success()
        .stdout("[\"a\",\"b\"]\n");
}

#[test]
fn broken_working_directory_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("trigram_tools.toml"), "input = [\n").unwrap();
    let f = json_file(r#"{"a,b": 1}"#);
    trigram_tools()
        .current_dir(dir.path())
        .arg("keys")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn patterns_prints_one_line_per_category() {
    let f = json_file(
        r#"{"KeyA,KeyS,KeyD": [100, 200, 300], "KeyA,KeyA,KeyS": [150], "Space,KeyA,KeyS": [90]}"#,
    );
    let line = |label: &str, summary: &str| format!("{:<16}{}\n", label, summary);
    trigram_tools()
        .arg("patterns")
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(line(
            "Overall:",
            "mean: 187  sd: 85  n: 4  wpm: 128",
        )))
        .stdout(predicate::str::contains(line(
            "Sfr:",
            "mean: 150  sd: 0  n: 1  wpm: 160",
        )))
        .stdout(predicate::str::contains(line(
            "Onehand:",
            "mean: 200  sd: 100  n: 3  wpm: 120",
        )))
        .stdout(predicate::str::contains(line(
            "Alternate:",
            "mean: 0  sd: 0  n: 0  wpm: -",
        )))
        .stdout(predicate::str::contains("BadRedirectSfs:"));
}

#[test]
fn closed_stdout_does_not_panic() {
    use std::process::Stdio;

    let f = json_file(r#"{"a,b": 1, "b,c": 2}"#);
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("trigram_tools"))
        .arg("keys")
        .arg(f.path())
        .env_remove("TRIGRAM_INPUT")
        .env_remove("TRIGRAM_FORMAT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
}
