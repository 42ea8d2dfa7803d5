use assert_cmd::Command;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn args_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

/// Run the module binary; returns the single JSON object on stdout and the exit code.
fn invoke(content: &str) -> (Value, i32) {
    let f = args_file(content);
    let out = Command::cargo_bin("demo_hello")
        .unwrap()
        .arg(f.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {}", stdout);
    (serde_json::from_str(&stdout).unwrap(), out.status.code().unwrap())
}

#[test]
fn greets_default_name() {
    assert_eq!(invoke("{}"), (json!({"changed": false, "fact": "Hello John Doe!"}), 0));
}

#[test]
fn greets_given_name() {
    assert_eq!(
        invoke(r#"{"name": "Linus Torvalds"}"#),
        (json!({"changed": false, "fact": "Hello Linus Torvalds!"}), 0)
    );
}

#[test]
fn empty_name_is_not_replaced() {
    assert_eq!(invoke(r#"{"name": ""}"#), (json!({"changed": false, "fact": "Hello !"}), 0));
}

#[test]
fn check_mode_matches_normal_run() {
    let normal = invoke(r#"{"name": "Linus Torvalds"}"#);
    let dry = invoke(
        r#"{"name": "Linus Torvalds", "_ansible_check_mode": true, "_ansible_diff": false}"#,
    );
    assert_eq!(normal, dry);
}

#[test]
fn yaml_args_are_accepted() {
    assert_eq!(
        invoke("name: Ada\n"),
        (json!({"changed": false, "fact": "Hello Ada!"}), 0)
    );
}

#[test]
fn unsupported_parameter_fails() {
    let (out, code) = invoke(r#"{"nmae": "typo"}"#);
    assert_eq!(code, 1);
    assert_eq!(
        out,
        json!({
            "failed": true,
            "msg": "Unsupported parameters for (demo_hello) module: nmae. Supported parameters include: name."
        })
    );
}

#[test]
fn list_name_fails() {
    let (out, code) = invoke(r#"{"name": ["a", "b"]}"#);
    assert_eq!(code, 1);
    assert_eq!(out["failed"], json!(true));
}

#[test]
fn missing_args_file_fails() {
    let out = Command::cargo_bin("demo_hello")
        .unwrap()
        .arg("/nonexistent/demo_hello/args.json")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["failed"], json!(true));
}

#[test]
fn no_arguments_prints_usage() {
    let out = Command::cargo_bin("demo_hello").unwrap().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, json!({"failed": true, "msg": "No argument file provided"}));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage: demo_hello"));
}

#[test]
fn extra_arguments_are_rejected() {
    let f = args_file("{}");
    let out = Command::cargo_bin("demo_hello")
        .unwrap()
        .arg(f.path())
        .arg("stray")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, json!({"failed": true, "msg": "Unexpected argument: stray"}));
}

#[test]
fn doc_prints_yaml() {
    let out = Command::cargo_bin("demo_hello").unwrap().arg("doc").output().unwrap();
    assert!(out.status.success());
    let doc: serde_yaml::Value = serde_yaml::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["documentation"]["options"]["name"]["default"].as_str(), Some("John Doe"));
}
