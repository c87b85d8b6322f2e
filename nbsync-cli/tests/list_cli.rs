//! `nbsync list` integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nbsync() -> Command {
    Command::cargo_bin("nbsync").expect("nbsync binary")
}

const MANIFEST: &str = r#"{
  "posts": [
    {"slug": "first-post", "repo": "alice/first-post"},
    {"slug": "deep-dive", "repo": "alice/research", "notebook": "notebooks/deep-dive.ipynb"}
  ]
}"#;

#[test]
fn list_shows_every_descriptor() {
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join("posts.json"), MANIFEST).unwrap();

    nbsync()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("first-post")
                .and(predicate::str::contains("alice/research"))
                .and(predicate::str::contains("notebooks/deep-dive.ipynb"))
                // Default notebook is surfaced, not left blank.
                .and(predicate::str::contains("post.ipynb")),
        );
}

#[test]
fn list_json_is_machine_readable() {
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join("posts.json"), MANIFEST).unwrap();

    let output = nbsync()
        .current_dir(site.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let posts = parsed.as_array().expect("array");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["slug"], "first-post");
    assert_eq!(posts[1]["notebook"], "notebooks/deep-dive.ipynb");
}

#[test]
fn list_empty_manifest_prints_no_op_message() {
    let site = TempDir::new().unwrap();
    std::fs::write(site.path().join("posts.json"), r#"{"posts":[]}"#).unwrap();

    nbsync()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn list_missing_manifest_fails() {
    let site = TempDir::new().unwrap();

    nbsync()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));
}
