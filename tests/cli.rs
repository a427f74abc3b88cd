// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the gmc binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gmc(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gmc").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("GMC_CONFIG")
        .env_remove("GMC_REPO")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a repository with a committer identity and the given files staged.
fn repo_with_staged(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }

    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    dir
}

#[test]
fn test_format_message() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["format", "-t", "feat", "-s", "auth", "-m", "add OAuth2 authentication"])
        .assert()
        .success()
        .stdout("✨ feat(auth): add OAuth2 authentication\n");
}

#[test]
fn test_format_breaking_with_body() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["format", "-t", "feat", "-m", "drop v1 endpoints", "--breaking"])
        .args(["-b", "Clients must move to v2."])
        .assert()
        .success()
        .stdout("✨ feat!: drop v1 endpoints\n\nClients must move to v2.\n\nBREAKING CHANGE: \n");
}

#[test]
fn test_format_wraps_body() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gmc.toml"), "[format]\nwrap_width = 12\n").unwrap();
    gmc(temp.path())
        .args(["format", "-t", "docs", "-m", "explain setup", "--wrap"])
        .args(["-b", "run the installer then restart"])
        .assert()
        .success()
        .stdout("📝 docs: explain setup\n\nrun the\ninstaller\nthen restart\n");
}

#[test]
fn test_format_unknown_type_fails() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["format", "-t", "feature", "-m", "add login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown commit type: 'feature'"));
}

#[test]
fn test_validate_valid_message() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["validate", "🐛 fix(parser): handle empty input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Commit message is valid"));
}

#[test]
fn test_validate_invalid_message_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["validate", "feat: add login"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("❌ Commit message is invalid"))
        .stdout(predicate::str::contains("Invalid commit format"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_validate_from_stdin_as_json() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["--format", "json", "validate", "-"])
        .write_stdin("✨ feat: Added login.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("Title should not end with a period"))
        .stdout(predicate::str::contains("Title should start with a lowercase letter"));
}

#[test]
fn test_validate_respects_config_limits() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gmc.toml"), "[rules]\nmax_title_length = 10\n").unwrap();
    gmc(temp.path())
        .args(["validate", "✨ feat: add a fairly long title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep it under 10 characters"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_found_in_isolated_config_dir() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config").join("gmc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[rules]\nmax_title_length = 8\n").unwrap();

    let work = temp.path().join("work");
    fs::create_dir_all(&work).unwrap();

    Command::cargo_bin("gmc")
        .unwrap()
        .current_dir(&work)
        .env("HOME", temp.path().join("home"))
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("GMC_CONFIG")
        .args(["validate", "✨ feat: add a login page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep it under 8 characters"));
}

#[test]
fn test_parse_message() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["parse", "⚡ perf(cache)!: reuse buffers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"perf\""))
        .stdout(predicate::str::contains("\"scope\": \"cache\""))
        .stdout(predicate::str::contains("\"breaking\": true"));
}

#[test]
fn test_parse_malformed_message_fails() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .args(["parse", "just some words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed commit message"));
}

#[test]
fn test_types_lists_registry() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("✨"))
        .stdout(predicate::str::contains("feat"))
        .stdout(predicate::str::contains("deps"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gmc "));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path()).arg("init").assert().success();

    let content = fs::read_to_string(temp.path().join("gmc.toml")).unwrap();
    assert!(content.contains("[rules]"));

    gmc(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gmc(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_suggest_docs_change() {
    let repo = repo_with_staged(&[("README.md", "# Project\n")]);
    gmc(repo.path())
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested type: 📝 docs"))
        .stdout(predicate::str::contains("Confidence: high"));
}

#[test]
fn test_commit_creates_commit() {
    let repo = repo_with_staged(&[("src/lib.rs", "pub fn login() {}\n")]);
    gmc(repo.path())
        .args(["commit", "-t", "feat", "-s", "auth", "-m", "add login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Commit created:"));

    let git = git2::Repository::open(repo.path()).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("✨ feat(auth): add login"));
}

#[test]
fn test_commit_with_repo_flag() {
    let repo = repo_with_staged(&[("CHANGELOG.md", "## 0.1.0\n")]);
    let elsewhere = TempDir::new().unwrap();
    gmc(elsewhere.path())
        .arg("--repo")
        .arg(repo.path())
        .args(["commit", "-t", "docs", "-m", "start changelog"])
        .assert()
        .success();

    let git = git2::Repository::open(repo.path()).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("📝 docs: start changelog"));
}

#[test]
fn test_commit_without_staged_changes_fails() {
    let repo = repo_with_staged(&[]);
    gmc(repo.path())
        .args(["commit", "-t", "fix", "-m", "patch crash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No staged changes"));
}

#[test]
fn test_serve_answers_requests() {
    let temp = TempDir::new().unwrap();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"git_validate_message","arguments":{"message":"✨ feat: add login"}}}"#,
        "\n",
    );

    let output = gmc(temp.path())
        .arg("serve")
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let responses: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 4);
    assert_eq!(
        responses[2]["result"]["content"][0]["text"],
        "✅ Commit message is valid"
    );
}

#[test]
fn test_default_command_is_serve() {
    let temp = TempDir::new().unwrap();
    gmc(temp.path())
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n")
        .assert()
        .success()
        .stdout("{\"jsonrpc\":\"2.0\",\"id\":7,\"result\":{}}\n");
}
