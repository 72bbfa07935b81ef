//! Integration tests for the runsweep binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

const RUNS_PATH: &str = "/repos/acme/widgets/actions/workflows/ci.yml/runs";

fn runsweep() -> Command {
    let mut cmd = Command::new(cargo_bin("runsweep"));
    cmd.env_remove("GITHUB_TOKEN");
    cmd
}

/// Mock the count probe and a single data page holding `ids`.
fn mock_listing(server: &MockServer, ids: &[u64]) {
    let runs: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
    let total = ids.len() as u64;
    server.mock(|when, then| {
        when.method(GET).path(RUNS_PATH).query_param("per_page", "1");
        then.status(200)
            .json_body(json!({"total_count": total, "workflow_runs": []}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(RUNS_PATH)
            .query_param("per_page", "100")
            .query_param("page", "1");
        then.status(200)
            .json_body(json!({"total_count": total, "workflow_runs": runs}));
    });
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    runsweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow run history"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    runsweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    runsweep().assert().failure();
    Ok(())
}

#[test]
fn purge_requires_a_token() -> Result<(), Box<dyn std::error::Error>> {
    runsweep()
        .args(["purge", "acme/widgets", "ci.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
    Ok(())
}

#[test]
fn purge_rejects_malformed_slug() -> Result<(), Box<dyn std::error::Error>> {
    runsweep()
        .args(["purge", "not-a-slug", "ci.yml", "--token", "t", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OWNER/REPO"));
    Ok(())
}

#[test]
fn purge_deletes_listed_runs_and_reports_counts() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_listing(&server, &[101, 102]);
    let d1 = server.mock(|when, then| {
        when.method(DELETE).path("/repos/acme/widgets/actions/runs/101");
        then.status(204);
    });
    let d2 = server.mock(|when, then| {
        when.method(DELETE).path("/repos/acme/widgets/actions/runs/102");
        then.status(204);
    });

    runsweep()
        .args([
            "--quiet",
            "purge",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 runs"))
        .stdout(predicate::str::contains("Removed 2 runs"));

    d1.assert();
    d2.assert();
    Ok(())
}

#[test]
fn purge_dry_run_deletes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_listing(&server, &[101, 102]);
    let deletes = server.mock(|when, then| {
        when.method(DELETE).path_includes("/actions/runs/");
        then.status(204);
    });

    runsweep()
        .args([
            "purge",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 runs would be removed"));

    deletes.assert_calls(0);
    Ok(())
}

#[test]
fn purge_without_yes_fails_when_not_attended() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_listing(&server, &[101]);

    // Under assert_cmd there is no terminal attached, so the confirmation
    // prompt must refuse rather than hang.
    runsweep()
        .args([
            "purge",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    Ok(())
}

#[test]
fn purge_reports_listing_failure() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(RUNS_PATH);
        then.status(401).body("bad credentials");
    });

    runsweep()
        .args([
            "purge",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("401"));
    Ok(())
}

#[test]
fn purge_reads_token_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let probe = server.mock(|when, then| {
        when.method(GET)
            .path(RUNS_PATH)
            .header("Authorization", "Bearer env-token");
        then.status(200)
            .json_body(json!({"total_count": 0, "workflow_runs": []}));
    });

    runsweep()
        .env("GITHUB_TOKEN", "env-token")
        .args([
            "purge",
            "acme/widgets",
            "ci.yml",
            "--api-url",
            &server.base_url(),
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));

    // Count probe plus the single page fetch, both carrying the env token.
    probe.assert_calls(2);
    Ok(())
}

#[test]
fn list_prints_run_ids() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_listing(&server, &[7, 8]);

    runsweep()
        .args([
            "list",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 runs"))
        .stdout(predicate::str::contains("7"))
        .stdout(predicate::str::contains("8"));
    Ok(())
}

#[test]
fn list_json_emits_machine_readable_output() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_listing(&server, &[7]);

    let output = runsweep()
        .args([
            "list",
            "acme/widgets",
            "ci.yml",
            "--token",
            "t",
            "--api-url",
            &server.base_url(),
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed[0]["id"], 7);
    Ok(())
}

#[test]
fn completions_generates_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    runsweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("runsweep"));
    Ok(())
}
