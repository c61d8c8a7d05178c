//! Integration tests for index freshness checking

use super::test_utils::{card_fixture, write_asset};
use folio::cli::{Cli, RunContext};
use folio::error::AppError;
use folio::generate::{run_check, run_generate, CheckStatus, IndexRequest};
use clap::Parser;
use tempfile::TempDir;

fn sorted_request(root: &std::path::Path) -> IndexRequest {
    let mut request = IndexRequest::new(root.to_path_buf());
    request.sort = true;
    request
}

#[test]
fn test_check_in_sync_after_generate() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let request = sorted_request(root);
    run_generate(&request, false).unwrap();
    let outcome = run_check(&request).unwrap();

    assert_eq!(outcome.status, CheckStatus::InSync);
    assert_eq!(outcome.actual_digest.as_deref(), Some(outcome.expected_digest.as_str()));
}

#[test]
fn test_check_missing_before_generate() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let outcome = run_check(&sorted_request(root)).unwrap();

    assert_eq!(outcome.status, CheckStatus::Missing);
    assert!(outcome.actual_digest.is_none());
}

#[test]
fn test_check_goes_stale_when_assets_change() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let request = sorted_request(root);
    run_generate(&request, false).unwrap();
    write_asset(root, "hearts", "queen.png");

    let outcome = run_check(&request).unwrap();
    assert_eq!(outcome.status, CheckStatus::Stale);
}

#[test]
fn test_check_command_exit_contract() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);
    let root_arg = root.to_string_lossy();

    let check_cli =
        Cli::try_parse_from(["folio", "--root", root_arg.as_ref(), "check", "--sort"]).unwrap();
    let context = RunContext::new(check_cli.root.clone(), check_cli.config.clone()).unwrap();

    // Missing index fails the check.
    let err = context.execute(&check_cli.command).unwrap_err();
    assert!(matches!(err, AppError::IndexMissing(_)));

    // After generation the check passes.
    let generate_cli = Cli::try_parse_from([
        "folio",
        "--root",
        root_arg.as_ref(),
        "generate",
        "--sort",
    ])
    .unwrap();
    context.execute(&generate_cli.command).unwrap();
    let output = context.execute(&check_cli.command).unwrap();
    assert!(output.contains("up to date"));

    // A new asset makes it stale again.
    write_asset(root, "wild", "joker.v3.png");
    let err = context.execute(&check_cli.command).unwrap_err();
    assert!(matches!(err, AppError::IndexStale(_)));
}

#[test]
fn test_check_json_reports_status() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);
    let root_arg = root.to_string_lossy();

    let generate_cli = Cli::try_parse_from([
        "folio",
        "--root",
        root_arg.as_ref(),
        "generate",
        "--sort",
    ])
    .unwrap();
    let check_cli = Cli::try_parse_from([
        "folio",
        "--root",
        root_arg.as_ref(),
        "check",
        "--sort",
        "--format",
        "json",
    ])
    .unwrap();

    let context = RunContext::new(check_cli.root.clone(), check_cli.config.clone()).unwrap();
    context.execute(&generate_cli.command).unwrap();
    let output = context.execute(&check_cli.command).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "in_sync");
}
