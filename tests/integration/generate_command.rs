//! Integration tests for the generate operation and CLI route

use super::test_utils::{card_fixture, write_asset};
use folio::cli::{Cli, RunContext};
use folio::error::AppError;
use folio::generate::{run_generate, IndexRequest};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn sorted_request(root: &std::path::Path) -> IndexRequest {
    let mut request = IndexRequest::new(root.to_path_buf());
    request.sort = true;
    request
}

#[test]
fn test_generate_writes_expected_module() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let outcome = run_generate(&sorted_request(root), false).unwrap();

    let expected = "export default {\n\
                    \thearts: {\n\
                    \t\tace: require('./hearts/ace.png'),\n\
                    \t\tking: require('./hearts/king.png'),\n\
                    \t},\n\
                    \twild: {\n\
                    \t\tjoker: require('./wild/joker.v2.png'),\n\
                    \t},\n\
                    };\n";
    let written = fs::read_to_string(root.join("index.js")).unwrap();
    assert_eq!(written, expected);
    assert_eq!(outcome.bytes, expected.len());
    assert_eq!(outcome.entry_count, 3);
    assert_eq!(outcome.folders.len(), 2);
}

#[test]
fn test_generate_overwrites_existing_index_in_full() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_asset(root, "hearts", "ace.png");
    // Pre-existing content longer than the generated module.
    fs::write(
        root.join("index.js"),
        "// stale handwritten module\n".repeat(50),
    )
    .unwrap();

    run_generate(&sorted_request(root), false).unwrap();

    let written = fs::read_to_string(root.join("index.js")).unwrap();
    assert!(written.starts_with("export default {\n"));
    assert!(written.ends_with("};\n"));
    assert!(!written.contains("stale handwritten"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let outcome = run_generate(&sorted_request(root), true).unwrap();

    assert!(outcome.dry_run);
    assert!(outcome.bytes > 0);
    assert!(!root.join("index.js").exists());
}

#[test]
fn test_generated_index_is_not_self_indexed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_asset(root, "hearts", "ace.png");

    let first = run_generate(&sorted_request(root), false).unwrap();
    // Second run scans a tree that now contains index.js at the top level.
    let second = run_generate(&sorted_request(root), false).unwrap();

    assert_eq!(first.digest, second.digest);
    let written = fs::read_to_string(root.join("index.js")).unwrap();
    assert!(!written.contains("index.js"));
}

#[test]
fn test_run_context_executes_generate_with_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    card_fixture(root);

    let root_arg = root.to_string_lossy();
    let cli = Cli::try_parse_from([
        "folio",
        "--root",
        root_arg.as_ref(),
        "generate",
        "--sort",
        "--format",
        "json",
    ])
    .unwrap();

    let context = RunContext::new(cli.root.clone(), cli.config.clone()).unwrap();
    let output = context.execute(&cli.command).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["entry_count"], 3);
    assert_eq!(value["folders"][0]["name"], "hearts");
    assert!(root.join("index.js").exists());
}

#[test]
fn test_run_context_rejects_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent");

    let err = RunContext::new(missing, None).unwrap_err();
    assert!(matches!(err, AppError::Scan(_)));
}

#[test]
fn test_run_context_honors_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_asset(root, "hearts", "ace.png");
    fs::write(
        root.join("folio.toml"),
        "[index]\noutput = \"assets.js\"\nsort = true\n",
    )
    .unwrap();

    let root_arg = root.to_string_lossy();
    let cli =
        Cli::try_parse_from(["folio", "--root", root_arg.as_ref(), "generate"]).unwrap();
    let context = RunContext::new(cli.root.clone(), cli.config.clone()).unwrap();
    context.execute(&cli.command).unwrap();

    assert!(root.join("assets.js").exists());
    assert!(!root.join("index.js").exists());
}
