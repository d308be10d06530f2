//! Integration tests for heft


use harness::{TestTree, run_heft};
use predicates::prelude::*;

#[test]
fn test_eq_matches_exact_size() {
    let tree = TestTree::new();
    tree.add_file("a.bin", 0);
    tree.add_file("b.bin", 1024);
    tree.add_file("c.bin", 2048);

    let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", "1K", "-o", "eq"]);
    assert!(success, "heft should succeed");
    assert_eq!(stdout, "b.bin\n");
}

#[test]
fn test_ge_lists_matches_in_traversal_order() {
    let tree = TestTree::new();
    tree.add_file("a.bin", 0);
    tree.add_file("b.bin", 1024);
    tree.add_file("sub/c.bin", 2048);
    tree.add_file("sub/nested/d.bin", 5000);

    let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", "1KB", "-o", "ge"]);
    assert!(success);
    assert_eq!(stdout, "b.bin\nc.bin\nd.bin\n");
}

#[test]
fn test_default_operator_is_eq() {
    let tree = TestTree::new();
    tree.add_file("empty.bin", 0);
    tree.add_file("big.bin", 4096);

    // No operator and no size: eq against 0 bytes.
    let (stdout, _stderr, success) = run_heft(tree.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "empty.bin\n");
}

#[test]
fn test_bare_number_size_means_zero() {
    let tree = TestTree::new();
    tree.add_file("empty.bin", 0);
    tree.add_file("hundred.bin", 100);

    // "100" has no unit suffix, so it denotes 0 bytes.
    let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", "100"]);
    assert!(success);
    assert_eq!(stdout, "empty.bin\n");
}

#[test]
fn test_size_expression_is_case_insensitive() {
    let tree = TestTree::new();
    tree.add_file("one_meg.bin", 1 << 20);

    for size in ["1mb", "1MB", "1MiB", "1m"] {
        let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", size]);
        assert!(success);
        assert_eq!(stdout, "one_meg.bin\n", "size spelling {}", size);
    }
}

#[test]
fn test_lt_excludes_threshold() {
    let tree = TestTree::new();
    tree.add_file("small.bin", 1023);
    tree.add_file("exact.bin", 1024);

    let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", "1K", "-o", "lt"]);
    assert!(success);
    assert_eq!(stdout, "small.bin\n");
}

#[test]
fn test_directories_are_not_listed() {
    let tree = TestTree::new();
    tree.add_file("sub/file.bin", 10);
    tree.add_dir("empty_dir");

    let (stdout, _stderr, success) = run_heft(tree.path(), &[".", "-s", "1B", "-o", "ge"]);
    assert!(success);
    assert_eq!(stdout, "file.bin\n");
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("hit.bin", 512);
    tree.add_file("miss.bin", 100);

    let (stdout, _stderr, success) =
        run_heft(tree.path(), &[".", "-s", "0.5K", "--json"]);
    assert!(success);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["matches"], serde_json::json!(["hit.bin"]));
    assert_eq!(parsed["diagnostics"], serde_json::json!([]));
}

#[test]
fn test_invalid_operator_fails_with_diagnostic() {
    let tree = TestTree::new();
    tree.add_file("a.bin", 0);

    let (stdout, stderr, success) = run_heft(tree.path(), &[".", "-o", "bogus"]);
    assert!(!success, "invalid operator should exit non-zero");
    assert_eq!(stdout, "", "no result on invalid operator");
    assert!(
        stderr.contains("invalid operator 'bogus'"),
        "stderr should name the operator: {}",
        stderr
    );
}

#[test]
fn test_invalid_size_fails_with_diagnostic() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_heft(tree.path(), &[".", "-s", "abcMB"]);
    assert!(!success);
    assert_eq!(stdout, "");
    assert!(stderr.contains("invalid size"), "stderr: {}", stderr);
}

#[test]
fn test_missing_root_fails_with_diagnostic() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_heft(tree.path(), &["does_not_exist"]);
    assert!(!success);
    assert_eq!(stdout, "");
    assert!(stderr.contains("no such directory"), "stderr: {}", stderr);
}

#[test]
fn test_file_as_root_fails_with_diagnostic() {
    let tree = TestTree::new();
    tree.add_file("plain.bin", 1);

    let (_stdout, stderr, success) = run_heft(tree.path(), &["plain.bin"]);
    assert!(!success);
    assert!(stderr.contains("not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_cli_contract_with_assert_cmd() {
    let tree = TestTree::new();
    tree.add_file("exact.bin", 2048);

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_heft"))
        .args(["-s", "2K"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("exact.bin"));

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_heft"))
        .args(["-o", "gte"])
        .arg(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of: eq, le, ge, gt, lt"));
}
