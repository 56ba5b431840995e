use crate::common::{arg, yamlref};
use predicates::prelude::*;
use yamlref_cli::test_utils::{DocumentFixture, DocumentTree};

#[test]
fn test_resolve_prints_document() {
    let fixture = DocumentFixture::family();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let expected = format!("{}\n", fixture.expected.unwrap());
    yamlref(tree.root())
        .args(["resolve", &arg(&root)])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_resolve_writes_output_file() {
    let fixture = DocumentFixture::openapi();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();
    let output = tree.path("dist/openapi.yaml");

    yamlref(tree.root())
        .args(["resolve", &arg(&root), "--output", &arg(&output)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert_eq!(Some(tree.read("dist/openapi.yaml").unwrap()), fixture.expected);
}

#[test]
fn test_resolve_check_detects_stale_output() {
    let fixture = DocumentFixture::simple();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();
    let output = tree.path("bundle.yaml");

    yamlref(tree.root())
        .args(["resolve", &arg(&root), "-o", &arg(&output), "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
    assert!(!output.exists());

    yamlref(tree.root()).args(["resolve", &arg(&root), "-o", &arg(&output)]).assert().success();

    yamlref(tree.root())
        .args(["resolve", &arg(&root), "-o", &arg(&output), "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_check_reports_file_count() {
    let fixture = DocumentFixture::simple_array();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    yamlref(tree.root())
        .args(["check", &arg(&root)])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("3 inclusions of 3 files"));
}

#[test]
fn test_tree_json() {
    let fixture = DocumentFixture::openapi();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let output = yamlref(tree.root())
        .args(["tree", &arg(&root), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["depth"], 0);
    assert_eq!(entries[0]["path"], arg(&root));
    assert_eq!(entries[3]["path"], arg(&tree.path("shared/id.yaml")));
    assert_eq!(entries[3]["depth"], 2);
}

#[test]
fn test_tree_text() {
    let fixture = DocumentFixture::simple();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    yamlref(tree.root())
        .args(["tree", &arg(&root)])
        .assert()
        .success()
        .stdout(predicate::eq("parent.yaml\n  child.yaml\n"));
}

#[test]
fn test_missing_file_fails_with_report() {
    let tree = DocumentTree::new().unwrap();

    yamlref(tree.root())
        .args(["resolve", &arg(&tree.path("doesNotExist.yaml"))])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("doesNotExist.yaml"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_circular_reference_fails() {
    let fixture = DocumentFixture::circular();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    yamlref(tree.root())
        .args(["resolve", &arg(&root)])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("circular reference detected"));
}

#[test]
fn test_config_file_sets_indent_width() {
    let tree = DocumentTree::new().unwrap();
    let root = tree.add("root.yaml", "a:\n    $ref: child.yaml\n").unwrap();
    tree.add("child.yaml", "b: 1\nc: 2\n").unwrap();
    let config = tree.add("yamlref.toml", "indent-width = 4\n").unwrap();

    yamlref(tree.root())
        .args(["--config", &arg(&config), "resolve", &arg(&root)])
        .assert()
        .success()
        .stdout(predicate::eq("a:\n    b: 1\n    c: 2\n"));
}

#[test]
fn test_environment_config_and_flag_override() {
    let tree = DocumentTree::new().unwrap();
    let root = tree.add("root.yaml", "a:\n  $ref: child.yaml\n").unwrap();
    tree.add("child.yaml", "b: 1\n").unwrap();
    let config = tree.add("env.toml", "max-file-size = 4\n").unwrap();

    yamlref(tree.root())
        .env("YAMLREF_CONFIG", &config)
        .args(["check", &arg(&root)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large"));

    yamlref(tree.root())
        .env("YAMLREF_CONFIG", &config)
        .args(["check", &arg(&root), "--max-file-size", "1024"])
        .assert()
        .success();
}

#[test]
fn test_invalid_config_file() {
    let tree = DocumentTree::new().unwrap();
    let root = tree.add("root.yaml", "a: 1\n").unwrap();
    let config = tree.add("bad.toml", "indent-width = [\n").unwrap();

    yamlref(tree.root())
        .args(["-c", &arg(&config), "check", &arg(&root)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let fixture = DocumentFixture::simple();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let expected = format!("{}\n", fixture.expected.unwrap());
    yamlref(tree.root())
        .args(["--verbose", "resolve", &arg(&root)])
        .assert()
        .success()
        .stdout(predicate::eq(expected))
        .stderr(predicate::str::contains("child.yaml"));
}
