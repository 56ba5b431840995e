use anyhow::Context;
use yamlref_cli::core::{YamlRefError, user_friendly_error};
use yamlref_cli::resolver::{ResolveOptions, YamlResolver, resolve_file};
use yamlref_cli::test_utils::{DocumentFixture, DocumentTree};

#[test]
fn test_missing_root_document() {
    let tree = DocumentTree::new().unwrap();
    let mut resolver = YamlResolver::new();

    let error = resolver.load_file(tree.path("doesNotExist.yaml")).unwrap_err();
    assert!(matches!(error, YamlRefError::FileError(_)));
    assert_eq!(resolver.as_str(), "");
}

#[test]
fn test_bad_reference_context() {
    let fixture = DocumentFixture::bad_reference();
    let (_tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let error = resolve_file(&root, ResolveOptions::default()).unwrap_err();
    let context = user_friendly_error(anyhow::Error::from(error));

    let details = context.details.unwrap();
    assert!(details.contains("doesNotExist.yaml"));
    assert!(details.contains("Referenced from:"));
    assert!(details.contains("fileWithBadReference.yaml"));
    assert!(context.suggestion.unwrap().contains("relative to the file containing it"));
}

#[test]
fn test_circular_reference_context() {
    let fixture = DocumentFixture::circular();
    let (_tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let error = resolve_file(&root, ResolveOptions::default()).unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("circular reference detected: "));
    assert_eq!(message.matches(" -> ").count(), 3);
    assert!(message.ends_with("parent.yaml"));

    let context = user_friendly_error(anyhow::Error::from(error));
    assert!(context.details.unwrap().contains("Inclusion chain:"));
    assert!(context.suggestion.is_some());
}

#[test]
fn test_error_found_behind_anyhow_context() {
    let fixture = DocumentFixture::circular();
    let (_tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let result = resolve_file(&root, ResolveOptions::default())
        .with_context(|| format!("Failed to bundle {}", root.display()));
    let context = user_friendly_error(result.unwrap_err());

    assert!(matches!(context.error, YamlRefError::CircularReference { .. }));
}

#[test]
fn test_malformed_reference_context() {
    let tree = DocumentTree::new().unwrap();
    let root = tree.add("root.yaml", "info:\n  title: x\n  $ref:\n").unwrap();

    let error = resolve_file(&root, ResolveOptions::default()).unwrap_err();
    assert!(error.to_string().contains("root.yaml:3"));

    let context = user_friendly_error(anyhow::Error::from(error));
    assert_eq!(context.details.as_deref(), Some("Offending line:   $ref:"));
}

#[test]
fn test_too_large_context() {
    let tree = DocumentTree::new().unwrap();
    let root = tree.add("root.yaml", "a: 1\nb: 2\nc: 3\n").unwrap();

    let options = ResolveOptions {
        max_file_size: Some(8),
        ..ResolveOptions::default()
    };
    let error = resolve_file(&root, options).unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("file {} is too large (15 bytes, limit 8 bytes)", root.display())
    );

    let context = user_friendly_error(anyhow::Error::from(error));
    assert!(context.suggestion.unwrap().contains("--max-file-size"));
}
