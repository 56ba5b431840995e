use serial_test::serial;
use yamlref_cli::resolver::{ResolveOptions, YamlResolver, resolve_file};
use yamlref_cli::test_utils::{DocumentFixture, DocumentTree};

#[test]
fn test_fixtures_resolve_to_expected_text() {
    for fixture in [
        DocumentFixture::simple(),
        DocumentFixture::simple_array(),
        DocumentFixture::family(),
        DocumentFixture::openapi(),
    ] {
        let (_tree, root) = DocumentTree::with_fixture(&fixture).unwrap();
        let resolved = resolve_file(&root, ResolveOptions::default()).unwrap();
        assert_eq!(Some(resolved), fixture.expected, "fixture {}", fixture.name);
    }
}

#[test]
fn test_resolver_can_be_reused() {
    let simple = DocumentFixture::simple();
    let family = DocumentFixture::family();
    let (_simple_tree, simple_root) = DocumentTree::with_fixture(&simple).unwrap();
    let (_family_tree, family_root) = DocumentTree::with_fixture(&family).unwrap();

    let mut resolver = YamlResolver::new();
    resolver.load_file(&simple_root).unwrap();
    assert_eq!(Some(resolver.to_string()), simple.expected);

    resolver.load_file(&family_root).unwrap();
    assert_eq!(Some(resolver.to_string()), family.expected);
    assert_eq!(resolver.included_files()[0].path, family_root);
}

#[test]
fn test_family_inclusion_trace() {
    let fixture = DocumentFixture::family();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let mut resolver = YamlResolver::new();
    resolver.load_file(&root).unwrap();

    let included = resolver.included_files();
    // grandNana, nana, pops, then michael with 4 children, bev and carol under
    // both pops and nana
    assert_eq!(included.len(), 3 + 7 + 7);
    assert_eq!(included[0].depth, 0);
    assert_eq!(included[1].path, tree.path("gen2/nana.yaml"));
    assert_eq!(included[2].path, tree.path("gen2/pops.yaml"));
    assert_eq!(included[2].depth, 2);
    assert_eq!(included[3].path, tree.path("gen3/michael.yaml"));
    assert_eq!(included[3].depth, 3);
    assert_eq!(included[4].path, tree.path("gen4/chris.yaml"));
    assert_eq!(included[4].depth, 4);

    let max_depth = included.iter().map(|file| file.depth).max().unwrap();
    assert_eq!(max_depth, 4);
}

#[test]
fn test_rooted_reference_target_nests_under_referencing_directory() {
    let tree = DocumentTree::new().unwrap();
    tree.add("shared/limits.yaml", "max: 99\n").unwrap();
    tree.add("api/shared/limits.yaml", "max: 10\n").unwrap();
    let root = tree.add("api/root.yaml", "limits:\n  $ref: '/shared/limits.yaml'\n").unwrap();

    let mut resolver = YamlResolver::new();
    resolver.load_file(&root).unwrap();

    assert_eq!(resolver.as_str(), "limits:\n  max: 10");
    assert_eq!(resolver.included_files()[1].path, tree.path("api/shared/limits.yaml"));
}

#[test]
fn test_double_quoted_key_and_list_items() {
    let tree = DocumentTree::new().unwrap();
    let root = tree
        .add(
            "root.json.yaml",
            "servers:\n  - \"$ref\": \"servers/prod.yaml\"\n  - '$ref': 'servers/dev.yaml'\n",
        )
        .unwrap();
    tree.add("servers/prod.yaml", "url: https://api.example.com\nname: prod\n").unwrap();
    tree.add("servers/dev.yaml", "url: http://localhost\nname: dev\n").unwrap();

    let resolved = resolve_file(&root, ResolveOptions::default()).unwrap();
    assert_eq!(
        resolved,
        "servers:\n  - url: https://api.example.com\n    name: prod\n  - url: http://localhost\n    name: dev"
    );
}

#[test]
#[serial]
fn test_relative_root_path_uses_working_directory() {
    let fixture = DocumentFixture::simple_array();
    let (tree, _root) = DocumentTree::with_fixture(&fixture).unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tree.root()).unwrap();
    let result = resolve_file("./parent.yaml", ResolveOptions::default());
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(Some(result.unwrap()), fixture.expected);
}

#[test]
fn test_save_and_reload_round_trip() {
    let fixture = DocumentFixture::openapi();
    let (tree, root) = DocumentTree::with_fixture(&fixture).unwrap();

    let mut resolver = YamlResolver::new();
    resolver.load_file(&root).unwrap();
    let bundled = tree.path("dist/openapi.yaml");
    resolver.save_file(&bundled).unwrap();

    // The bundle only contains anchors, so it resolves to itself.
    let mut again = YamlResolver::new();
    again.load_file(&bundled).unwrap();
    assert_eq!(again.as_str(), resolver.as_str());
    assert_eq!(again.included_files().len(), 1);
}
