use treeform_core::{Location, Node, NodeKind, ScanConfig, Tree, TreeError};

fn sample() -> Tree {
    Tree::from_paths([
        "package2/modF.py",
        "package2/subpackageD/tests/test_modD.py",
        "src/package1/modA.py",
        "xyz/abc/",
    ])
    .unwrap()
}

#[test]
fn test_find_existing_path() {
    let tree = sample();
    let before = tree.stats();

    let node = tree
        .find("package2/subpackageD/tests/test_modD.py")
        .unwrap()
        .unwrap();
    assert_eq!(
        tree.xpath(node),
        ["", "package2", "subpackageD", "tests", "test_modD.py"]
    );
    assert_eq!(tree.node(node).kind(), NodeKind::File);
    assert_eq!(tree.stats(), before);
}

#[test]
fn test_find_missing_does_not_mutate() {
    let mut tree = sample();
    let before = tree.clone();

    assert!(tree.find("booo/").unwrap().is_none());
    assert!(tree.locate("zoo/bar/", false).unwrap().is_none());
    assert!(tree.find(["zoo", "bar", "xxx"]).unwrap().is_none());
    assert_eq!(tree, before);
}

#[test]
fn test_find_or_create_adds_nodes() {
    let mut tree = sample();
    let before = tree.stats();

    let booo = tree.find_or_create("booo/").unwrap();
    assert_eq!(tree.xpath(booo), ["", "booo"]);
    assert_eq!(tree.stats().total_dirs, before.total_dirs + 1);

    let bar = tree.locate("zoo/bar/", true).unwrap().unwrap();
    assert_eq!(tree.xpath(bar), ["", "zoo", "bar"]);
    assert_eq!(tree.stats().total_dirs, before.total_dirs + 3);

    let xxx = tree.find_or_create("zoo/bar/xxx").unwrap();
    assert_eq!(tree.xpath(xxx), ["", "zoo", "bar", "xxx"]);
    assert_eq!(tree.stats().total_files, before.total_files + 1);
}

#[test]
fn test_sibling_uniqueness() {
    let mut tree = Tree::new();
    let first = tree.find_or_create(["a", "x"]).unwrap();
    let second = tree.find_or_create(["a", "x"]).unwrap();

    assert_eq!(first, second);
    assert_eq!(tree.node(tree.root()).child_count(), 1);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_kind_inference() {
    let mut tree = Tree::new();
    let dir = tree.find_or_create("a/b/").unwrap();
    assert_eq!(tree.node(dir).kind(), NodeKind::Directory);

    let mut tree = Tree::new();
    let file = tree.find_or_create("a/b").unwrap();
    assert_eq!(tree.node(file).kind(), NodeKind::File);
}

#[test]
fn test_insertion_under_file_is_rejected() {
    let mut tree = sample();
    let err = tree
        .find_or_create(["src", "package1", "modA.py", "child"])
        .unwrap_err();
    assert!(matches!(err, TreeError::InvalidInsertion { .. }));

    // the lookup still just reports a miss
    assert!(
        tree.find(["src", "package1", "modA.py", "child"])
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_lookup_ignores_kind() {
    let tree = sample();
    let by_file_name = tree.find(["xyz", "abc"]).unwrap().unwrap();
    let by_dir_name = tree.find("xyz/abc/").unwrap().unwrap();
    assert_eq!(by_file_name, by_dir_name);
    assert!(tree.node(by_file_name).is_dir());
}

#[test]
fn test_empty_location_is_root() {
    let mut tree = sample();
    assert_eq!(tree.find("").unwrap(), Some(tree.root()));
    assert_eq!(tree.find_or_create(Vec::<String>::new()).unwrap(), tree.root());
    assert!(Location::parse("/").unwrap().is_root());
}

#[test]
fn test_invalid_locations() {
    let mut tree = Tree::new();
    assert!(matches!(
        tree.find_or_create("a//b"),
        Err(TreeError::InvalidName { .. })
    ));
    assert!(matches!(
        tree.find_or_create(["a", "../b"]),
        Err(TreeError::InvalidName { .. })
    ));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_names_that_cannot_be_drawn_are_rejected() {
    let mut tree = Tree::new();
    for location in ["a\nb", "x ", "dir/x \t", "bell\u{7}"] {
        assert!(
            matches!(
                tree.find_or_create(location),
                Err(TreeError::InvalidName { .. })
            ),
            "{location:?} should be rejected"
        );
    }
    assert!(matches!(
        Node::new("a\rb/", None),
        Err(TreeError::InvalidName { .. })
    ));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_node_append_and_paths() {
    let mut tree = Tree::with_root("project/");
    assert_eq!(tree.node(tree.root()).name(), "project");

    let src = tree
        .append(tree.root(), Node::new("src/", None).unwrap())
        .unwrap();
    let lib = tree.append(src, Node::new("lib.rs", None).unwrap()).unwrap();

    assert_eq!(tree.path(lib), std::path::PathBuf::from("project/src/lib.rs"));
    assert_eq!(tree.relative_path(lib), std::path::PathBuf::from("src/lib.rs"));
    assert!(tree.is_last_child(lib));
}

#[test]
fn test_from_paths_skips_comments() {
    let tree = Tree::from_paths(["# layout", "", "  a/b.txt  ", "c/"]).unwrap();
    let stats = tree.stats();
    assert_eq!(stats.total_dirs, 2);
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.max_depth, 2);
}

#[test]
fn test_scan_config_defaults() {
    let config = ScanConfig::new("/some/path");
    assert!(config.include_hidden);
    assert!(config.max_depth.is_none());
    assert!(config.ignore_patterns.is_empty());
}

#[test]
fn test_tree_serializes_for_export() {
    let tree = Tree::from_paths(["src/lib.rs"]).unwrap();
    let value = serde_json::to_value(&tree).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[1]["name"], "src");
    assert_eq!(nodes[2]["parent"], 1);
    assert_eq!(value["headless"], false);
}
