use std::fs;

use item_content::{CatalogConfig, ContentFactory, FailurePolicy};
use tempfile::TempDir;

const ITEMS: &str = r#"(
    items: [
        (item_type: "(O)", id: "388", name: "Wood"),
        (item_type: "(O)", id: "378", name: "Copper Ore", display_name: Some("Kupfererz")),
        (item_type: "(O)", id: "380", name: "Iron Ore"),
        (item_type: "(O)", id: "0", name: ""),
        (item_type: "(W)", id: "4", name: "Galaxy Sword"),
        (item_type: "(O)", id: "388", name: "Duplicate Wood"),
    ],
)"#;

fn data_dir(config: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.ron"), ITEMS).unwrap();
    if let Some(config) = config {
        fs::write(dir.path().join("config.toml"), config).unwrap();
    }
    dir
}

#[test]
fn skip_policy_builds_catalog_without_bad_records() {
    let dir = data_dir(None);
    let catalog = ContentFactory::new(dir.path())
        .load_catalog(FailurePolicy::Skip)
        .unwrap();

    // The nameless record and the duplicate are left out.
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.skipped(), 2);
    assert_eq!(catalog.get("(O)388").map(|e| e.name()), Some("Wood"));

    let wood = catalog.get("(O)388").unwrap();
    assert_eq!(wood.qualified_id(), "(O)388");
    assert!(wood.name_contains("WOOD"));
    assert!(wood.name_equivalent_to("wood"));
    assert!(!wood.name_equivalent_to("Wo"));
}

#[test]
fn search_matches_localized_names() {
    let dir = data_dir(None);
    let catalog = ContentFactory::new(dir.path())
        .load_catalog(FailurePolicy::Skip)
        .unwrap();

    let hits: Vec<_> = catalog.search("erz").map(|e| e.qualified_id()).collect();
    assert_eq!(hits, ["(O)378"]);

    let exact = catalog.find_exact("KUPFERERZ").unwrap();
    assert_eq!(exact.name(), "Copper Ore");
    assert!(catalog.find_exact("copper").is_none());
}

#[test]
fn fresh_instances_come_from_the_same_record() {
    let dir = data_dir(None);
    let catalog = ContentFactory::new(dir.path())
        .load_catalog(FailurePolicy::Skip)
        .unwrap();

    let sword = catalog.get("(W)4").unwrap();
    let fresh = sword.create_item().unwrap();
    assert_eq!(fresh, **sword.item());
    assert_eq!(fresh.qualified_id(), "(W)4");
}

#[test]
fn abort_policy_from_settings_fails_the_load() {
    let dir = data_dir(Some("failure_policy = \"abort\"\n"));
    let config = CatalogConfig::resolve(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(config.failure_policy, FailurePolicy::Abort);

    let err = ContentFactory::new(&config.data_dir)
        .load_catalog(config.failure_policy)
        .unwrap_err();
    assert!(err.to_string().contains("(O)0"));
}

#[test]
fn missing_items_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ContentFactory::new(dir.path()).load_catalog(FailurePolicy::Skip);
    assert!(result.is_err());
}
