use catalog_testing::TestWorld;
use catalog_testing::assertions::{
    assert_all_in_category, assert_product_count, assert_product_names, assert_sorted_by_price,
};
use catalog_testing::fixtures::{generated_products, mock_products};

const EMPTY_MESSAGE: &str = "No products found. Try adjusting your filters.";

fn list_json(world: &TestWorld, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["list", "--format", "json", "--width", "122"];
    args.extend_from_slice(extra);

    let result = world.run(&args).expect("Failed to run list");
    assert!(result.success(), "list failed: {}", result.stderr());
    result.json().expect("Failed to parse list JSON")
}

#[test]
fn test_list_defaults_to_ascending_price() {
    let world = TestWorld::new().with_products(&mock_products());
    let json = list_json(&world, &[]);

    assert_eq!(json["summary"], "Showing 4 of 4 products");
    assert_eq!(json["state"], "populated");
    assert_eq!(json["total"], 4);
    assert_eq!(json["columns"], 4);
    assert_eq!(json["row_count"], 1);
    assert_product_names(
        &json,
        &["Wireless Mouse", "Coffee Maker", "Desk Chair", "Laptop"],
    )
    .unwrap();
}

#[test]
fn test_list_category_then_query_narrows() {
    let world = TestWorld::new().with_products(&mock_products());

    let json = list_json(&world, &["--category", "electronics"]);
    assert_eq!(json["summary"], "Showing 2 of 4 products");
    assert_all_in_category(&json, "electronics").unwrap();

    let json = list_json(&world, &["--category", "electronics", "--query", "  MOUSE "]);
    assert_eq!(json["summary"], "Showing 1 of 4 products");
    assert_product_names(&json, &["Wireless Mouse"]).unwrap();
}

#[test]
fn test_list_descending_sort() {
    let world = TestWorld::new().with_products(&mock_products());
    let json = list_json(&world, &["--sort", "desc"]);

    assert_sorted_by_price(&json, true).unwrap();
    assert_eq!(json["products"][0]["name"], "Laptop");
}

#[test]
fn test_list_categories_in_first_seen_order() {
    let world = TestWorld::new().with_products(&mock_products());
    let json = list_json(&world, &["--query", "chair"]);

    assert_eq!(
        json["categories"],
        serde_json::json!(["all", "electronics", "kitchen", "office"])
    );
}

#[test]
fn test_list_unknown_category_is_empty_not_error() {
    let world = TestWorld::new().with_products(&mock_products());

    let result = world.run(&["list", "--category", "toys"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Showing 0 of 4 products"));
    assert!(result.stdout().contains(EMPTY_MESSAGE));
}

#[test]
fn test_list_plain_output() {
    let world = TestWorld::new().with_products(&mock_products());

    let result = world
        .run(&["list", "--category", "electronics"])
        .unwrap();
    assert!(result.success());

    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines[0], "Showing 2 of 4 products");
    assert!(lines[2].starts_with("Wireless Mouse"));
    assert!(lines[3].starts_with("Laptop"));
    assert!(!result.stdout().contains('⭐'));
}

#[test]
fn test_ratings_flag_from_config_and_cli() {
    let world = TestWorld::new()
        .with_products(&mock_products())
        .with_config("[features]\nshow_ratings = true\n");
    let result = world.run(&["list", "--query", "laptop"]).unwrap();
    assert!(result.stdout().contains("⭐ 4.5"));

    let world = TestWorld::new().with_products(&mock_products());
    let result = world
        .run(&["--show-ratings", "list", "--query", "desk"])
        .unwrap();
    assert!(result.stdout().contains("⭐ 4.8"));
}

#[test]
fn test_large_collection_layout() {
    let world = TestWorld::new().with_products(&generated_products(1000));
    let json = list_json(&world, &[]);

    assert_product_count(&json, 1000).unwrap();
    assert_eq!(json["columns"], 4);
    assert_eq!(json["row_count"], 250);
}

#[test]
fn test_narrow_width_uses_one_column() {
    let world = TestWorld::new().with_products(&mock_products());

    let result = world
        .run(&["list", "--format", "json", "--width", "10"])
        .unwrap();
    let json = result.json().unwrap();
    assert_eq!(json["columns"], 1);
    assert_eq!(json["row_count"], 4);
}

#[test]
fn test_invalid_sort_is_rejected() {
    let world = TestWorld::new().with_products(&mock_products());

    let result = world.run(&["list", "--sort", "sideways"]).unwrap();
    assert!(!result.success());
}

#[test]
fn test_categories_command() {
    let world = TestWorld::new().with_products(&mock_products());

    let result = world.run(&["categories"]).unwrap();
    assert!(result.success());
    let values: Vec<&str> = result
        .stdout()
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(values, vec!["all", "electronics", "kitchen", "office"]);

    let result = world.run(&["categories", "--format", "json"]).unwrap();
    let json = result.json().unwrap();
    assert_eq!(json[0]["label"], "All Categories");
    assert_eq!(json[2]["value"], "kitchen");
    assert_eq!(json[2]["label"], "Kitchen");
}
