// ABOUTME: Integration tests for catalog loading and validation
// ABOUTME: Covers the bundled dataset, file loading, and scaling of catalog recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use recipe_discovery::catalog::Catalog;
use recipe_discovery::errors::ErrorCode;
use recipe_discovery::models::{Difficulty, MealType, Quantity};
use recipe_discovery::recipes::{all_cuisines, ServingPlan};
use tempfile::TempDir;

fn rendered(text: &str) -> Quantity {
    Quantity::PreRendered(text.to_owned())
}

// ============================================================================
// Built-in Catalog
// ============================================================================

#[test]
fn test_builtin_catalog_shape() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 8);

    let curry = catalog.get("2").unwrap();
    assert_eq!(curry.difficulty, Difficulty::Easy);
    assert_eq!(curry.meal_type, Some(MealType::Dinner));
    assert_eq!(curry.dietary_tags, vec!["Vegan", "Gluten-Free"]);
    assert!(catalog.get("99").is_none());
}

#[test]
fn test_builtin_quantities_keep_their_kind() {
    let catalog = Catalog::builtin().unwrap();
    let curry = catalog.get("2").unwrap();
    let lime = curry.ingredients.last().unwrap();
    assert_eq!(lime.quantity, rendered(""));
    assert!(lime.quantity.is_to_taste());

    let oats = catalog.get("3").unwrap();
    assert_eq!(oats.ingredients.last().unwrap().quantity, rendered("a handful"));
    assert_eq!(oats.ingredients[0].quantity, Quantity::Numeric(0.5));
}

#[test]
fn test_builtin_cuisines_in_first_seen_order() {
    let catalog = Catalog::builtin().unwrap();
    let cuisines = all_cuisines(catalog.recipes());
    assert_eq!(&cuisines[..4], ["Italian", "Indian", "American", "Japanese"]);
    let mediterranean = cuisines.iter().filter(|c| *c == "Mediterranean").count();
    assert_eq!(mediterranean, 1);
}

#[test]
fn test_halving_a_catalog_recipe() {
    let catalog = Catalog::builtin().unwrap();
    let pasta = catalog.get("1").unwrap();
    let scaled = ServingPlan::new(2, 1).apply(pasta);

    let quantities: Vec<&Quantity> = scaled.iter().map(|i| &i.quantity).collect();
    assert_eq!(
        quantities,
        vec![
            &rendered("1/2"),
            &rendered("3/4"),
            &rendered("1"),
            &rendered("2"),
            &rendered("1/4"),
            &rendered("1/2"),
            &rendered("3/8"),
            &rendered("1"),
            &Quantity::Unspecified,
        ]
    );
}

// ============================================================================
// File Loading
// ============================================================================

#[tokio::test]
async fn test_load_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("catalog.json");
    tokio::fs::write(
        &path,
        r#"[{
            "id": "x1",
            "title": "Miso Soup",
            "cuisines": ["Japanese"],
            "difficulty": "easy",
            "cookTime": 10,
            "servings": 2,
            "rating": 4.0,
            "ingredients": [{"quantity": "2", "unit": "tbsp", "item": "miso"}]
        }]"#,
    )
    .await?;

    let catalog = Catalog::load(&path).await?;
    assert_eq!(catalog.len(), 1);
    let soup = catalog.require("x1")?;
    assert_eq!(soup.ingredients[0].quantity, Quantity::Numeric(2.0));
    assert_eq!(soup.source, "");
    Ok(())
}

#[tokio::test]
async fn test_load_or_builtin_without_path() -> Result<()> {
    let catalog = Catalog::load_or_builtin(None).await?;
    assert_eq!(catalog, Catalog::builtin()?);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("nope.json")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = Catalog::from_json_str("[{\"id\": ").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_invalid_record_is_rejected_with_its_id() {
    let err = Catalog::from_json_str(
        r#"[{"id": "bad", "title": "T", "cuisines": [], "difficulty": "easy", "cookTime": 5, "servings": 1}]"#,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.resource_id.as_deref(), Some("bad"));
}
