//! Property-based tests for the Selection Engine
//!
//! Tests invariants:
//! - Selected items are members of the catalog (union or named category)
//! - A batch of N joins exactly N items on the separator
//! - Named requests echo the requested category
//! - Deterministic given the same seed

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::catalog::Catalog;
use crate::core::selection::{CategoryChoice, SelectionEngine, SelectionRequest};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an item string that cannot collide with the batch separator.
fn arb_item() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Generate a catalog with 1-5 categories of 1-8 items each.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(prop::collection::vec(arb_item(), 1..=8), 1..=5).prop_map(|lists| {
        let mut catalog = Catalog::new("prop");
        for (i, items) in lists.into_iter().enumerate() {
            catalog = catalog.with_category(format!("cat{i}"), items);
        }
        catalog
    })
}

/// Generate a batch count.
fn arb_count() -> impl Strategy<Value = u32> {
    1u32..=8
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn any_mode_draws_members_of_the_union(
        catalog in arb_catalog(),
        count in arb_count(),
        seed in any::<u64>(),
    ) {
        let engine = SelectionEngine::new();
        let request = SelectionRequest::any().with_count(count);
        let mut rng = StdRng::seed_from_u64(seed);

        let result = engine.select(&catalog, &request, &mut rng).unwrap();
        let union: Vec<&str> = catalog.all_items().collect();

        let parts: Vec<&str> = result.text.split("\n\n").collect();
        prop_assert_eq!(parts.len(), count as usize);
        for part in parts {
            prop_assert!(union.contains(&part));
        }
        prop_assert_eq!(result.is_batch, count > 1);
    }

    #[test]
    fn named_mode_draws_from_exactly_that_category(
        catalog in arb_catalog(),
        count in arb_count(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = catalog.category_keys().map(String::from).collect();
        let key = keys[pick.index(keys.len())].clone();

        let engine = SelectionEngine::new();
        let request = SelectionRequest {
            category: CategoryChoice::Named(key.clone()),
            count,
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let result = engine.select(&catalog, &request, &mut rng).unwrap();
        prop_assert_eq!(&result.category, &key);

        let items = catalog.items(&key).unwrap();
        for part in result.text.split("\n\n") {
            prop_assert!(items.iter().any(|i| i == part));
        }
    }

    #[test]
    fn same_seed_same_text(
        catalog in arb_catalog(),
        count in arb_count(),
        seed in any::<u64>(),
    ) {
        let engine = SelectionEngine::new();
        let request = SelectionRequest::any().with_count(count);

        let a = engine
            .select(&catalog, &request, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let b = engine
            .select(&catalog, &request, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(a.text, b.text);
        prop_assert_eq!(a.category, b.category);
    }

    #[test]
    fn results_get_unique_ids(
        catalog in arb_catalog(),
        seed in any::<u64>(),
    ) {
        let engine = SelectionEngine::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let a = engine.select(&catalog, &SelectionRequest::any(), &mut rng).unwrap();
        let b = engine.select(&catalog, &SelectionRequest::any(), &mut rng).unwrap();
        prop_assert_ne!(a.id, b.id);
    }
}
