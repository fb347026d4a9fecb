//! Property-based tests for the Template Substitution Engine
//!
//! Tests invariants:
//! - Known tokens never survive as literal `{token}` text
//! - Unknown tokens are preserved verbatim
//! - Every fill value comes from the token's candidate list

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::template::{referenced_tokens, TemplateSet};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Token names distinct from fill values (uppercase vs lowercase).
fn arb_token_name() -> impl Strategy<Value = String> {
    "[A-Z]{1,6}"
}

fn arb_fill_value() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// A token map of 1-4 tokens with 1-5 candidates each.
fn arb_tokens() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::btree_map(
        arb_token_name(),
        prop::collection::vec(arb_fill_value(), 1..=5),
        1..=4,
    )
    .prop_map(|m| m.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn known_tokens_are_always_substituted(
        tokens in arb_tokens(),
        seed in any::<u64>(),
    ) {
        // Build a template that references every known token once.
        let template = tokens
            .iter()
            .map(|(name, _)| format!("{{{name}}}"))
            .collect::<Vec<_>>()
            .join(" ");

        let mut set = TemplateSet::new().with_template(template.clone());
        for (name, values) in &tokens {
            set = set.with_token(name.clone(), values.clone());
        }

        let out = set.render(&mut StdRng::seed_from_u64(seed)).unwrap();
        for (name, _) in &tokens {
            let literal = format!("{{{name}}}");
            prop_assert!(!out.contains(&literal));
        }
    }

    #[test]
    fn unknown_tokens_survive_verbatim(
        tokens in arb_tokens(),
        seed in any::<u64>(),
    ) {
        let template = "start {MISSINGTOKEN} end";
        let mut set = TemplateSet::new().with_template(template);
        for (name, values) in &tokens {
            // Strategy names are at most 6 chars, so MISSINGTOKEN can
            // never be a known token.
            set = set.with_token(name.clone(), values.clone());
        }

        let out = set.render(&mut StdRng::seed_from_u64(seed)).unwrap();
        let missing = "{MISSINGTOKEN}";
        prop_assert!(out.contains(missing));
        prop_assert!(out.starts_with("start "));
        prop_assert!(out.ends_with(" end"));
    }

    #[test]
    fn fill_values_come_from_candidate_lists(
        name in arb_token_name(),
        values in prop::collection::vec(arb_fill_value(), 1..=5),
        seed in any::<u64>(),
    ) {
        let set = TemplateSet::new()
            .with_template(format!("<{{{name}}}>"))
            .with_token(name.clone(), values.clone());

        let out = set.render(&mut StdRng::seed_from_u64(seed)).unwrap();
        let inner = out.trim_start_matches('<').trim_end_matches('>');
        prop_assert!(values.iter().any(|v| v == inner));
    }

    #[test]
    fn referenced_tokens_agree_with_render(
        tokens in arb_tokens(),
    ) {
        let template = tokens
            .iter()
            .map(|(name, _)| format!("{{{name}}}"))
            .collect::<Vec<_>>()
            .join(" and ");
        let names: Vec<&str> = referenced_tokens(&template);
        prop_assert_eq!(names.len(), tokens.len());
    }
}
