//! Property-based tests using proptest
//!
//! These tests verify keyword resolution, path building and pretty-printing
//! using randomized inputs.

use proptest::prelude::*;
use serde_json::{json, Value};
use spctl::resource::render::to_pretty_json;
use spctl::resource::{ResourceKind, KEYWORDS};

/// Randomize the case of every character in `s`
fn arb_case(s: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), s.len()).prop_map(move |upper| {
        s.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn arb_keyword() -> impl Strategy<Value = (String, ResourceKind)> {
    prop_oneof![
        arb_case("service").prop_map(|k| (k, ResourceKind::Service)),
        arb_case("policy").prop_map(|k| (k, ResourceKind::Policy)),
        arb_case("rolepolicy").prop_map(|k| (k, ResourceKind::RolePolicy)),
        arb_case("function").prop_map(|k| (k, ResourceKind::Function)),
    ]
}

fn arb_kind() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Service),
        Just(ResourceKind::Policy),
        Just(ResourceKind::RolePolicy),
        Just(ResourceKind::Function),
    ]
}

/// Generate a flat PMS-like document
fn arb_document() -> impl Strategy<Value = Value> {
    (
        "[a-z][a-z0-9-]{0,20}",
        prop_oneof!["grant", "deny"],
        prop::collection::vec("[a-z:]{1,12}", 0..5),
        any::<i64>(),
    )
        .prop_map(|(name, effect, roles, ttl)| {
            json!({"name": name, "effect": effect, "roles": roles, "ttl": ttl})
        })
}

proptest! {
    #[test]
    fn resolve_ignores_case((keyword, kind) in arb_keyword()) {
        prop_assert_eq!(ResourceKind::resolve(&keyword).unwrap(), kind);
    }

    #[test]
    fn resolve_rejects_everything_else(keyword in "[a-zA-Z-]{0,16}") {
        prop_assume!(!KEYWORDS.contains(&keyword.to_lowercase().as_str()));
        prop_assert!(ResourceKind::resolve(&keyword).unwrap_err().wants_help());
    }

    #[test]
    fn item_path_is_collection_path_plus_name(
        kind in arb_kind(),
        scope in "[a-zA-Z0-9]{1,12}",
        name in "[^/]{1,24}",
    ) {
        let collection = kind.build_path(Some(&scope), None);
        let item = kind.build_path(Some(&scope), Some(&name));

        prop_assert_eq!(item.len(), collection.len() + 1);
        prop_assert_eq!(&item[..collection.len()], &collection[..]);
        prop_assert_eq!(item.last().unwrap(), &name);
        prop_assert_eq!(collection.last().unwrap().as_str(), kind.path_keyword());
        if kind.requires_scope() {
            prop_assert_eq!(&collection[1], &scope);
        }
    }

    #[test]
    fn pretty_json_round_trips(doc in arb_document()) {
        let out = to_pretty_json(&doc).unwrap();
        let back: Value = serde_json::from_str(&out).unwrap();
        prop_assert_eq!(back, doc);
        prop_assert!(out.contains("\n    \"name\""));
    }
}
