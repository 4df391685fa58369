use lodestone_catalog::{Catalog, Material, strip_namespace, vanilla};
use proptest::prelude::*;

// First-match scan over the registry, the reference for indexed lookup.
fn scan<'a>(catalog: &'a Catalog, raw: &str) -> Option<&'a Material> {
    let key = strip_namespace(raw);
    catalog
        .materials()
        .iter()
        .find(|m| m.raw_ids().any(|id| strip_namespace(id) == key))
}

fn material_index() -> impl Strategy<Value = usize> {
    0..vanilla().materials().len()
}

fn deprecated_index() -> impl Strategy<Value = usize> {
    0..vanilla().deprecated_materials().len()
}

fn prefixed(raw: &str, with_namespace: bool) -> String {
    if with_namespace {
        format!("minecraft:{raw}")
    } else {
        raw.to_string()
    }
}

proptest! {
    // Every id of a material resolves to it, or to a priority entry declared ahead of it
    #[test]
    fn ids_round_trip(i in material_index(), ns in any::<bool>()) {
        let catalog = vanilla();
        let m = &catalog.materials()[i];
        for raw in m.raw_ids() {
            let found = catalog.lookup(&prefixed(raw, ns)).unwrap();
            if found != m {
                prop_assert!(catalog.is_priority(found));
                prop_assert!(!catalog.is_priority(m));
                prop_assert!(found.id() < m.id());
            }
        }
    }

    // Priority entries always resolve to themselves
    #[test]
    fn priority_entries_resolve_to_themselves(ns in any::<bool>()) {
        let catalog = vanilla();
        for m in catalog.priority_materials() {
            for raw in m.raw_ids() {
                prop_assert_eq!(catalog.lookup(&prefixed(raw, ns)), Some(m));
            }
        }
    }

    // Deprecated entries resolve only through the deprecated lookup
    #[test]
    fn deprecated_round_trip(i in deprecated_index(), ns in any::<bool>()) {
        let catalog = vanilla();
        let m = &catalog.deprecated_materials()[i];
        for raw in m.raw_ids() {
            prop_assert_eq!(catalog.lookup_deprecated(&prefixed(raw, ns)), Some(m));
            if let Some(current) = catalog.lookup(raw) {
                prop_assert!(!current.is_deprecated());
            }
        }
    }

    // Indexed lookup agrees with the linear first-match scan on arbitrary input
    #[test]
    fn lookup_matches_linear_scan(raw in "(minecraft:)?[a-z_]{1,12}") {
        let catalog = vanilla();
        prop_assert_eq!(catalog.lookup(&raw), scan(catalog, &raw));
    }

    // Lookup by a known id agrees with the scan as well, including collisions
    #[test]
    fn known_ids_match_linear_scan(i in material_index()) {
        let catalog = vanilla();
        for raw in catalog.materials()[i].raw_ids() {
            prop_assert_eq!(catalog.lookup(raw), scan(catalog, raw));
        }
    }

    // Tags follow set membership of the block or item id
    #[test]
    fn tags_follow_membership(i in material_index()) {
        let catalog = vanilla();
        let m = &catalog.materials()[i];
        for tag in catalog.tags() {
            let listed = m.raw_ids().any(|raw| tag.members().iter().any(|x| x == raw));
            prop_assert_eq!(m.has_tag(tag), listed);
        }
    }
}
