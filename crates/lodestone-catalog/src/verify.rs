//! Resolution audit over a built catalog.
//!
//! Every identifier a material carries must resolve back to that material,
//! except where a priority entry claims the identifier first.

use std::fmt;

use super::material::Material;
use super::registry::Catalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// The identifier resolves to nothing.
    Unresolved {
        material: String,
        raw_id: String,
        deprecated: bool,
    },
    /// The identifier resolves to another, non-priority material.
    Shadowed {
        material: String,
        raw_id: String,
        resolved: String,
        deprecated: bool,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool = |deprecated: bool| if deprecated { "deprecated " } else { "" };
        match self {
            Finding::Unresolved {
                material,
                raw_id,
                deprecated,
            } => write!(
                f,
                "{}material `{material}`: `{raw_id}` does not resolve",
                pool(*deprecated)
            ),
            Finding::Shadowed {
                material,
                raw_id,
                resolved,
                deprecated,
            } => write!(
                f,
                "{}material `{material}`: `{raw_id}` resolves to `{resolved}`",
                pool(*deprecated)
            ),
        }
    }
}

pub fn audit(catalog: &Catalog) -> Vec<Finding> {
    let mut findings = Vec::new();
    for material in catalog.materials() {
        for raw in material.raw_ids() {
            match catalog.lookup(raw) {
                Some(found) if found == material => {}
                Some(found) if catalog.is_priority(found) && !catalog.is_priority(material) => {}
                found => findings.push(finding(material, raw, found, false)),
            }
        }
    }
    for material in catalog.deprecated_materials() {
        for raw in material.raw_ids() {
            match catalog.lookup_deprecated(raw) {
                Some(found) if found == material => {}
                found => findings.push(finding(material, raw, found, true)),
            }
        }
    }
    if !findings.is_empty() {
        log::debug!("catalog audit: {} finding(s)", findings.len());
    }
    findings
}

fn finding(material: &Material, raw: &str, found: Option<&Material>, deprecated: bool) -> Finding {
    match found {
        None => Finding::Unresolved {
            material: material.name().to_string(),
            raw_id: raw.to_string(),
            deprecated,
        },
        Some(other) => Finding::Shadowed {
            material: material.name().to_string(),
            raw_id: raw.to_string(),
            resolved: other.name().to_string(),
            deprecated,
        },
    }
}
