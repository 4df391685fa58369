use std::sync::OnceLock;

use super::registry::Catalog;

const TAGS_TOML: &str = include_str!("../assets/tags.toml");
const MATERIALS_TOML: &str = include_str!("../assets/materials.toml");

static VANILLA: OnceLock<Catalog> = OnceLock::new();

/// The catalog bundled with the crate, built on first use.
pub fn vanilla() -> &'static Catalog {
    VANILLA.get_or_init(|| match Catalog::from_toml_strs(TAGS_TOML, MATERIALS_TOML) {
        Ok(catalog) => catalog,
        Err(e) => panic!("bundled material catalog is invalid: {e}"),
    })
}
