use std::error::Error;
use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::ids::strip_namespace;

const BUNDLED: &str = include_str!("../assets/stack_sizes.toml");

/// Max stack size per item identifier.
///
/// ```toml
/// default = 64
///
/// [sizes]
/// ender_pearl = 16
/// diamond_sword = 1
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct StackSizes {
    #[serde(default = "default_max_stack")]
    pub default: u8,
    #[serde(default)]
    pub sizes: HashMap<String, u8>,
}

fn default_max_stack() -> u8 {
    64
}

impl Default for StackSizes {
    fn default() -> Self {
        Self {
            default: default_max_stack(),
            sizes: HashMap::new(),
        }
    }
}

impl StackSizes {
    /// Stack sizes shipped with the crate.
    pub fn vanilla() -> Self {
        match Self::from_toml_str(BUNDLED) {
            Ok(sizes) => sizes,
            Err(e) => panic!("bundled stack_sizes.toml is invalid: {e}"),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: StackSizes = toml::from_str(toml_str)?;
        if cfg.default == 0 {
            return Err("stack size `default` must be at least 1".into());
        }
        let mut sizes = HashMap::with_capacity(cfg.sizes.len());
        for (id, size) in cfg.sizes {
            if size == 0 {
                return Err(format!("stack size for `{id}` must be at least 1").into());
            }
            sizes.insert(strip_namespace(&id).to_string(), size);
        }
        Ok(Self {
            default: cfg.default,
            sizes,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn get(&self, id: &str) -> u8 {
        self.sizes
            .get(strip_namespace(id))
            .copied()
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_falls_back_to_64() {
        let sizes = StackSizes::from_toml_str("[sizes]\negg = 16\n").unwrap();
        assert_eq!(sizes.default, 64);
        assert_eq!(sizes.get("egg"), 16);
        assert_eq!(sizes.get("minecraft:egg"), 16);
        assert_eq!(sizes.get("stone"), 64);
    }

    #[test]
    fn namespaced_keys_are_normalized() {
        let sizes = StackSizes::from_toml_str("[sizes]\n\"minecraft:trident\" = 1\n").unwrap();
        assert_eq!(sizes.get("trident"), 1);
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(StackSizes::from_toml_str("default = 0\n").is_err());
        assert!(StackSizes::from_toml_str("[sizes]\nstone = 0\n").is_err());
    }

    #[test]
    fn bundled_table_parses() {
        let sizes = StackSizes::vanilla();
        assert_eq!(sizes.get("ender_pearl"), 16);
        assert_eq!(sizes.get("diamond_sword"), 1);
        assert_eq!(sizes.get("stone"), 64);
    }
}
