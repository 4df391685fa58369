use std::path::{Path, PathBuf};

pub const ENV_VAR: &str = "LODESTONE_ASSETS";

/// Data directory to load instead of the bundled catalog, if any.
pub fn resolve_data_dir(cli: Option<PathBuf>) -> Option<PathBuf> {
    resolve_data_dir_from(cli, std::env::var(ENV_VAR).ok())
}

pub fn resolve_data_dir_from(cli: Option<PathBuf>, env: Option<String>) -> Option<PathBuf> {
    // Precedence: CLI flag -> LODESTONE_ASSETS env -> bundled data
    if let Some(p) = cli {
        return Some(p);
    }
    env.filter(|p| !p.is_empty()).map(PathBuf::from)
}

pub fn tags_path(root: &Path) -> PathBuf {
    root.join("tags.toml")
}

pub fn materials_path(root: &Path) -> PathBuf {
    root.join("materials.toml")
}

pub fn stack_sizes_path(root: &Path) -> PathBuf {
    root.join("stack_sizes.toml")
}
