use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("material `{0}` is not a block")]
    NotABlock(String),

    #[error("material `{0}` is not an item")]
    NotAnItem(String),

    #[error("host has no item type `{0}`")]
    MissingItemType(String),

    #[error("host has no block type `{0}`")]
    MissingBlockType(String),

    #[error("host identifier `{0}` has no catalogued material")]
    Uncatalogued(String),

    #[error("invalid catalog data: {0}")]
    Invalid(String),

    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
