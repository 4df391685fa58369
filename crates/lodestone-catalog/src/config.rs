use serde::Deserialize;

// Top-level materials file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MaterialsConfig {
    // Registered ahead of `materials`; wins lookups on shared identifiers
    #[serde(default)]
    pub priority: Vec<MaterialDef>,
    #[serde(default)]
    pub materials: Vec<MaterialDef>,
    // Only reachable through the deprecated lookup
    #[serde(default)]
    pub deprecated: Vec<MaterialDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MaterialDef {
    pub name: String,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    // Block state property names; requires `block`
    #[serde(default)]
    pub properties: Vec<String>,
}

// Top-level tags file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TagsConfig {
    #[serde(default)]
    pub tags: Vec<TagDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TagDef {
    pub key: String,
    pub name: String,
    // Raw identifiers, compared verbatim against material ids
    #[serde(default)]
    pub members: Vec<String>,
}
