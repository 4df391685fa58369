use std::fs;
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use lodestone_host::ids::strip_namespace;
use lodestone_host::{
    BlockHandle, BlockPermutationHandle, BlockTypeHandle, ItemStackHandle, ItemTypeHandle,
};

use super::config::{MaterialDef, MaterialsConfig, TagsConfig};
use super::error::CatalogError;
use super::material::Material;
use super::tag::Tag;
use super::types::{MaterialId, TagId};

/// Immutable tag and material registries plus their lookup indexes.
///
/// Materials are stored in one arena: priority entries first, then the
/// regular entries, then the deprecated pool.
#[derive(Clone, Debug)]
pub struct Catalog {
    tags: Vec<Tag>,
    tag_by_key: HashMap<String, TagId>,
    materials: Vec<Material>,
    priority_len: usize,
    regular_len: usize,
    // Namespace-stripped raw id -> first material carrying it
    by_raw_id: HashMap<String, MaterialId>,
    deprecated_by_raw_id: HashMap<String, MaterialId>,
    by_name: HashMap<String, MaterialId>,
    deprecated_by_name: HashMap<String, MaterialId>,
}

impl Catalog {
    pub fn load_from_paths(
        tags_path: impl AsRef<Path>,
        materials_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let tags_toml = read(tags_path.as_ref())?;
        let materials_toml = read(materials_path.as_ref())?;
        Self::from_toml_strs(&tags_toml, &materials_toml)
    }

    pub fn from_toml_strs(tags_toml: &str, materials_toml: &str) -> Result<Self, CatalogError> {
        let tags: TagsConfig = toml::from_str(tags_toml)?;
        let materials: MaterialsConfig = toml::from_str(materials_toml)?;
        Self::from_configs(tags, materials)
    }

    pub fn from_configs(tags: TagsConfig, materials: MaterialsConfig) -> Result<Self, CatalogError> {
        let id_limit = u16::MAX as usize + 1;
        if tags.tags.len() > id_limit {
            return Err(CatalogError::Invalid(format!(
                "{} tags exceed the limit of {id_limit}",
                tags.tags.len()
            )));
        }
        let total = materials.priority.len() + materials.materials.len() + materials.deprecated.len();
        if total > id_limit {
            return Err(CatalogError::Invalid(format!(
                "{total} materials exceed the limit of {id_limit}"
            )));
        }

        let mut tag_list: Vec<Tag> = Vec::with_capacity(tags.tags.len());
        let mut tag_by_key: HashMap<String, TagId> = HashMap::with_capacity(tags.tags.len());
        for def in tags.tags {
            if def.key.is_empty() {
                return Err(CatalogError::Invalid("tag with empty key".into()));
            }
            if tag_by_key.contains_key(&def.key) {
                return Err(CatalogError::Invalid(format!("duplicate tag key `{}`", def.key)));
            }
            let id = TagId(tag_list.len() as u16);
            tag_by_key.insert(def.key.clone(), id);
            tag_list.push(Tag::new(id, def.key, def.name, def.members));
        }

        let priority_len = materials.priority.len();
        let regular_len = priority_len + materials.materials.len();
        let mut list: Vec<Material> = Vec::with_capacity(total);
        let pools = [
            (materials.priority, false),
            (materials.materials, false),
            (materials.deprecated, true),
        ];
        for (defs, deprecated) in pools {
            for def in defs {
                validate(&def)?;
                let id = MaterialId(list.len() as u16);
                list.push(Material::new(id, def, deprecated));
            }
        }

        // Both indexes borrow the lists; scope them before the move into `Catalog`.
        {
            // Invert the membership table once so tag checks are index lookups.
            let mut tags_by_member: HashMap<&str, Vec<TagId>> = HashMap::new();
            for tag in &tag_list {
                for member in tag.members() {
                    tags_by_member.entry(member.as_str()).or_default().push(tag.id());
                }
            }
            for material in list.iter_mut() {
                let mut ids: Vec<TagId> = material
                    .raw_ids()
                    .filter_map(|raw| tags_by_member.get(raw))
                    .flatten()
                    .copied()
                    .collect();
                ids.sort_unstable();
                ids.dedup();
                material.set_tags(ids);
            }
            let known: HashSet<&str> = list.iter().flat_map(Material::raw_ids).collect();
            for tag in &tag_list {
                let missing = tag
                    .members()
                    .iter()
                    .filter(|m| !known.contains(m.as_str()))
                    .count();
                if missing > 0 {
                    log::warn!(
                        "tag `{}` lists {} identifier(s) with no catalogued material",
                        tag.key(),
                        missing
                    );
                }
            }
        }

        let (by_raw_id, by_name) = index_pool(&list[..regular_len])?;
        let (deprecated_by_raw_id, deprecated_by_name) = index_pool(&list[regular_len..])?;

        log::debug!(
            "material catalog: {} tag(s), {} material(s) ({} priority), {} deprecated",
            tag_list.len(),
            regular_len,
            priority_len,
            list.len() - regular_len
        );

        Ok(Catalog {
            tags: tag_list,
            tag_by_key,
            materials: list,
            priority_len,
            regular_len,
            by_raw_id,
            deprecated_by_raw_id,
            by_name,
            deprecated_by_name,
        })
    }

    /// Tags in declaration order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tag_by_key.get(key).map(|id| &self.tags[id.index()])
    }

    pub fn tag_by_id(&self, id: TagId) -> Option<&Tag> {
        self.tags.get(id.index())
    }

    /// Regular materials in registry order, priority entries first.
    /// Deprecated materials are not included.
    pub fn materials(&self) -> &[Material] {
        &self.materials[..self.regular_len]
    }

    pub fn priority_materials(&self) -> &[Material] {
        &self.materials[..self.priority_len]
    }

    pub fn deprecated_materials(&self) -> &[Material] {
        &self.materials[self.regular_len..]
    }

    pub fn is_priority(&self, material: &Material) -> bool {
        material.id().index() < self.priority_len
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    pub fn material_by_name(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).map(|id| &self.materials[id.index()])
    }

    pub fn deprecated_by_name(&self, name: &str) -> Option<&Material> {
        self.deprecated_by_name
            .get(name)
            .map(|id| &self.materials[id.index()])
    }

    /// Resolves a raw identifier, with or without the `minecraft:` namespace,
    /// to the first regular material whose block or item id matches.
    pub fn lookup(&self, raw_id: &str) -> Option<&Material> {
        self.by_raw_id
            .get(strip_namespace(raw_id))
            .map(|id| &self.materials[id.index()])
    }

    /// Same as [`Catalog::lookup`], restricted to the deprecated pool.
    pub fn lookup_deprecated(&self, raw_id: &str) -> Option<&Material> {
        self.deprecated_by_raw_id
            .get(strip_namespace(raw_id))
            .map(|id| &self.materials[id.index()])
    }

    pub fn material_for_item_stack<S: ItemStackHandle + ?Sized>(
        &self,
        stack: &S,
    ) -> Result<&Material, CatalogError> {
        self.resolve_host_id(stack.type_id())
    }

    pub fn material_for_item_type<T: ItemTypeHandle + ?Sized>(
        &self,
        item_type: &T,
    ) -> Result<&Material, CatalogError> {
        self.resolve_host_id(item_type.id())
    }

    pub fn material_for_block<B: BlockHandle + ?Sized>(
        &self,
        block: &B,
    ) -> Result<&Material, CatalogError> {
        self.resolve_host_id(block.type_id())
    }

    pub fn material_for_permutation<P: BlockPermutationHandle + ?Sized>(
        &self,
        permutation: &P,
    ) -> Result<&Material, CatalogError> {
        self.resolve_host_id(permutation.type_id())
    }

    pub fn material_for_block_type<T: BlockTypeHandle + ?Sized>(
        &self,
        block_type: &T,
    ) -> Result<&Material, CatalogError> {
        self.resolve_host_id(block_type.id())
    }

    /// Tags carried by `material`, in tag declaration order.
    pub fn tags_of(&self, material: &Material) -> Vec<&Tag> {
        self.tags.iter().filter(|t| material.has_tag(t)).collect()
    }

    pub fn materials_with_tag<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Material> + 'a {
        self.materials().iter().filter(move |m| m.has_tag(tag))
    }

    /// Item ids of the regular materials, each once.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.materials()
            .iter()
            .filter_map(Material::item_id)
            .filter(move |id| seen.insert(*id))
    }

    /// Block ids of the regular materials, each once.
    pub fn block_ids(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.materials()
            .iter()
            .filter_map(Material::block_id)
            .filter(move |id| seen.insert(*id))
    }

    /// Item ids across every pool, deprecated included, each once.
    pub fn all_item_ids(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.materials
            .iter()
            .filter_map(Material::item_id)
            .filter(move |id| seen.insert(*id))
    }

    /// Block ids across every pool, deprecated included, each once.
    pub fn all_block_ids(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.materials
            .iter()
            .filter_map(Material::block_id)
            .filter(move |id| seen.insert(*id))
    }

    fn resolve_host_id(&self, raw_id: &str) -> Result<&Material, CatalogError> {
        self.lookup(raw_id).ok_or_else(|| {
            log::warn!("host identifier `{raw_id}` has no catalogued material");
            CatalogError::Uncatalogued(raw_id.to_string())
        })
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(def: &MaterialDef) -> Result<(), CatalogError> {
    if def.name.is_empty() {
        return Err(CatalogError::Invalid("material with empty name".into()));
    }
    if def.block.is_none() && def.item.is_none() {
        return Err(CatalogError::Invalid(format!(
            "material `{}` has neither a block nor an item identifier",
            def.name
        )));
    }
    if def.block.as_deref() == Some("") || def.item.as_deref() == Some("") {
        return Err(CatalogError::Invalid(format!(
            "material `{}` has an empty identifier",
            def.name
        )));
    }
    if def.block.is_none() && !def.properties.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "material `{}` declares block properties but no block",
            def.name
        )));
    }
    Ok(())
}

type PoolIndex = (HashMap<String, MaterialId>, HashMap<String, MaterialId>);

// First registration of an id wins, which keeps priority entries ahead.
fn index_pool(pool: &[Material]) -> Result<PoolIndex, CatalogError> {
    let mut by_raw_id: HashMap<String, MaterialId> = HashMap::with_capacity(pool.len() * 2);
    let mut by_name: HashMap<String, MaterialId> = HashMap::with_capacity(pool.len());
    for material in pool {
        if by_name
            .insert(material.name().to_string(), material.id())
            .is_some()
        {
            return Err(CatalogError::Invalid(format!(
                "duplicate material name `{}`",
                material.name()
            )));
        }
        for raw in material.raw_ids() {
            by_raw_id
                .entry(strip_namespace(raw).to_string())
                .or_insert(material.id());
        }
    }
    Ok((by_raw_id, by_name))
}
