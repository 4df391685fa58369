use std::fmt;
use std::hash::{Hash, Hasher};

use lodestone_host::ids::{namespaced, strip_namespace};
use lodestone_host::{
    BlockHandle, BlockPermutationHandle, BlockTypeHandle, Host, ItemStackHandle, ItemTypeHandle,
};

use super::config::MaterialDef;
use super::error::CatalogError;
use super::tag::Tag;
use super::types::{MaterialId, TagId};

/// A catalog entry binding a block identifier and/or an item identifier.
///
/// Materials are created only while a [`crate::Catalog`] is built, and at
/// least one of the two identifiers is always present. Equality and hashing
/// use the [`MaterialId`].
#[derive(Clone, Debug)]
pub struct Material {
    id: MaterialId,
    name: String,
    block_id: Option<String>,
    item_id: Option<String>,
    block_properties: Vec<String>,
    // Sorted; assigned from the catalog's membership index
    tags: Vec<TagId>,
    deprecated: bool,
}

impl Material {
    pub(crate) fn new(id: MaterialId, def: MaterialDef, deprecated: bool) -> Self {
        Self {
            id,
            name: def.name,
            block_id: def.block,
            item_id: def.item,
            block_properties: def.properties,
            tags: Vec::new(),
            deprecated,
        }
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<TagId>) {
        self.tags = tags;
    }

    pub fn id(&self) -> MaterialId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        self.block_id.is_some()
    }

    #[inline]
    pub fn is_item(&self) -> bool {
        self.item_id.is_some()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Block id then item id, whichever are present.
    pub fn raw_ids(&self) -> impl Iterator<Item = &str> {
        self.block_id
            .as_deref()
            .into_iter()
            .chain(self.item_id.as_deref())
    }

    pub fn block_property_names(&self) -> Result<&[String], CatalogError> {
        self.require_block()?;
        Ok(&self.block_properties)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.binary_search(&tag.id()).is_ok()
    }

    pub fn tag_ids(&self) -> &[TagId] {
        &self.tags
    }

    pub fn as_item_type<H: Host>(&self, host: &H) -> Result<H::ItemType, CatalogError> {
        let id = namespaced(self.require_item()?);
        host.item_type(&id)
            .ok_or(CatalogError::MissingItemType(id))
    }

    pub fn as_block_type<H: Host>(&self, host: &H) -> Result<H::BlockType, CatalogError> {
        let id = namespaced(self.require_block()?);
        host.block_type(&id)
            .ok_or(CatalogError::MissingBlockType(id))
    }

    pub fn item_max_stack_size<H: Host>(&self, host: &H) -> Result<u8, CatalogError> {
        let ty = self.as_item_type(host)?;
        Ok(host.max_stack_size(&ty))
    }

    pub fn matches_item_stack<S: ItemStackHandle + ?Sized>(
        &self,
        stack: &S,
    ) -> Result<bool, CatalogError> {
        self.matches_item_id(stack.type_id())
    }

    pub fn matches_item_type<T: ItemTypeHandle + ?Sized>(
        &self,
        item_type: &T,
    ) -> Result<bool, CatalogError> {
        self.matches_item_id(item_type.id())
    }

    pub fn matches_block<B: BlockHandle + ?Sized>(&self, block: &B) -> Result<bool, CatalogError> {
        self.matches_block_id(block.type_id())
    }

    pub fn matches_permutation<P: BlockPermutationHandle + ?Sized>(
        &self,
        permutation: &P,
    ) -> Result<bool, CatalogError> {
        self.matches_block_id(permutation.type_id())
    }

    pub fn matches_block_type<T: BlockTypeHandle + ?Sized>(
        &self,
        block_type: &T,
    ) -> Result<bool, CatalogError> {
        self.matches_block_id(block_type.id())
    }

    fn matches_item_id(&self, raw: &str) -> Result<bool, CatalogError> {
        let id = self.require_item()?;
        Ok(strip_namespace(raw) == strip_namespace(id))
    }

    fn matches_block_id(&self, raw: &str) -> Result<bool, CatalogError> {
        let id = self.require_block()?;
        Ok(strip_namespace(raw) == strip_namespace(id))
    }

    fn require_item(&self) -> Result<&str, CatalogError> {
        self.item_id
            .as_deref()
            .ok_or_else(|| CatalogError::NotAnItem(self.name.clone()))
    }

    fn require_block(&self) -> Result<&str, CatalogError> {
        self.block_id
            .as_deref()
            .ok_or_else(|| CatalogError::NotABlock(self.name.clone()))
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
