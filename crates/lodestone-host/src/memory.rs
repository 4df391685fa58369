//! In-memory host used by tools and tests.

use std::collections::BTreeMap;
use std::fmt;

use hashbrown::HashSet;

use crate::ids::namespaced;
use crate::stack::StackSizes;
use crate::{BlockHandle, BlockPermutationHandle, BlockTypeHandle, Host, ItemStackHandle, ItemTypeHandle};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemoryItemType {
    id: String,
}

impl ItemTypeHandle for MemoryItemType {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemoryBlockType {
    id: String,
}

impl BlockTypeHandle for MemoryBlockType {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryItemStack {
    item: MemoryItemType,
    amount: u8,
}

impl MemoryItemStack {
    pub fn item_type(&self) -> &MemoryItemType {
        &self.item
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }
}

impl ItemStackHandle for MemoryItemStack {
    fn type_id(&self) -> &str {
        &self.item.id
    }
}

/// Value of a single block state property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateValue {
    Bool(bool),
    Int(i32),
    Str(String),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{b}"),
            StateValue::Int(i) => write!(f, "{i}"),
            StateValue::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryPermutation {
    block: MemoryBlockType,
    states: BTreeMap<String, StateValue>,
}

impl MemoryPermutation {
    pub fn block_type(&self) -> &MemoryBlockType {
        &self.block
    }

    pub fn with_state(mut self, name: impl Into<String>, value: StateValue) -> Self {
        self.states.insert(name.into(), value);
        self
    }

    pub fn state(&self, name: &str) -> Option<&StateValue> {
        self.states.get(name)
    }

    /// States in property-name order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl BlockPermutationHandle for MemoryPermutation {
    fn type_id(&self) -> &str {
        &self.block.id
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryBlock {
    pos: [i32; 3],
    permutation: MemoryPermutation,
}

impl MemoryBlock {
    pub fn position(&self) -> [i32; 3] {
        self.pos
    }
}

impl BlockHandle for MemoryBlock {
    type Permutation = MemoryPermutation;

    fn type_id(&self) -> &str {
        &self.permutation.block.id
    }

    fn permutation(&self) -> MemoryPermutation {
        self.permutation.clone()
    }
}

/// Host whose registries are plain sets of namespaced identifiers.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    items: HashSet<String>,
    blocks: HashSet<String>,
    stack_sizes: StackSizes,
}

impl MemoryHost {
    pub fn new(stack_sizes: StackSizes) -> Self {
        Self {
            items: HashSet::new(),
            blocks: HashSet::new(),
            stack_sizes,
        }
    }

    pub fn register_item(&mut self, id: &str) -> MemoryItemType {
        let id = namespaced(id);
        self.items.insert(id.clone());
        MemoryItemType { id }
    }

    pub fn register_block(&mut self, id: &str) -> MemoryBlockType {
        let id = namespaced(id);
        self.blocks.insert(id.clone());
        MemoryBlockType { id }
    }

    pub fn with_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.items.len();
        for id in ids {
            self.register_item(id.as_ref());
        }
        log::debug!("memory host: {} item type(s) registered", self.items.len() - before);
        self
    }

    pub fn with_blocks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.blocks.len();
        for id in ids {
            self.register_block(id.as_ref());
        }
        log::debug!("memory host: {} block type(s) registered", self.blocks.len() - before);
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// A stack of a registered item; `amount` is clamped to `1..=max stack size`.
    pub fn item_stack(&self, id: &str, amount: u8) -> Option<MemoryItemStack> {
        let item = self.item_type(id)?;
        let max = self.max_stack_size(&item);
        Some(MemoryItemStack {
            item,
            amount: amount.clamp(1, max.max(1)),
        })
    }

    /// Default permutation (no states set) of a registered block.
    pub fn permutation(&self, id: &str) -> Option<MemoryPermutation> {
        let block = self.block_type(id)?;
        Some(MemoryPermutation {
            block,
            states: BTreeMap::new(),
        })
    }

    pub fn place(&self, pos: [i32; 3], permutation: MemoryPermutation) -> MemoryBlock {
        MemoryBlock { pos, permutation }
    }
}

impl Host for MemoryHost {
    type ItemType = MemoryItemType;
    type BlockType = MemoryBlockType;

    fn item_type(&self, id: &str) -> Option<MemoryItemType> {
        let id = namespaced(id);
        self.items.contains(&id).then_some(MemoryItemType { id })
    }

    fn block_type(&self, id: &str) -> Option<MemoryBlockType> {
        let id = namespaced(id);
        self.blocks.contains(&id).then_some(MemoryBlockType { id })
    }

    fn max_stack_size(&self, item: &MemoryItemType) -> u8 {
        self.stack_sizes.get(&item.id)
    }
}
