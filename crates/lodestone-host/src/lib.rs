//! Host engine surface consumed by the material catalog.
#![forbid(unsafe_code)]

pub mod ids;
pub mod memory;
pub mod stack;

pub use memory::{
    MemoryBlock, MemoryBlockType, MemoryHost, MemoryItemStack, MemoryItemType, MemoryPermutation,
    StateValue,
};
pub use stack::StackSizes;

/// An item type as the host engine names it.
pub trait ItemTypeHandle {
    /// Namespaced identifier, e.g. `minecraft:stone`.
    fn id(&self) -> &str;
}

/// A block type as the host engine names it.
pub trait BlockTypeHandle {
    fn id(&self) -> &str;
}

/// A live stack of items.
pub trait ItemStackHandle {
    /// Identifier of the stack's item type.
    fn type_id(&self) -> &str;
}

/// A block type together with concrete state values.
pub trait BlockPermutationHandle {
    fn type_id(&self) -> &str;
}

/// A block placed in the world.
pub trait BlockHandle {
    type Permutation: BlockPermutationHandle;

    fn type_id(&self) -> &str;
    fn permutation(&self) -> Self::Permutation;
}

/// Item and block type registries of the host engine.
///
/// Lookups accept namespaced or bare identifiers. `None` means the host does
/// not know the identifier at all.
pub trait Host {
    type ItemType: ItemTypeHandle;
    type BlockType: BlockTypeHandle;

    fn item_type(&self, id: &str) -> Option<Self::ItemType>;
    fn block_type(&self, id: &str) -> Option<Self::BlockType>;
    fn max_stack_size(&self, item: &Self::ItemType) -> u8;
}

impl<T: ItemTypeHandle + ?Sized> ItemTypeHandle for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: BlockTypeHandle + ?Sized> BlockTypeHandle for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: ItemStackHandle + ?Sized> ItemStackHandle for &T {
    fn type_id(&self) -> &str {
        (**self).type_id()
    }
}

impl<T: BlockPermutationHandle + ?Sized> BlockPermutationHandle for &T {
    fn type_id(&self) -> &str {
        (**self).type_id()
    }
}
