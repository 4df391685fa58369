/// Position of a material in its catalog. Unique across all pools.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MaterialId(pub u16);

impl MaterialId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declaration index of a tag.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TagId(pub u16);

impl TagId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
