use std::fmt;
use std::hash::{Hash, Hasher};

use super::types::TagId;

/// A named classification bucket. Built only by [`crate::Catalog`].
#[derive(Clone, Debug)]
pub struct Tag {
    id: TagId,
    key: String,
    display_name: String,
    members: Vec<String>,
}

impl Tag {
    pub(crate) fn new(id: TagId, key: String, display_name: String, members: Vec<String>) -> Self {
        Self {
            id,
            key,
            display_name,
            members,
        }
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Raw identifiers in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
