//! Material and tag catalog over a host engine's block and item identifiers.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod material;
pub mod registry;
pub mod tag;
pub mod types;
pub mod verify;
mod vanilla;

pub use error::CatalogError;
pub use lodestone_host::ids::{namespaced, strip_namespace};
pub use material::Material;
pub use registry::Catalog;
pub use tag::Tag;
pub use types::{MaterialId, TagId};
pub use vanilla::vanilla;
