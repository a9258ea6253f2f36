//! YAML node access

pub mod document;
pub mod entity;

pub use document::load_first_document;
pub use entity::{Entity, EntityExt, YamlEntity};
