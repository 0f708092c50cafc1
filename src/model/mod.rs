//! The resolved persistence model: entities, their fields and the
//! inheritance-aware registry built from a schema tree.

pub mod attribute;
pub mod builder;
pub mod entity;
pub mod field;
pub mod registry;
pub mod relationship;
pub mod user_info;

pub use attribute::{Attribute, normalize_default, normalize_type};
pub use builder::build;
pub use entity::Entity;
pub use field::FieldInfo;
pub use registry::{Ancestors, EntityRef, Registry};
pub use relationship::Relationship;
pub use user_info::{UserInfo, UserInfoEntry};
