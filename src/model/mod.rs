pub mod capability;
pub mod entity;
pub mod point;
pub mod record;

pub use capability::Capability;
pub use entity::{Description, Entity};
pub use point::Vector2;
pub use record::TitledDescription;
