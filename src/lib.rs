pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod showcase;

pub use error::EntityError;
pub use model::{Capability, Description, Entity, TitledDescription, Vector2};
pub use showcase::Showcase;
