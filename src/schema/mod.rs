pub mod builder;
pub mod document;

pub use document::{ObjectSchema, PropertySchema};
