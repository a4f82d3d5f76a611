pub mod payload;

pub use payload::PayloadValidator;
