pub mod adaptors;
pub mod catalog;
pub mod errors;
