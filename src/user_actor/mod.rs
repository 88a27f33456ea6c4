//! User-specific store behavior: lifecycle hooks and error mapping.

pub mod entity;
pub mod error;

pub use error::*;
