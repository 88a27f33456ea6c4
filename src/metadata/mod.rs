//! Persistence and documentation metadata for domain entities.
//!
//! These are plain constants handed to the storage and documentation
//! collaborators at startup. The entities themselves carry no markers.

pub mod mapping;
pub mod schema;

pub use mapping::*;
pub use schema::*;
