//! Typed handles over the generic store client.

mod user_client;

pub use user_client::*;
