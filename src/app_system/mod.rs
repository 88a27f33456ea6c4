//! System orchestration, startup, and shutdown logic.

pub mod user_system;
pub mod telemetry;
pub mod error;

pub use user_system::*;
pub use telemetry::*;
pub use error::*;
