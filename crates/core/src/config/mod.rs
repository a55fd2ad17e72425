//! Configuration loading and schema definitions
//!
//! Shared configuration types used by every playprep command.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
