//! Sheetforge Engine library.
//!
//! Turns a character service export into a fully resolved character.
//!
//! ## Structure
//!
//! - `modifier_index` - Queryable view over the record's modifier lists
//! - `resolvers/` - One pure function per part of the resolved character
//! - `pipeline/` - Ordered resolution steps and the conversion orchestrator
//! - `infrastructure/` - Clock port and environment settings
//! - `context` - Settings and rule tables shared by every resolver call

pub mod context;
pub mod error;
pub mod infrastructure;
pub mod modifier_index;
pub mod pipeline;
pub mod resolvers;

/// Test fixtures module for character exports.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end resolution tests over the fixtures.
#[cfg(test)]
mod e2e_tests;

pub use context::ResolutionContext;
pub use error::ConversionError;
pub use infrastructure::settings::load_settings_from_env;
pub use pipeline::{resolve, resolve_json, ConversionOrchestrator};
