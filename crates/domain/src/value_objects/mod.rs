//! Value objects - Immutable objects defined by their attributes

mod settings;

pub use settings::{ResolverSettings, MAX_FEATURE_LEVEL_LIMIT};
