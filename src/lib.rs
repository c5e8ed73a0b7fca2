// src/lib.rs
pub mod error;
pub mod filters;
pub mod pipeline;

pub use error::*;

pub use filters::{Filter, FilterOptions, MutationPolicy};
pub use pipeline::chain::{FilterChain, ProcessingStats};
pub use pipeline::config::{ErrorStrategy, PipelineConfig};
pub use pipeline::document::{Document, FieldValue, ValueKind};
