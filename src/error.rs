use crate::pipeline::document::ValueKind;

/// Raised while a filter stage is being built from its arguments.
///
/// These abort pipeline assembly; no document is processed by a chain
/// whose stages failed to construct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Expected {expected} arguments to '{filter}' but got {got}: {args:?}")]
    WrongArity {
        filter: String,
        expected: usize,
        got: usize,
        args: Vec<String>,
    },

    #[error("Unknown conditional operator for '{filter}': {operator}")]
    UnknownOperator { filter: String, operator: String },

    #[error("Unknown/unsupported hash func: {0}")]
    UnknownDigest(String),

    #[error("Option '{key}' of '{filter}' requires a value (expected {key}=VALUE)")]
    MissingValue { filter: String, key: String },

    #[error("Empty option key passed to '{filter}'")]
    EmptyKey { filter: String },

    #[error("Unknown error strategy: {0}")]
    UnknownErrorStrategy(String),
}

/// Raised while a single document is being processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
    #[error("Type error in step '{step}': field '{field}' holds {found}, expected {expected}")]
    TypeMismatch {
        step: String,
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}
