// src/filters.rs
//! Filter stages and the contract they share.
//!
//! Stages take ownership of the document they process. In-place stages edit
//! it and hand it back; copy-producing stages build fresh documents. Either
//! way no two live documents can share field storage.

pub mod digest;
pub mod field_split;
pub mod join;
pub mod options;
pub mod predicate;
pub mod shaping;
pub mod split;
pub mod tokens;

use crate::error::ProcessingError;
use crate::pipeline::document::{Document, FieldValue, ValueKind};

pub use digest::{DigestAlgorithm, DigestFilter};
pub use field_split::FieldSplitFilter;
pub use join::JoinFilter;
pub use options::FilterOptions;
pub use predicate::{ExistsFilter, SubstringFilter, WhereFilter, WhereOperator};
pub use shaping::{InsertFilter, RemoveFilter, RenameFilter, SelectFilter};
pub use split::SplitFilter;
pub use tokens::SplitRule;

/// Whether a stage edits the document it receives or allocates new ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPolicy {
    /// Outputs are newly built documents; the input is never edited
    CopyProducing,
    /// The received document is edited (or passed through) and returned
    InPlace,
}

/// Main trait for document filter stages
pub trait Filter: Send + Sync {
    fn name(&self) -> &str;

    fn policy(&self) -> MutationPolicy;

    /// Process one document into zero or more output documents.
    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError>;
}

/// Look up `key` as a string field.
///
/// Absent keys are `Ok(None)`; a list value is a type error.
pub(crate) fn text_field<'a>(
    step: &str,
    doc: &'a Document,
    key: &str,
) -> Result<Option<&'a str>, ProcessingError> {
    match doc.get(key) {
        None => Ok(None),
        Some(FieldValue::Text(s)) => Ok(Some(s)),
        Some(other) => Err(type_mismatch(step, key, ValueKind::String, other.kind())),
    }
}

pub(crate) fn type_mismatch(
    step: &str,
    field: &str,
    expected: ValueKind,
    found: ValueKind,
) -> ProcessingError {
    ProcessingError::TypeMismatch {
        step: step.to_string(),
        field: field.to_string(),
        expected,
        found,
    }
}
