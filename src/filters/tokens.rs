// src/filters/tokens.rs
use crate::error::ProcessingError;
use crate::filters::type_mismatch;
use crate::pipeline::document::{FieldValue, ValueKind};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word class; any other character (including non-ASCII) separates words
static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9A-Za-z_]").expect("non-word pattern is valid")
});

/// How a field value is broken into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Split on `\n`
    Line,
    /// Split on every non-word character
    Word,
    /// Split on the literal `,\t`
    Tab,
    /// Split on `,`
    Comma,
    /// The value is already a list; its elements are the tokens
    Array,
}

impl SplitRule {
    /// The kind of value this rule consumes
    pub fn expects(&self) -> ValueKind {
        match self {
            SplitRule::Array => ValueKind::Array,
            _ => ValueKind::String,
        }
    }

    /// Tokenize `value`, which was read from field `key` by stage `step`.
    ///
    /// String rules always yield at least one token (an empty string yields
    /// one empty token). A list yields exactly its elements.
    pub fn tokens(&self, step: &str, key: &str, value: &FieldValue) -> Result<Vec<String>, ProcessingError> {
        match (self, value) {
            (SplitRule::Array, FieldValue::List(items)) => Ok(items.clone()),
            (SplitRule::Line, FieldValue::Text(s)) => Ok(s.split('\n').map(str::to_string).collect()),
            (SplitRule::Word, FieldValue::Text(s)) => Ok(NON_WORD.split(s).map(str::to_string).collect()),
            (SplitRule::Tab, FieldValue::Text(s)) => Ok(s.split(",\t").map(str::to_string).collect()),
            (SplitRule::Comma, FieldValue::Text(s)) => Ok(s.split(',').map(str::to_string).collect()),
            (rule, other) => Err(type_mismatch(step, key, rule.expects(), other.kind())),
        }
    }
}
