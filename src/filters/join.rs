// src/filters/join.rs
use crate::error::{ConfigError, ProcessingError};
use crate::filters::{Filter, FilterOptions, MutationPolicy};
use crate::pipeline::document::{Document, FieldValue};

/// Collapses list fields into a single string joined by a separator.
/// Configured keys holding a plain string are left alone.
pub struct JoinFilter {
    name: &'static str,
    separator: &'static str,
    options: FilterOptions,
}

impl JoinFilter {
    /// `field_array_join_comma`
    pub fn comma<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(JoinFilter {
            name: "field_array_join_comma",
            separator: ",",
            options: FilterOptions::parse("field_array_join_comma", args)?,
        })
    }

    /// `field_array_join_whitespace`
    pub fn whitespace<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(JoinFilter {
            name: "field_array_join_whitespace",
            separator: " ",
            options: FilterOptions::parse("field_array_join_whitespace", args)?,
        })
    }
}

impl Filter for JoinFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for key in self.options.keys() {
            if let Some(items) = doc.get(key).and_then(FieldValue::as_list) {
                let joined = items.join(self.separator);
                doc.insert(key, joined);
            }
        }
        Ok(vec![doc])
    }
}
