// src/filters/field_split.rs
use crate::error::{ConfigError, ProcessingError};
use crate::filters::{Filter, FilterOptions, MutationPolicy, SplitRule};
use crate::pipeline::document::Document;

/// Field-expansion stage: writes each token of a configured field to
/// `<key>.f1`, `<key>.f2`, ... on the same document.
pub struct FieldSplitFilter {
    name: &'static str,
    rule: SplitRule,
    options: FilterOptions,
}

impl FieldSplitFilter {
    fn build<S: AsRef<str>>(name: &'static str, rule: SplitRule, args: &[S]) -> Result<Self, ConfigError> {
        Ok(FieldSplitFilter {
            name,
            rule,
            options: FilterOptions::parse(name, args)?,
        })
    }

    pub fn line<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("field_split_line", SplitRule::Line, args)
    }

    pub fn word<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("field_split_word", SplitRule::Word, args)
    }

    pub fn tab<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("field_split_tab", SplitRule::Tab, args)
    }

    pub fn comma<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("field_split_comma", SplitRule::Comma, args)
    }

    pub fn array<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("field_split_array", SplitRule::Array, args)
    }

    pub fn rule(&self) -> SplitRule {
        self.rule
    }
}

impl Filter for FieldSplitFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for key in self.options.keys() {
            let tokens = match doc.get(key) {
                Some(value) => self.rule.tokens(self.name, key, value)?,
                None => continue,
            };
            for (idx, token) in tokens.into_iter().enumerate() {
                doc.insert(format!("{}.f{}", key, idx + 1), token);
            }
        }
        Ok(vec![doc])
    }
}
