// src/filters/predicate.rs
//! Stages that decide whether a document survives. They never edit it.

use crate::error::{ConfigError, ProcessingError};
use crate::filters::{text_field, Filter, FilterOptions, MutationPolicy};
use crate::pipeline::document::Document;

fn keep_if(keep: bool, doc: Document) -> Vec<Document> {
    if keep {
        vec![doc]
    } else {
        Vec::new()
    }
}

/// `include` / `exclude`: match when a configured key contains its substring
pub struct SubstringFilter {
    name: &'static str,
    keep_on_match: bool,
    options: FilterOptions,
}

impl SubstringFilter {
    /// Keeps documents where any `key=substring` pair matches.
    pub fn include<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(SubstringFilter {
            name: "include",
            keep_on_match: true,
            options: FilterOptions::parse("include", args)?,
        })
    }

    /// Keeps documents where no `key=substring` pair matches.
    pub fn exclude<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(SubstringFilter {
            name: "exclude",
            keep_on_match: false,
            options: FilterOptions::parse("exclude", args)?,
        })
    }

    fn matches(&self, doc: &Document) -> Result<bool, ProcessingError> {
        for (key, needle) in self.options.iter() {
            if let Some(value) = text_field(self.name, doc, key)? {
                if value.contains(needle) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl Filter for SubstringFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let matched = self.matches(&doc)?;
        Ok(keep_if(matched == self.keep_on_match, doc))
    }
}

/// `exists` / `not_exists`: match when a configured key holds a non-empty string
pub struct ExistsFilter {
    name: &'static str,
    keep_on_match: bool,
    options: FilterOptions,
}

impl ExistsFilter {
    pub fn exists<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(ExistsFilter {
            name: "exists",
            keep_on_match: true,
            options: FilterOptions::parse("exists", args)?,
        })
    }

    pub fn not_exists<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(ExistsFilter {
            name: "not_exists",
            keep_on_match: false,
            options: FilterOptions::parse("not_exists", args)?,
        })
    }

    fn matches(&self, doc: &Document) -> Result<bool, ProcessingError> {
        for key in self.options.keys() {
            if let Some(value) = text_field(self.name, doc, key)? {
                if !value.is_empty() {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl Filter for ExistsFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let matched = self.matches(&doc)?;
        Ok(keep_if(matched == self.keep_on_match, doc))
    }
}

/// Comparison used by `where`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereOperator {
    Equal,
    NotEqual,
}

impl WhereOperator {
    pub fn apply(&self, lhs: &str, rhs: &str) -> bool {
        match self {
            WhereOperator::Equal => lhs == rhs,
            WhereOperator::NotEqual => lhs != rhs,
        }
    }
}

impl std::str::FromStr for WhereOperator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(WhereOperator::Equal),
            "!=" => Ok(WhereOperator::NotEqual),
            _ => Err(ConfigError::UnknownOperator {
                filter: "where".to_string(),
                operator: s.to_string(),
            }),
        }
    }
}

/// `where FIELD OP VALUE`: keeps documents whose field compares true
pub struct WhereFilter {
    field: String,
    operator: WhereOperator,
    value: String,
}

impl WhereFilter {
    pub fn new(field: impl Into<String>, operator: WhereOperator, value: impl Into<String>) -> Self {
        WhereFilter {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Build from exactly three positional arguments: field, operator, value.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        match args {
            [field, operator, value] => Ok(Self::new(
                field.as_ref(),
                operator.as_ref().parse()?,
                value.as_ref(),
            )),
            _ => Err(ConfigError::WrongArity {
                filter: "where".to_string(),
                expected: 3,
                got: args.len(),
                args: args.iter().map(|a| a.as_ref().to_string()).collect(),
            }),
        }
    }
}

impl Filter for WhereFilter {
    fn name(&self) -> &str {
        "where"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let keep = match text_field("where", &doc, &self.field)? {
            Some(field_value) => self.operator.apply(&self.value, field_value),
            None => false,
        };
        Ok(keep_if(keep, doc))
    }
}
