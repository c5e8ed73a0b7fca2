// src/filters/options.rs
use crate::error::ConfigError;
use indexmap::IndexMap;

/// Resolved `key=value` options a filter stage was built with.
///
/// A bare `key` argument maps to an empty value. Declaration order is kept so
/// stages that apply several pairs do so deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    opts: IndexMap<String, String>,
}

impl FilterOptions {
    /// Parse raw stage arguments for the filter named `filter`.
    pub fn parse<S: AsRef<str>>(filter: &str, args: &[S]) -> Result<Self, ConfigError> {
        let mut opts = IndexMap::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg.split_once('=').unwrap_or((arg, ""));
            if key.is_empty() {
                return Err(ConfigError::EmptyKey {
                    filter: filter.to_string(),
                });
            }
            opts.insert(key.to_string(), value.to_string());
        }
        Ok(FilterOptions { opts })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.opts.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.opts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.opts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }
}
