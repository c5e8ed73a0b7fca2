// src/filters/shaping.rs
//! Stages that edit the key set of a single document.

use crate::error::{ConfigError, ProcessingError};
use crate::filters::{Filter, FilterOptions, MutationPolicy};
use crate::pipeline::document::Document;

/// Keeps only the configured keys, in configured order.
///
/// Emits nothing when none of the keys are present.
pub struct SelectFilter {
    options: FilterOptions,
}

impl SelectFilter {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(Self::from_options(FilterOptions::parse("select", args)?))
    }

    pub fn from_options(options: FilterOptions) -> Self {
        SelectFilter { options }
    }
}

impl Filter for SelectFilter {
    fn name(&self) -> &str {
        "select"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::CopyProducing
    }

    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let selected: Document = self
            .options
            .keys()
            .filter_map(|key| doc.get(key).map(|value| (key, value.clone())))
            .collect();

        if selected.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![selected])
        }
    }
}

/// Moves each `old=new` field that is present.
pub struct RenameFilter {
    options: FilterOptions,
}

impl RenameFilter {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::from_options(FilterOptions::parse("rename", args)?)
    }

    pub fn from_options(options: FilterOptions) -> Result<Self, ConfigError> {
        if let Some((old, _)) = options.iter().find(|(_, new)| new.is_empty()) {
            return Err(ConfigError::MissingValue {
                filter: "rename".to_string(),
                key: old.to_string(),
            });
        }
        Ok(RenameFilter { options })
    }
}

impl Filter for RenameFilter {
    fn name(&self) -> &str {
        "rename"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for (old, new) in self.options.iter() {
            if let Some(value) = doc.remove(old) {
                doc.insert(new, value);
            }
        }
        Ok(vec![doc])
    }
}

/// Deletes the configured keys.
pub struct RemoveFilter {
    options: FilterOptions,
}

impl RemoveFilter {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(Self::from_options(FilterOptions::parse("remove", args)?))
    }

    pub fn from_options(options: FilterOptions) -> Self {
        RemoveFilter { options }
    }
}

impl Filter for RemoveFilter {
    fn name(&self) -> &str {
        "remove"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for key in self.options.keys() {
            doc.remove(key);
        }
        Ok(vec![doc])
    }
}

/// Sets each `key=literal`, overwriting existing values.
pub struct InsertFilter {
    options: FilterOptions,
}

impl InsertFilter {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Ok(Self::from_options(FilterOptions::parse("insert", args)?))
    }

    pub fn from_options(options: FilterOptions) -> Self {
        InsertFilter { options }
    }
}

impl Filter for InsertFilter {
    fn name(&self) -> &str {
        "insert"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for (key, literal) in self.options.iter() {
            doc.insert(key, literal);
        }
        Ok(vec![doc])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::document::FieldValue;

    fn doc(pairs: &[(&str, &str)]) -> Document {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    #[test]
    fn test_select_keeps_configured_keys() {
        let filter = SelectFilter::from_args(&["ip", "port", "missing"]).unwrap();
        let input = doc(&[("port", "80"), ("ip", "10.0.0.1"), ("banner", "ssh")]);

        let out = filter.process(input).unwrap();
        assert_eq!(out, vec![doc(&[("ip", "10.0.0.1"), ("port", "80")])]);
    }

    #[test]
    fn test_select_drops_when_nothing_matches() {
        let filter = SelectFilter::from_args(&["ip"]).unwrap();
        let out = filter.process(doc(&[("host", "a")])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let filter = SelectFilter::from_args(&["a", "c"]).unwrap();
        let once = filter.process(doc(&[("a", "1"), ("b", "2"), ("c", "3")])).unwrap();
        let twice = filter.process(once[0].clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_copies_list_values() {
        let filter = SelectFilter::from_args(&["tags"]).unwrap();
        let mut input = Document::new();
        input.insert("tags", vec!["x", "y"]);

        let out = filter.process(input).unwrap();
        assert_eq!(out[0].get("tags"), Some(&FieldValue::from(vec!["x", "y"])));
    }

    #[test]
    fn test_rename() {
        let filter = RenameFilter::from_args(&["ip=addr", "absent=other"]).unwrap();
        let out = filter.process(doc(&[("ip", "10.0.0.1"), ("port", "22")])).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("addr"), Some(&FieldValue::from("10.0.0.1")));
        assert!(!out[0].contains_key("ip"));
        assert!(!out[0].contains_key("other"));
        assert_eq!(out[0].get("port"), Some(&FieldValue::from("22")));
    }

    #[test]
    fn test_rename_round_trip() {
        let forward = RenameFilter::from_args(&["a=b"]).unwrap();
        let back = RenameFilter::from_args(&["b=a"]).unwrap();
        let input = doc(&[("a", "value")]);

        let out = forward.process(input.clone()).unwrap().remove(0);
        let restored = back.process(out).unwrap().remove(0);
        assert_eq!(restored, input);
    }

    #[test]
    fn test_rename_chained_pairs_apply_in_order() {
        let filter = RenameFilter::from_args(&["a=b", "b=c"]).unwrap();
        let out = filter.process(doc(&[("a", "1")])).unwrap();
        assert_eq!(out, vec![doc(&[("c", "1")])]);
    }

    #[test]
    fn test_rename_requires_target() {
        assert_eq!(
            RenameFilter::from_args(&["a"]).err(),
            Some(ConfigError::MissingValue {
                filter: "rename".to_string(),
                key: "a".to_string()
            })
        );
    }

    #[test]
    fn test_remove() {
        let filter = RemoveFilter::from_args(&["banner", "absent"]).unwrap();
        let out = filter.process(doc(&[("ip", "1"), ("banner", "x")])).unwrap();
        assert_eq!(out, vec![doc(&[("ip", "1")])]);
    }

    #[test]
    fn test_insert_overwrites() {
        let filter = InsertFilter::from_args(&["source=scan", "ip=0.0.0.0", "flag"]).unwrap();
        let mut input = Document::new();
        input.insert("ip", vec!["1", "2"]);

        let out = filter.process(input).unwrap();
        assert_eq!(out, vec![doc(&[("ip", "0.0.0.0"), ("source", "scan"), ("flag", "")])]);
    }

    #[test]
    fn test_policies() {
        assert_eq!(
            SelectFilter::from_args(&["a"]).unwrap().policy(),
            MutationPolicy::CopyProducing
        );
        assert_eq!(RemoveFilter::from_args(&["a"]).unwrap().policy(), MutationPolicy::InPlace);
    }
}
