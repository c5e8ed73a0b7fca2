// src/filters/split.rs
use crate::error::{ConfigError, ProcessingError};
use crate::filters::{Filter, FilterOptions, MutationPolicy, SplitRule};
use crate::pipeline::document::Document;

/// Fan-out stage: one output document per token of each configured field.
///
/// Every output is a full copy of the input plus `<key><suffix>` holding the
/// token. Configured keys contribute independently, in declaration order. When
/// no configured key is present the input passes through on its own.
pub struct SplitFilter {
    name: &'static str,
    rule: SplitRule,
    suffix: &'static str,
    options: FilterOptions,
}

impl SplitFilter {
    fn build<S: AsRef<str>>(
        name: &'static str,
        rule: SplitRule,
        suffix: &'static str,
        args: &[S],
    ) -> Result<Self, ConfigError> {
        Ok(SplitFilter {
            name,
            rule,
            suffix,
            options: FilterOptions::parse(name, args)?,
        })
    }

    /// `split_word`: tokens separated by non-word characters, into `<key>.word`
    pub fn word<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("split_word", SplitRule::Word, ".word", args)
    }

    /// `split_tab`: tokens separated by `,\t`, into `<key>.tab`
    pub fn tab<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("split_tab", SplitRule::Tab, ".tab", args)
    }

    /// `split_comma`: tokens separated by `,`, into `<key>.word`
    pub fn comma<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("split_comma", SplitRule::Comma, ".word", args)
    }

    /// `split_array`: one document per list element, into `<key>.item`
    pub fn array<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::build("split_array", SplitRule::Array, ".item", args)
    }

    pub fn rule(&self) -> SplitRule {
        self.rule
    }
}

impl Filter for SplitFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::CopyProducing
    }

    fn process(&self, doc: Document) -> Result<Vec<Document>, ProcessingError> {
        let mut outputs = Vec::new();
        for key in self.options.keys() {
            let Some(value) = doc.get(key) else {
                continue;
            };
            let derived = format!("{}{}", key, self.suffix);
            for token in self.rule.tokens(self.name, key, value)? {
                let mut copy = doc.clone();
                copy.insert(derived.as_str(), token);
                outputs.push(copy);
            }
        }

        if outputs.is_empty() {
            outputs.push(doc);
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::document::{FieldValue, ValueKind};

    fn doc(pairs: &[(&str, &str)]) -> Document {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    fn tokens_of(docs: &[Document], key: &str) -> Vec<String> {
        docs.iter()
            .map(|d| d.get(key).and_then(FieldValue::as_text).unwrap_or("<missing>").to_string())
            .collect()
    }

    #[test]
    fn test_split_comma_scenario() {
        let filter = SplitFilter::comma(&["msg"]).unwrap();
        let out = filter.process(doc(&[("msg", "a,b,,c")])).unwrap();

        assert_eq!(out.len(), 4);
        assert_eq!(tokens_of(&out, "msg.word"), vec!["a", "b", "", "c"]);
        for d in &out {
            assert_eq!(d.get("msg"), Some(&FieldValue::from("a,b,,c")));
            assert_eq!(d.len(), 2);
        }
    }

    #[test]
    fn test_split_word_and_tab_suffixes() {
        let word = SplitFilter::word(&["line"]).unwrap();
        let out = word.process(doc(&[("line", "GET /index.html")])).unwrap();
        assert_eq!(tokens_of(&out, "line.word"), vec!["GET", "", "index", "html"]);

        let tab = SplitFilter::tab(&["row"]).unwrap();
        let out = tab.process(doc(&[("row", "x,\ty")])).unwrap();
        assert_eq!(tokens_of(&out, "row.tab"), vec!["x", "y"]);
    }

    #[test]
    fn test_split_array_copies_document() {
        let filter = SplitFilter::array(&["names"]).unwrap();
        let mut input = doc(&[("ip", "10.0.0.1")]);
        input.insert("names", vec!["a.example", "b.example"]);

        let out = filter.process(input).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(tokens_of(&out, "names.item"), vec!["a.example", "b.example"]);
        assert_eq!(tokens_of(&out, "ip"), vec!["10.0.0.1", "10.0.0.1"]);
    }

    #[test]
    fn test_no_matching_key_passes_through() {
        let filter = SplitFilter::comma(&["msg"]).unwrap();
        let input = doc(&[("other", "a,b")]);
        assert_eq!(filter.process(input.clone()).unwrap(), vec![input]);
    }

    #[test]
    fn test_multiple_keys_flatten() {
        let filter = SplitFilter::comma(&["a", "b"]).unwrap();
        let out = filter.process(doc(&[("a", "1,2"), ("b", "3,4,5")])).unwrap();

        assert_eq!(out.len(), 5);
        assert_eq!(tokens_of(&out[..2], "a.word"), vec!["1", "2"]);
        assert_eq!(tokens_of(&out[2..], "b.word"), vec!["3", "4", "5"]);
        // each branch starts from the input, not from a sibling
        assert!(!out[2].contains_key("a.word"));
    }

    #[test]
    fn test_outputs_are_independent() {
        let filter = SplitFilter::comma(&["msg"]).unwrap();
        let mut input = doc(&[("msg", "a,b")]);
        input.insert("tags", vec!["t"]);

        let mut out = filter.process(input).unwrap();
        out[0].insert("tags", vec!["changed"]);
        out[0].remove("msg");

        assert_eq!(out[1].get("tags"), Some(&FieldValue::from(vec!["t"])));
        assert_eq!(out[1].get("msg"), Some(&FieldValue::from("a,b")));
    }

    #[test]
    fn test_kind_mismatch() {
        let filter = SplitFilter::array(&["names"]).unwrap();
        let err = filter.process(doc(&[("names", "a")])).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::TypeMismatch {
                step: "split_array".to_string(),
                field: "names".to_string(),
                expected: ValueKind::Array,
                found: ValueKind::String,
            }
        );
    }
}
