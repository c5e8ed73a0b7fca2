// src/filters/digest.rs
use crate::error::{ConfigError, ProcessingError};
use crate::filters::{text_field, Filter, FilterOptions, MutationPolicy};
use crate::pipeline::document::Document;
use sha1::{Digest, Sha1};

/// Hash functions supported by the `digest` stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Md5,
}

impl DigestAlgorithm {
    /// Lowercase hex digest of `input`
    pub fn hex_digest(&self, input: &[u8]) -> String {
        match self {
            DigestAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(input);
                hex::encode(hasher.finalize())
            }
            DigestAlgorithm::Md5 => hex::encode(md5::compute(input).0),
        }
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "md5" => Ok(DigestAlgorithm::Md5),
            _ => Err(ConfigError::UnknownDigest(s.to_string())),
        }
    }
}

/// Stores the hex digest of each configured non-empty field under `<key>.md5`.
///
/// The `.md5` suffix is used for every algorithm; downstream consumers rely
/// on that key name.
pub struct DigestFilter {
    fields: Vec<(String, DigestAlgorithm)>,
}

impl DigestFilter {
    /// Build from `key=algorithm` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        Self::from_options(FilterOptions::parse("digest", args)?)
    }

    pub fn from_options(options: FilterOptions) -> Result<Self, ConfigError> {
        let mut fields = Vec::with_capacity(options.len());
        for (key, algorithm) in options.iter() {
            fields.push((key.to_string(), algorithm.parse::<DigestAlgorithm>()?));
        }
        Ok(DigestFilter { fields })
    }
}

impl Filter for DigestFilter {
    fn name(&self) -> &str {
        "digest"
    }

    fn policy(&self) -> MutationPolicy {
        MutationPolicy::InPlace
    }

    fn process(&self, mut doc: Document) -> Result<Vec<Document>, ProcessingError> {
        for (key, algorithm) in &self.fields {
            let digest = match text_field("digest", &doc, key)? {
                Some(value) if !value.is_empty() => algorithm.hex_digest(value.as_bytes()),
                _ => continue,
            };
            doc.insert(format!("{}.md5", key), digest);
        }
        Ok(vec![doc])
    }
}
