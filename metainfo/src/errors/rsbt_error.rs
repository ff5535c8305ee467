use crate::errors::TryFromBencode;
use failure::*;

#[derive(Debug, Fail)]
pub enum RsbtError {
    #[fail(display = "cannot read {}: {}", path, cause)]
    SourceUnavailable {
        path: String,
        #[cause]
        cause: std::io::Error,
    },
    #[fail(display = "malformed descriptor at byte {}: {}", offset, reason)]
    MalformedDescriptor { offset: usize, reason: String },
    #[fail(display = "invalid schema for key {}: {}", key, reason)]
    InvalidSchema { key: String, reason: TryFromBencode },
    #[fail(display = "cannot decode {} as {}", field, encoding)]
    TextEncoding { field: String, encoding: String },
}

impl RsbtError {
    pub(crate) fn invalid_schema<K: Into<String>>(key: K, reason: TryFromBencode) -> Self {
        RsbtError::InvalidSchema {
            key: key.into(),
            reason,
        }
    }

    pub(crate) fn text_encoding<F: Into<String>, E: Into<String>>(field: F, encoding: E) -> Self {
        RsbtError::TextEncoding {
            field: field.into(),
            encoding: encoding.into(),
        }
    }

    /// Nests the key of a schema error under `prefix`.
    pub(crate) fn within(self, prefix: &str) -> Self {
        match self {
            RsbtError::InvalidSchema { key, reason } if key.is_empty() => {
                RsbtError::invalid_schema(prefix, reason)
            }
            RsbtError::InvalidSchema { key, reason } => {
                RsbtError::invalid_schema(format!("{}.{}", prefix, key), reason)
            }
            other => other,
        }
    }

    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, RsbtError::SourceUnavailable { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RsbtError::MalformedDescriptor { .. })
    }
}
