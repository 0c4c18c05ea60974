//! Run context: namespace, version, and title, loadable from YAML

use crate::{Error, Result};
use edi_asset::Namespace;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-run context supplied by the caller: the base namespace the schema
/// is produced under, a version/revision identifier, and a document title
/// seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionContext {
    /// Base namespace (prefix + URI)
    pub namespace: Namespace,

    /// Version/revision identifier recorded on every produced list
    #[serde(default)]
    pub version_id: String,

    /// Document title seed; used as the root type description when set
    #[serde(default)]
    pub title: String,
}

impl ConversionContext {
    /// Create a context from its parts
    pub fn new(
        namespace: Namespace,
        version_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            namespace,
            version_id: version_id.into(),
            title: title.into(),
        }
    }

    /// Parse a context from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Context`] when the YAML does not describe a
    /// context.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Context(e.to_string()))
    }

    /// Load a context from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Context`] when it does not parse.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_yaml() {
        let ctx = ConversionContext::from_yaml_str(
            "namespace:\n  prefix: edi\n  uri: https://example.org/edi/x12-834\nversion_id: \"1.0\"\ntitle: Benefit Enrollment\n",
        )
        .expect("context should parse");

        assert_eq!(ctx.namespace.prefix, "edi");
        assert_eq!(ctx.namespace.uri, "https://example.org/edi/x12-834");
        assert_eq!(ctx.version_id, "1.0");
        assert_eq!(ctx.title, "Benefit Enrollment");
    }

    #[test]
    fn test_context_optional_fields_default() {
        let ctx = ConversionContext::from_yaml_str(
            "namespace:\n  prefix: edi\n  uri: https://example.org/edi/x12-834\n",
        )
        .expect("context should parse");

        assert_eq!(ctx.version_id, "");
        assert_eq!(ctx.title, "");
    }

    #[test]
    fn test_context_invalid_yaml_is_an_error() {
        let err = ConversionContext::from_yaml_str("namespace: 12").unwrap_err();
        assert!(err.to_string().contains("Invalid context"));
    }
}
