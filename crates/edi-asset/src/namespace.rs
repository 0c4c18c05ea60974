//! Namespaces, qualified names, and the base-type lookup

use serde::{Deserialize, Serialize};

/// A namespace binding: a short prefix plus the URI it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace prefix (e.g., `edi`)
    pub prefix: String,

    /// Namespace URI (e.g., `https://example.org/edi/x12-834`)
    pub uri: String,
}

impl Namespace {
    /// Create a new namespace binding
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Derive the companion "common" namespace used for segment types that
    /// are shared across loops: `/common` is appended to the URI and `c` to
    /// the prefix.
    pub fn to_common(&self) -> Namespace {
        Namespace {
            prefix: format!("{}c", self.prefix),
            uri: format!("{}/common", self.uri),
        }
    }

    /// Last non-empty path segment of the URI, used to derive the root
    /// document name. Falls back to the whole URI when there is no path.
    pub fn last_uri_segment(&self) -> &str {
        self.uri
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.uri)
    }
}

/// A (prefix, local-name) pair identifying a schema node unambiguously
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace prefix
    pub prefix: String,

    /// Local name
    pub name: String,
}

impl QualifiedName {
    /// Create a new qualified name
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// Render as `prefix:name` (or just `name` when the prefix is empty)
    pub fn qualified(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.prefix, self.name)
        }
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/// XSD primitive names recognized by the base-type lookup.
const XSD_BASE_TYPES: &[&str] = &[
    "string",
    "boolean",
    "decimal",
    "float",
    "double",
    "integer",
    "int",
    "long",
    "short",
    "byte",
    "date",
    "time",
    "dateTime",
    "duration",
    "anyURI",
    "token",
    "normalizedString",
    "base64Binary",
    "hexBinary",
    "nonNegativeInteger",
    "positiveInteger",
    "unsignedInt",
    "ID",
    "IDREF",
];

/// Prefix used for XSD base types.
pub const XSD_PREFIX: &str = "xsd";

/// Look up a data type name against the known base types.
///
/// Returns the qualified base type when `name` is an XSD primitive, `None`
/// when the type belongs to the caller's own namespace.
pub fn base_type(name: &str) -> Option<QualifiedName> {
    XSD_BASE_TYPES
        .iter()
        .find(|candidate| **candidate == name)
        .map(|candidate| QualifiedName::new(XSD_PREFIX, *candidate))
}
