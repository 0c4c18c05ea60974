//! Schema element node, classification, and the element factory

use crate::namespace::{Namespace, QualifiedName, base_type};
use crate::occurrence::Occurrence;
use crate::text::to_proper_case;
use serde::{Deserialize, Serialize};

/// Classification of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Top-level type declaration
    Type,

    /// Member element of a type
    Element,
}

/// A node in the produced schema: either a type declaration or an element
/// belonging to one.
///
/// Nodes are created by [`AssetElement::prepare`] and mutated in place
/// while their enclosing segment or loop is being assembled; once the
/// enclosing [`AssetList`](crate::AssetList) is handed to the document
/// assembler they are considered frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetElement {
    /// Qualified name of the node itself
    pub element_qname: QualifiedName,

    /// Qualified name of the node's data type
    pub type_qname: QualifiedName,

    /// Qualified name of the structural parent type; `None` for top-level
    /// type declarations
    pub entity_qname: Option<QualifiedName>,

    /// Node classification
    pub kind: ElementKind,

    /// Data type local name
    pub data_type: String,

    /// URI of the owning namespace
    pub namespace: String,

    /// Occurrence cardinality
    pub occurrence: Occurrence,

    /// Minimum content length (0 when unconstrained)
    pub min_length: u32,

    /// Maximum content length (0 when unconstrained)
    pub max_length: u32,

    /// Proper-cased description
    pub description: String,

    /// Free-text annotations accumulated during assembly
    pub annotations: Vec<String>,

    /// Free-text comment
    pub comment: Option<String>,

    /// Name the node had in the source table (segment code or element
    /// reference); falls back to the element name when unset
    pub original_name: Option<String>,

    /// Human-readable name from the source table
    pub real_name: Option<String>,

    /// Element-path provenance (entity id/name/element-name/link)
    pub alternate_name: Option<String>,

    /// Sample value or code list excerpt
    pub sample_value: Option<String>,

    /// Loop correlation tag (`LOOP_<loop>_<parent>`)
    pub tag: String,

    /// Dense document-order sequence id, assigned by the document assembler
    pub sequence_id: Option<String>,
}

impl AssetElement {
    /// Build a schema node from its base information.
    ///
    /// A blank `data_type` defaults to `string`. The type prefix comes from
    /// the base-type lookup when the data type is a known primitive,
    /// otherwise from the caller's namespace. A blank `parent_name` makes
    /// this a top-level [`ElementKind::Type`]; anything else is an
    /// [`ElementKind::Element`] owned by that parent. The description is
    /// proper-cased and recorded as the first annotation; occurrence starts
    /// at the optional-singular default until a cardinality string
    /// overrides it.
    pub fn prepare(
        parent_name: &str,
        name: &str,
        description: &str,
        data_type: &str,
        ns: &Namespace,
        parent_ns: &Namespace,
        tag: &str,
    ) -> Self {
        let data_type = if data_type.trim().is_empty() {
            "string"
        } else {
            data_type
        };

        let type_prefix = match base_type(data_type) {
            Some(base) => base.prefix,
            None => ns.prefix.clone(),
        };

        let entity_qname = if parent_name.trim().is_empty() {
            None
        } else {
            Some(QualifiedName::new(parent_ns.prefix.clone(), parent_name))
        };
        let kind = if entity_qname.is_none() {
            ElementKind::Type
        } else {
            ElementKind::Element
        };

        let description = to_proper_case(description);
        let mut element = Self {
            element_qname: QualifiedName::new(ns.prefix.clone(), name),
            type_qname: QualifiedName::new(type_prefix, data_type),
            entity_qname,
            kind,
            data_type: data_type.to_string(),
            namespace: ns.uri.clone(),
            occurrence: Occurrence::default(),
            min_length: 0,
            max_length: 0,
            description,
            annotations: Vec::new(),
            comment: None,
            original_name: None,
            real_name: None,
            alternate_name: None,
            sample_value: None,
            tag: tag.to_string(),
            sequence_id: None,
        };
        if !element.description.is_empty() {
            let annotation = element.description.clone();
            element.add_annotation(annotation);
        }
        element
    }

    /// Record a free-text annotation
    pub fn add_annotation(&mut self, text: impl Into<String>) {
        self.annotations.push(text.into());
    }

    /// Effective original name: the recorded provenance name, or the
    /// element's own local name when none was recorded
    pub fn original_name(&self) -> &str {
        self.original_name
            .as_deref()
            .unwrap_or(&self.element_qname.name)
    }

    /// Local name of the structural parent type, when there is one
    pub fn entity_name(&self) -> Option<&str> {
        self.entity_qname.as_ref().map(|q| q.name.as_str())
    }
}
