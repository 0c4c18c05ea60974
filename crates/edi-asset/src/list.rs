//! Ordered asset list with sibling-anchored insertion

use crate::element::AssetElement;
use crate::namespace::Namespace;
use serde::{Deserialize, Serialize};

/// An insertion-ordered sequence of schema nodes plus the namespace and
/// version identifier of the run that produced it.
///
/// The list order is the document order of the final schema: the assembly
/// stages keep it correct by inserting every node adjacent to its siblings
/// rather than sorting afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetList {
    /// Namespace the list was produced under
    pub namespace: Namespace,

    /// Version/revision identifier of the conversion run
    pub version_id: String,

    /// When the list was generated; stamped by callers that care, absent
    /// in pure engine output
    pub generated_at: Option<chrono::DateTime<chrono::Utc>>,

    items: Vec<AssetElement>,
}

impl AssetList {
    /// Create an empty list for the given namespace and version
    pub fn new(namespace: Namespace, version_id: impl Into<String>) -> Self {
        Self {
            namespace,
            version_id: version_id.into(),
            generated_at: None,
            items: Vec::new(),
        }
    }

    /// Append a node at the end of the list
    pub fn push(&mut self, element: AssetElement) {
        self.items.push(element);
    }

    /// Append every node of another collection, preserving order
    pub fn extend(&mut self, elements: impl IntoIterator<Item = AssetElement>) {
        self.items.extend(elements);
    }

    /// Number of nodes in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no nodes
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First node, when any
    pub fn first(&self) -> Option<&AssetElement> {
        self.items.first()
    }

    /// Node at `index`, when in range
    pub fn get(&self, index: usize) -> Option<&AssetElement> {
        self.items.get(index)
    }

    /// Iterate the nodes in document order
    pub fn iter(&self) -> std::slice::Iter<'_, AssetElement> {
        self.items.iter()
    }

    /// The nodes as a slice, in document order
    pub fn items(&self) -> &[AssetElement] {
        &self.items
    }

    /// Consume the list, yielding the nodes in document order
    pub fn into_items(self) -> Vec<AssetElement> {
        self.items
    }

    /// Find the first node whose effective original name matches
    pub fn find_by_original_name(&self, name: &str) -> Option<&AssetElement> {
        self.items.iter().find(|item| item.original_name() == name)
    }

    /// Insert `element` immediately after the last node of the first
    /// contiguous run of children of `parent_type_name`.
    ///
    /// Nodes without a structural parent (type declarations) do not break a
    /// run. When no child of the parent exists yet the element is appended
    /// at the end only if `force` is set, otherwise it is dropped. Returns
    /// whether the element was placed. The scan is O(list length) per
    /// insertion, which is fine for bounded specification tables.
    pub fn insert_adjacent(
        &mut self,
        parent_type_name: &str,
        element: AssetElement,
        force: bool,
    ) -> bool {
        let mut last_index: Option<usize> = None;
        for (i, item) in self.items.iter().enumerate() {
            let Some(entity) = &item.entity_qname else {
                continue;
            };
            if entity.name == parent_type_name {
                last_index = Some(i);
            } else if last_index.is_some() {
                break;
            }
        }

        match last_index {
            Some(i) => {
                self.items.insert(i + 1, element);
                true
            }
            None if force => {
                self.items.push(element);
                true
            }
            None => false,
        }
    }

    /// Assign dense stringified sequence ids `0..len` by list position
    pub fn assign_sequence_ids(&mut self) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.sequence_id = Some(i.to_string());
        }
    }
}

impl IntoIterator for AssetList {
    type Item = AssetElement;
    type IntoIter = std::vec::IntoIter<AssetElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AssetList {
    type Item = &'a AssetElement;
    type IntoIter = std::slice::Iter<'a, AssetElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::AssetElement;

    fn ns() -> Namespace {
        Namespace::new("edi", "https://example.org/edi/x12-834")
    }

    fn type_node(name: &str) -> AssetElement {
        AssetElement::prepare("", name, "", "object", &ns(), &ns(), "")
    }

    fn child_node(parent: &str, name: &str) -> AssetElement {
        AssetElement::prepare(parent, name, "", "string", &ns(), &ns(), "")
    }

    fn names(list: &AssetList) -> Vec<&str> {
        list.iter().map(|e| e.element_qname.name.as_str()).collect()
    }

    #[test]
    fn test_insert_adjacent_places_after_last_sibling() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(type_node("A_Type"));
        list.push(child_node("A_Type", "a1"));
        list.push(child_node("A_Type", "a2"));
        list.push(type_node("B_Type"));
        list.push(child_node("B_Type", "b1"));

        let placed = list.insert_adjacent("A_Type", child_node("A_Type", "a3"), false);

        assert!(placed);
        assert_eq!(names(&list), vec!["A_Type", "a1", "a2", "a3", "B_Type", "b1"]);
    }

    #[test]
    fn test_insert_adjacent_skips_parentless_nodes_inside_run() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(child_node("A_Type", "a1"));
        list.push(type_node("Interleaved_Type"));
        list.push(child_node("A_Type", "a2"));

        list.insert_adjacent("A_Type", child_node("A_Type", "a3"), false);

        assert_eq!(names(&list), vec!["a1", "Interleaved_Type", "a2", "a3"]);
    }

    #[test]
    fn test_insert_adjacent_stops_after_first_run() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(child_node("A_Type", "a1"));
        list.push(child_node("B_Type", "b1"));
        list.push(child_node("A_Type", "a2"));

        list.insert_adjacent("A_Type", child_node("A_Type", "a3"), false);

        // The second run of A children is not considered.
        assert_eq!(names(&list), vec!["a1", "a3", "b1", "a2"]);
    }

    #[test]
    fn test_insert_adjacent_without_anchor() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(type_node("A_Type"));

        assert!(!list.insert_adjacent("Missing_Type", child_node("Missing_Type", "m1"), false));
        assert_eq!(list.len(), 1);

        assert!(list.insert_adjacent("Missing_Type", child_node("Missing_Type", "m1"), true));
        assert_eq!(names(&list), vec!["A_Type", "m1"]);
    }

    #[test]
    fn test_assign_sequence_ids_is_dense() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(type_node("A_Type"));
        list.push(child_node("A_Type", "a1"));
        list.push(child_node("A_Type", "a2"));

        list.assign_sequence_ids();

        let ids: Vec<_> = list.iter().map(|e| e.sequence_id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_list_serializes_items_in_order() {
        let mut list = AssetList::new(ns(), "v1");
        list.push(type_node("A_Type"));
        list.push(child_node("A_Type", "a1"));
        list.assign_sequence_ids();

        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&list).expect("list serializes"),
        )
        .expect("round-trips through JSON");

        assert_eq!(json["version_id"], "v1");
        assert!(json["generated_at"].is_null());
        assert_eq!(json["items"][0]["element_qname"]["name"], "A_Type");
        assert_eq!(json["items"][1]["sequence_id"], "1");
    }

    #[test]
    fn test_find_by_original_name_uses_fallback() {
        let mut list = AssetList::new(ns(), "v1");
        let mut node = type_node("REF_Type");
        node.original_name = Some("REF".to_string());
        list.push(node);
        list.push(type_node("DTP_Type"));

        assert!(list.find_by_original_name("REF").is_some());
        assert!(list.find_by_original_name("DTP_Type").is_some());
        assert!(list.find_by_original_name("NM1").is_none());
    }
}
