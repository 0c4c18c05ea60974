//! Document assembly and final sequence-id numbering

use crate::context::ConversionContext;
use edi_asset::{AssetElement, AssetList, ElementKind, to_title_case};
use tracing::debug;

/// Wrap the assembled common and loop lists under a single root document
/// type and produce the final ordered list.
///
/// The root document name derives from the last path segment of the base
/// namespace URI, title-cased, suffixed `_Document` (and `_Type` for the
/// root type). The result starts with the root type node, the link from
/// the root type to the outermost loop, and the document element, followed
/// by the common list and the loop list; every node then gets a dense
/// stringified sequence id by final position.
pub fn assemble_document(
    common: AssetList,
    loops: AssetList,
    ctx: &ConversionContext,
) -> AssetList {
    let ns = &ctx.namespace;
    let root_name = to_title_case(ns.last_uri_segment());
    let root_item_name = format!("{root_name}_Document");
    let root_type = format!("{root_item_name}_Type");

    let title = if ctx.title.trim().is_empty() {
        "Root Document"
    } else {
        ctx.title.as_str()
    };
    let root = AssetElement::prepare("", &root_type, title, "object", ns, ns, "");

    // Link the outermost loop under the document root.
    let link = loops.first().map(|outermost| {
        AssetElement::prepare(
            root.original_name(),
            outermost.original_name(),
            &outermost.description,
            &format!("{}_Type", outermost.original_name()),
            ns,
            ns,
            "",
        )
    });

    let mut document = AssetElement::prepare("", &root_item_name, &root_item_name, &root_type, ns, ns, "");
    document.kind = ElementKind::Element;

    let mut elements = AssetList::new(ctx.namespace.clone(), ctx.version_id.clone());
    elements.push(root);
    if let Some(link) = link {
        elements.push(link);
    }
    elements.push(document);
    elements.extend(common);
    elements.extend(loops);
    elements.assign_sequence_ids();

    debug!(nodes = elements.len(), root = %root_type, "assembled document");
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use edi_asset::Namespace;

    fn ctx() -> ConversionContext {
        ConversionContext::new(
            Namespace::new("edi", "https://example.org/edi/x12-834"),
            "v1",
            "Benefit Enrollment",
        )
    }

    fn list_with(names: &[&str]) -> AssetList {
        let ns = ctx().namespace;
        let mut list = AssetList::new(ns.clone(), "v1");
        for name in names {
            let mut node = AssetElement::prepare("", name, "", "object", &ns, &ns, "");
            node.original_name = Some(name.trim_end_matches("_Type").to_string());
            list.push(node);
        }
        list
    }

    #[test]
    fn test_document_nodes_lead_the_list() {
        let common = list_with(&["REF_Type"]);
        let loops = list_with(&["LOOP_2000A__Type"]);

        let result = assemble_document(common, loops, &ctx());

        let names: Vec<&str> = result.iter().map(|e| e.element_qname.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "X12-834_Document_Type",
                "LOOP_2000A_",
                "X12-834_Document",
                "REF_Type",
                "LOOP_2000A__Type",
            ]
        );
    }

    #[test]
    fn test_root_link_and_document_element() {
        let result = assemble_document(
            AssetList::new(ctx().namespace, "v1"),
            list_with(&["LOOP_2000A__Type"]),
            &ctx(),
        );

        let root = result.get(0).unwrap();
        assert_eq!(root.kind, ElementKind::Type);
        assert_eq!(root.description, "Benefit Enrollment");

        let link = result.get(1).unwrap();
        assert_eq!(link.entity_name(), Some("X12-834_Document_Type"));
        assert_eq!(link.type_qname.name, "LOOP_2000A__Type");

        let document = result.get(2).unwrap();
        assert_eq!(document.kind, ElementKind::Element);
        assert_eq!(document.type_qname.name, "X12-834_Document_Type");
    }

    #[test]
    fn test_sequence_ids_are_dense() {
        let result = assemble_document(
            list_with(&["REF_Type", "DTP_Type"]),
            list_with(&["LOOP_2000A__Type"]),
            &ctx(),
        );

        let ids: Vec<String> = result
            .iter()
            .map(|e| e.sequence_id.clone().expect("sequence id assigned"))
            .collect();
        let expected: Vec<String> = (0..result.len()).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_empty_loop_list_skips_link() {
        let result = assemble_document(
            AssetList::new(ctx().namespace, "v1"),
            AssetList::new(ctx().namespace, "v1"),
            &ctx(),
        );

        let names: Vec<&str> = result.iter().map(|e| e.element_qname.name.as_str()).collect();
        assert_eq!(names, vec!["X12-834_Document_Type", "X12-834_Document"]);
    }
}
