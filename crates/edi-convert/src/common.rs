//! Common-element extraction across loops
//!
//! EDI segments recur verbatim across many loops (a name/address segment
//! appears in nearly every party loop). Hoisting each distinct segment
//! type once into a dedicated common namespace lets every loop reference
//! the same canonical type by name instead of duplicating its definition.

use crate::context::ConversionContext;
use crate::group::SegmentEntry;
use edi_asset::{AssetElement, AssetList};
use tracing::trace;

/// Hoist each distinct segment type, with its full child-element list,
/// into the run's common namespace.
///
/// Entries are visited in first-seen order and deduplicated by original
/// segment code: the first occurrence defines the canonical type, later
/// occurrences of the same code are skipped. Running this twice over
/// identical input yields identical output.
pub fn extract_common(entries: &[SegmentEntry], ctx: &ConversionContext) -> AssetList {
    let ns = ctx.namespace.to_common();
    let mut elements = AssetList::new(ns.clone(), ctx.version_id.clone());

    for entry in entries {
        let tag = entry.row.loop_tag();

        if elements.find_by_original_name(&entry.original_name).is_some() {
            trace!(segment = %entry.original_name, "segment type already hoisted");
            continue;
        }
        let Some(segment) = entry.elements.first() else {
            continue;
        };

        let type_name = format!("{}_Type", segment.original_name());
        let mut parent = AssetElement::prepare(
            "",
            &type_name,
            &segment.description,
            &segment.data_type,
            &ns,
            &ns,
            &tag,
        );
        parent.occurrence = segment.occurrence;
        parent.original_name = Some(entry.original_name.clone());
        parent.real_name = Some(entry.row.segment_name.clone());
        parent.alternate_name = Some(entry.row.segment_name.clone());
        elements.push(parent);

        for item in &entry.elements[1..] {
            let mut child = AssetElement::prepare(
                &type_name,
                &item.element_qname.name,
                &item.description,
                &item.data_type,
                &ns,
                &ns,
                &tag,
            );
            child.min_length = item.min_length;
            child.max_length = item.max_length;
            child.occurrence = item.occurrence;
            child.real_name = item.real_name.clone();
            child.alternate_name = item.alternate_name.clone();
            elements.push(child);
        }
    }

    elements
}
