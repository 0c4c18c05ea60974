//! Loop hierarchy assembly
//!
//! Specification tables list loops as flat rows; the hierarchy is
//! reconstructed here. Each unique loop tag gets one type node; loop
//! references are inserted into their parent loop's body next to their
//! siblings, so the flat list order is already the final document order.

use crate::context::ConversionContext;
use crate::group::SegmentEntry;
use edi_asset::{AssetElement, AssetList, Occurrence};
use tracing::{debug, trace};

/// Identity of one assembled loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopRecord {
    /// Loop number token from the table (e.g., `2000A`)
    pub loop_id: String,

    /// Correlation tag (`LOOP_<loop>_<parent>`)
    pub tag: String,

    /// Name of the loop's type node (`<tag>_Type`)
    pub type_name: String,

    /// Index of the parent record in first-seen order; `None` attaches the
    /// loop directly under the document root
    pub parent: Option<usize>,
}

/// Assemble the loop hierarchy from the grouped segment entries.
///
/// Loop parents resolve two ways: an explicit parent-loop reference in the
/// table wins; otherwise the single-slot "current parent" cursor — the
/// most recently created loop — is recorded. The cursor is not a stack:
/// tables that return to a shallower loop without an explicit parent
/// reference will mis-nest, a known limitation of quasi-sorted input. A
/// declared parent that matches no previously seen loop attaches the new
/// loop directly under the document root.
///
/// Segment references inside each loop point at the canonical types of
/// `common` by name, and every insertion is sibling-anchored so the
/// returned list is already in document order.
pub fn assemble_loops(
    entries: &mut [SegmentEntry],
    common: &AssetList,
    ctx: &ConversionContext,
) -> AssetList {
    let base_ns = &ctx.namespace;
    let common_ns = &common.namespace;
    let mut elements = AssetList::new(base_ns.clone(), ctx.version_id.clone());
    let mut records: Vec<LoopRecord> = Vec::new();
    // Single-slot parent cursor, advanced only when a new loop is created.
    let mut current_parent: Option<usize> = None;

    for entry in entries.iter_mut() {
        let tag = entry.row.loop_tag();
        let type_name = format!("{}_Type", tag);

        if elements.find_by_original_name(&tag).is_none() {
            trace!(%tag, "creating loop");
            records.push(LoopRecord {
                loop_id: entry.row.loop_id.clone(),
                tag: tag.clone(),
                type_name: type_name.clone(),
                parent: current_parent,
            });

            let segment = &entry.elements[0];
            let mut loop_node =
                AssetElement::prepare("", &type_name, "", &segment.data_type, base_ns, base_ns, &tag);
            loop_node.original_name = Some(tag.clone());
            loop_node.real_name = segment.real_name.clone();
            loop_node.alternate_name = segment.alternate_name.clone();
            loop_node.occurrence = segment.occurrence;
            elements.push(loop_node);

            // Reference the new loop from its declared parent's body.
            let declared_parent = records
                .iter()
                .find(|record| record.loop_id == entry.row.parent_loop)
                .filter(|record| record.tag != tag)
                .cloned();
            match declared_parent {
                Some(parent_record) => {
                    let mut reference = AssetElement::prepare(
                        &parent_record.type_name,
                        &tag,
                        &entry.row.element,
                        &type_name,
                        base_ns,
                        base_ns,
                        &tag,
                    );
                    reference.original_name = Some(tag.clone());
                    reference.real_name = Some(entry.row.segment_name.clone());
                    reference.alternate_name = Some(entry.row.segment_name.clone());
                    reference.occurrence = Occurrence::parse(&entry.row.segment_repeat);
                    elements.insert_adjacent(&parent_record.type_name, reference, false);
                }
                None if !entry.row.parent_loop.is_empty() => {
                    trace!(
                        parent = %entry.row.parent_loop,
                        "declared parent loop not seen; attaching under the root"
                    );
                }
                None => {}
            }

            current_parent = Some(records.len() - 1);
        }

        // Reference the segment's canonical common type inside the loop.
        let segment = &entry.elements[0];
        let segment_original = segment.original_name().to_string();
        let description = format!("{}: {}", entry.row.segment_name, segment.description);
        let mut reference = AssetElement::prepare(
            &type_name,
            &segment_original,
            &description,
            &format!("{}_Type", segment_original),
            common_ns,
            base_ns,
            &tag,
        );
        reference.real_name = segment.real_name.clone();
        reference.alternate_name = segment.alternate_name.clone();
        reference.occurrence = segment.occurrence;
        if !entry.row.codes.is_empty() {
            reference.sample_value = Some(entry.row.codes.clone());
        }
        // Mark the owning loop onto the entry's segment provenance.
        entry.elements[0].original_name = Some(tag.clone());

        elements.insert_adjacent(&type_name, reference, true);
    }

    debug!(loops = records.len(), nodes = elements.len(), "assembled loop hierarchy");
    elements
}
