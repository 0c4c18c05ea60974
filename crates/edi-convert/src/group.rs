//! Segment grouping over the mapped row stream
//!
//! A single pass over the mapped rows groups them into per-segment
//! entries: the first row seen for a segment position opens the entry and
//! becomes the segment's type node, subsequent rows become its child
//! elements. The input is assumed quasi-sorted by segment; the grouping
//! cursor advances only when a new segment opens.

use crate::row::SpecRow;
use edi_asset::{AssetElement, Namespace, Occurrence};
use tracing::trace;

/// One segment's grouped definition.
///
/// There is at most one entry per unique position token within a
/// conversion run; the element list always starts with the segment's own
/// type node.
#[derive(Debug, Clone)]
pub struct SegmentEntry {
    /// First-seen mapped row for this segment
    pub row: SpecRow,

    /// Synthetic entity type name (`<code>_<position>_Type`)
    pub entity_name: String,

    /// Anchor position token used as the dedup key
    pub position: String,

    /// Original segment code from the table
    pub original_name: String,

    /// Segment type node followed by its child element nodes
    pub elements: Vec<AssetElement>,

    /// Index of the most recently appended child
    pub last_added: Option<usize>,
}

/// Explicit grouping cursor: the synthetic type name of the most recently
/// opened segment. Threaded through [`SegmentGrouper::add`] so the
/// algorithm's dependency on row order stays visible and testable.
#[derive(Debug, Clone, Default)]
pub struct GroupCursor {
    /// Current entity type name; empty until the first segment opens
    pub current_entity: String,
}

/// Groups mapped rows into per-segment entries.
#[derive(Debug)]
pub struct SegmentGrouper {
    namespace: Namespace,
    entries: Vec<SegmentEntry>,
}

impl SegmentGrouper {
    /// Create a grouper for the given run namespace
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            entries: Vec::new(),
        }
    }

    /// The grouped entries, in first-seen order
    pub fn entries(&self) -> &[SegmentEntry] {
        &self.entries
    }

    /// Consume the grouper, yielding the entries in first-seen order
    pub fn into_entries(self) -> Vec<SegmentEntry> {
        self.entries
    }

    /// Add one mapped row, opening a new segment entry when its position
    /// has not been seen before, and append the row's element node to the
    /// owning entry. Returns the element node just added.
    pub fn add(&mut self, cursor: &mut GroupCursor, row: &SpecRow) -> &AssetElement {
        let tag = row.loop_tag();
        let segment_code = row.segment_code.trim().to_string();

        let index = match self.entries.iter().position(|e| e.position == row.position) {
            Some(index) => index,
            None => {
                let entity_name = format!("{}_{}_Type", segment_code, row.position);
                trace!(segment = %segment_code, entity = %entity_name, "opening segment entry");

                let mut segment = AssetElement::prepare(
                    "",
                    &entity_name,
                    &row.element,
                    "object",
                    &self.namespace,
                    &self.namespace,
                    &tag,
                );
                segment.original_name = Some(segment_code.clone());
                segment.real_name = Some(row.segment_name.clone());
                segment.alternate_name = Some(row.element_path());
                segment.occurrence = Occurrence::parse(&row.segment_repeat);

                cursor.current_entity = entity_name.clone();
                self.entries.push(SegmentEntry {
                    row: row.clone(),
                    entity_name,
                    position: row.position.clone(),
                    original_name: segment_code.clone(),
                    elements: vec![segment],
                    last_added: None,
                });
                self.entries.len() - 1
            }
        };

        let mut child = AssetElement::prepare(
            &cursor.current_entity,
            &row.segment_reference,
            &row.element_description,
            &row.data_type,
            &self.namespace,
            &self.namespace,
            &tag,
        );
        child.add_annotation(format!("{}: {}", row.segment_name, row.element_description));
        child.comment = Some(row.element.clone());
        child.min_length = u32::try_from(row.minimum_length.unwrap_or(0)).unwrap_or(0);
        child.max_length = u32::try_from(row.maximum_length.unwrap_or(0)).unwrap_or(0);
        child.original_name = Some(row.segment_reference.clone());
        child.real_name = Some(row.segment_name.clone());
        child.alternate_name = Some(row.element_path());
        child.occurrence.min = u32::from(row.element_required.eq_ignore_ascii_case("m"));
        if !row.codes.is_empty() {
            child.sample_value = Some(row.codes.clone());
        }

        let entry = &mut self.entries[index];
        entry.elements.push(child);
        let last = entry.elements.len() - 1;
        entry.last_added = Some(last);
        &entry.elements[last]
    }
}
