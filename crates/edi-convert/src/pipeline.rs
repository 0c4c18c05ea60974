//! Top-level conversion driver

use crate::common::extract_common;
use crate::context::ConversionContext;
use crate::document::assemble_document;
use crate::group::{GroupCursor, SegmentGrouper};
use crate::loops::assemble_loops;
use crate::row::map_row;
use edi_asset::AssetList;
use tracing::{debug, trace};

/// Convert a raw specification table into the final ordered schema list.
///
/// Row 0 is the header and is only checked for presence; rows 1..N are
/// data rows. Rows with a blank element-path element name are skipped.
/// Returns `None` when there is nothing to convert (no header row or no
/// data rows) — the single hard failure of the pipeline; every malformed
/// cell inside a run degrades to a documented default instead.
pub fn convert(rows: &[Vec<String>], ctx: &ConversionContext) -> Option<AssetList> {
    if rows.len() <= 1 {
        return None;
    }

    let mut grouper = SegmentGrouper::new(ctx.namespace.clone());
    let mut cursor = GroupCursor::default();
    for cells in &rows[1..] {
        let row = map_row(cells);
        if row.entity_element_name.trim().is_empty() {
            trace!("skipping row without an element name");
            continue;
        }
        grouper.add(&mut cursor, &row);
    }

    let mut entries = grouper.into_entries();
    debug!(
        rows = rows.len() - 1,
        segments = entries.len(),
        "grouped specification rows"
    );

    let common = extract_common(&entries, ctx);
    let loops = assemble_loops(&mut entries, &common, ctx);
    Some(assemble_document(common, loops, ctx))
}
