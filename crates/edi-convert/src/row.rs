//! Positional row binding onto named fields
//!
//! One specification-table row is an ordered list of string cells. Binding
//! is positional: cell `i` goes to field `i` of the binding table below.
//! Short rows leave trailing fields at their defaults, extra cells are
//! ignored, and unparsable numeric cells stay unset — upstream tables are
//! known to contain inconsistent cells, so binding is best-effort rather
//! than validating.

/// One specification-table row bound onto named fields.
///
/// Immutable after creation. The entity name is never unset: it defaults
/// to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecRow {
    /// Business entity the row belongs to
    pub entity_name: String,

    /// Human-readable element title
    pub element: String,

    /// Segment position token within the transaction set (e.g., `0200`)
    pub position: String,

    /// Segment code (e.g., `REF`)
    pub segment_code: String,

    /// Element reference within the segment (e.g., `REF01`)
    pub segment_reference: String,

    /// Human-readable segment name
    pub segment_name: String,

    /// Repeat-cardinality string for the segment (e.g., `1:n`)
    pub segment_repeat: String,

    /// Loop number the segment belongs to (e.g., `2000A`)
    pub loop_id: String,

    /// Loop number of the declared parent loop
    pub parent_loop: String,

    /// Description of the element
    pub element_description: String,

    /// Declared data type name
    pub data_type: String,

    /// Minimum content length, when the cell parses
    pub minimum_length: Option<i16>,

    /// Maximum content length, when the cell parses
    pub maximum_length: Option<i16>,

    /// Required flag (`M` for mandatory, anything else optional)
    pub element_required: String,

    /// Sample codes for the element
    pub codes: String,

    /// Element-path component: entity id
    pub entity_id: String,

    /// Element-path component: element name; rows with a blank value are
    /// skipped before grouping
    pub entity_element_name: String,

    /// Element-path component: link
    pub entity_link: String,
}

impl SpecRow {
    /// Correlation tag of the loop this row belongs to
    pub fn loop_tag(&self) -> String {
        format!("LOOP_{}_{}", self.loop_id, self.parent_loop)
    }

    /// Element-path provenance: entity id/name/element-name/link
    pub fn element_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.entity_id, self.entity_name, self.entity_element_name, self.entity_link
        )
    }
}

/// How one cell binds onto a [`SpecRow`] field.
pub enum CellBinder {
    /// Raw text assignment
    Text(fn(&mut SpecRow, &str)),

    /// Checked small-integer parse; the field stays unset when the cell
    /// does not parse
    SmallInt(fn(&mut SpecRow, Option<i16>)),
}

/// One entry of the positional binding table.
pub struct FieldBinding {
    /// Field name, for diagnostics
    pub name: &'static str,

    /// How the cell binds
    pub binder: CellBinder,
}

/// The positional binding table, in column order. The field set is fixed
/// and known at build time, so the table is a static list rather than
/// anything reflective.
pub static FIELD_BINDINGS: &[FieldBinding] = &[
    FieldBinding {
        name: "entity_name",
        binder: CellBinder::Text(|row, v| row.entity_name = v.to_string()),
    },
    FieldBinding {
        name: "element",
        binder: CellBinder::Text(|row, v| row.element = v.to_string()),
    },
    FieldBinding {
        name: "position",
        binder: CellBinder::Text(|row, v| row.position = v.to_string()),
    },
    FieldBinding {
        name: "segment_code",
        binder: CellBinder::Text(|row, v| row.segment_code = v.to_string()),
    },
    FieldBinding {
        name: "segment_reference",
        binder: CellBinder::Text(|row, v| row.segment_reference = v.to_string()),
    },
    FieldBinding {
        name: "segment_name",
        binder: CellBinder::Text(|row, v| row.segment_name = v.to_string()),
    },
    FieldBinding {
        name: "segment_repeat",
        binder: CellBinder::Text(|row, v| row.segment_repeat = v.to_string()),
    },
    FieldBinding {
        name: "loop_id",
        binder: CellBinder::Text(|row, v| row.loop_id = v.to_string()),
    },
    FieldBinding {
        name: "parent_loop",
        binder: CellBinder::Text(|row, v| row.parent_loop = v.to_string()),
    },
    FieldBinding {
        name: "element_description",
        binder: CellBinder::Text(|row, v| row.element_description = v.to_string()),
    },
    FieldBinding {
        name: "data_type",
        binder: CellBinder::Text(|row, v| row.data_type = v.to_string()),
    },
    FieldBinding {
        name: "minimum_length",
        binder: CellBinder::SmallInt(|row, v| row.minimum_length = v),
    },
    FieldBinding {
        name: "maximum_length",
        binder: CellBinder::SmallInt(|row, v| row.maximum_length = v),
    },
    FieldBinding {
        name: "element_required",
        binder: CellBinder::Text(|row, v| row.element_required = v.to_string()),
    },
    FieldBinding {
        name: "codes",
        binder: CellBinder::Text(|row, v| row.codes = v.to_string()),
    },
    FieldBinding {
        name: "entity_id",
        binder: CellBinder::Text(|row, v| row.entity_id = v.to_string()),
    },
    FieldBinding {
        name: "entity_element_name",
        binder: CellBinder::Text(|row, v| row.entity_element_name = v.to_string()),
    },
    FieldBinding {
        name: "entity_link",
        binder: CellBinder::Text(|row, v| row.entity_link = v.to_string()),
    },
];

/// Bind a raw row onto a [`SpecRow`] by positional order.
///
/// Never fails: missing trailing cells leave their fields at the type
/// default, extra cells beyond the field count are ignored, and numeric
/// cells that do not parse stay unset.
pub fn map_row(cells: &[String]) -> SpecRow {
    let mut row = SpecRow::default();
    for (binding, cell) in FIELD_BINDINGS.iter().zip(cells.iter()) {
        match binding.binder {
            CellBinder::Text(set) => set(&mut row, cell),
            CellBinder::SmallInt(set) => set(&mut row, cell.trim().parse::<i16>().ok()),
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_map_row_binds_in_declaration_order() {
        let row = map_row(&cells(&[
            "Member", "Reference", "0200", "REF", "REF01", "Reference Information", "0:n",
            "2000A", "", "reference identification qualifier", "ID", "2", "3", "M", "0F,1L",
            "member", "reference", "link",
        ]));

        assert_eq!(row.entity_name, "Member");
        assert_eq!(row.position, "0200");
        assert_eq!(row.segment_code, "REF");
        assert_eq!(row.segment_reference, "REF01");
        assert_eq!(row.segment_repeat, "0:n");
        assert_eq!(row.loop_id, "2000A");
        assert_eq!(row.parent_loop, "");
        assert_eq!(row.data_type, "ID");
        assert_eq!(row.minimum_length, Some(2));
        assert_eq!(row.maximum_length, Some(3));
        assert_eq!(row.element_required, "M");
        assert_eq!(row.entity_element_name, "reference");
    }

    #[test]
    fn test_map_row_short_row_leaves_defaults() {
        let row = map_row(&cells(&["Member", "Reference"]));

        assert_eq!(row.entity_name, "Member");
        assert_eq!(row.element, "Reference");
        assert_eq!(row.segment_code, "");
        assert_eq!(row.minimum_length, None);
    }

    #[test]
    fn test_map_row_extra_cells_ignored() {
        let mut values = vec!["x"; FIELD_BINDINGS.len() + 5];
        values[0] = "Member";
        let row = map_row(&cells(&values));

        assert_eq!(row.entity_name, "Member");
        assert_eq!(row.entity_link, "x");
    }

    #[test]
    fn test_map_row_unparsable_numbers_stay_unset() {
        let mut values = vec![String::new(); FIELD_BINDINGS.len()];
        values[11] = "two".to_string();
        values[12] = " 30 ".to_string();
        let row = map_row(&values);

        assert_eq!(row.minimum_length, None);
        assert_eq!(row.maximum_length, Some(30));
    }

    #[test]
    fn test_map_row_empty_row_has_empty_entity_name() {
        let row = map_row(&[]);
        assert_eq!(row.entity_name, "");
    }

    #[test]
    fn test_loop_tag_and_element_path() {
        let row = map_row(&cells(&[
            "Member", "", "0200", "REF", "", "", "", "2000B", "2000A", "", "", "", "", "", "",
            "834", "reference", "id",
        ]));

        assert_eq!(row.loop_tag(), "LOOP_2000B_2000A");
        assert_eq!(row.element_path(), "834/Member/reference/id");
    }
}
