use super::model::AlignmentTable;

// ---------------------------------------------------------------------------
// Name filter: which rows are visible for the current query
// ---------------------------------------------------------------------------

/// Queries shorter than this show every row.
pub const MIN_QUERY_LEN: usize = 3;

/// Return indices of rows whose parameter name matches `query`.
///
/// The match is a case-insensitive substring check against the parameter
/// name only. Filtering is purely view-level: it never touches cell values
/// or classifications.
pub fn visible_rows(table: &AlignmentTable, query: &str) -> Vec<usize> {
    if query.chars().count() < MIN_QUERY_LEN {
        return (0..table.rows().len()).collect();
    }

    let needle = query.to_uppercase();
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.name.to_uppercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::model::ParamSet;
    use super::*;

    fn table() -> AlignmentTable {
        let params: ParamSet = [
            ("ACRO_BAL_ROLL", "1.0"),
            ("ANGLE_MAX", "4500"),
            ("BATT_CAPACITY", "5200"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut table = AlignmentTable::default();
        table.merge_column("copter_a", params);
        table
    }

    #[test]
    fn short_queries_show_all_rows() {
        let table = table();
        assert_eq!(visible_rows(&table, ""), vec![0, 1, 2]);
        assert_eq!(visible_rows(&table, "AB"), vec![0, 1, 2]);
    }

    #[test]
    fn three_char_queries_filter_by_substring() {
        let table = table();
        assert_eq!(visible_rows(&table, "BAL"), vec![0]);
        assert_eq!(visible_rows(&table, "XYZ"), Vec::<usize>::new());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = table();
        assert_eq!(visible_rows(&table, "gle"), vec![1]);
        assert_eq!(visible_rows(&table, "batt"), vec![2]);
    }
}
