use std::collections::BTreeSet;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// ParamSet – one parsed parameter file
// ---------------------------------------------------------------------------

/// Ordered mapping from parameter name to raw string value, as parsed from a
/// single file. Insertion order is the file's line order; re-inserting an
/// existing key overwrites the value but keeps the original position.
pub type ParamSet = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// RowClassification – cross-file agreement state of one row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClassification {
    /// Every file holds the same non-empty value.
    AllAgree,
    /// The distinct-count heuristic fired: the number of distinct cell
    /// values (unset counted as one value) equals data columns − 1.
    AllDisagree,
    /// Everything else: mixed agreement, or at least one file lacks the
    /// parameter.
    Partial,
}

// ---------------------------------------------------------------------------
// FileColumn / Row
// ---------------------------------------------------------------------------

/// One imported parameter file. Position in the table's column list is the
/// import order; grid column 0 is always the parameter name.
#[derive(Debug, Clone)]
pub struct FileColumn {
    /// Display label: the file's stem (base name without extension).
    pub label: String,
}

/// One parameter name and its value per imported file. `cells` has exactly
/// one entry per data column; `None` means the file did not contain the
/// parameter.
#[derive(Debug, Clone)]
pub struct Row {
    pub name: String,
    pub cells: Vec<Option<String>>,
    /// Recomputed whenever the table shape changes; `None` until the table
    /// has enough columns to compare, or when the row was skipped.
    pub classification: Option<RowClassification>,
}

// ---------------------------------------------------------------------------
// AlignmentTable – the merged grid
// ---------------------------------------------------------------------------

/// In-memory grid keyed by parameter name (rows) and imported file
/// (columns). Row names are unique; every row carries one cell per column.
#[derive(Debug, Default)]
pub struct AlignmentTable {
    columns: Vec<FileColumn>,
    rows: Vec<Row>,
}

impl AlignmentTable {
    pub fn columns(&self) -> &[FileColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data columns (the name column is not counted).
    pub fn data_column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when no file is merged in. The name column only exists
    /// alongside at least one data column, so this is also "no columns".
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Merge one parsed file into the table as a new data column.
    ///
    /// The caller guarantees `label`'s source file was not merged before.
    /// The first merge creates one row per entry in file order. Later
    /// merges fill matching rows, append a row for every unmatched key,
    /// and re-sort the whole table by parameter name.
    pub fn merge_column(&mut self, label: &str, mut params: ParamSet) {
        if self.columns.is_empty() {
            self.rows = params
                .into_iter()
                .map(|(name, value)| Row {
                    name,
                    cells: vec![Some(value)],
                    classification: None,
                })
                .collect();
        } else {
            for row in &mut self.rows {
                // Matched keys are consumed so the leftover set is exactly
                // the new rows.
                row.cells.push(params.shift_remove(&row.name));
            }
            for (name, value) in params {
                let mut cells = vec![None; self.columns.len()];
                cells.push(Some(value));
                self.rows.push(Row {
                    name,
                    cells,
                    classification: None,
                });
            }
            self.rows.sort_by(|a, b| a.name.cmp(&b.name));
        }

        self.columns.push(FileColumn {
            label: label.to_string(),
        });

        if self.columns.len() >= 2 {
            self.classify_all();
        }
    }

    /// Remove a column by grid index (0 = name column, data columns start
    /// at 1). Index 0 and out-of-range indices are no-ops. Deleting the
    /// sole data column collapses the table to the fully empty state.
    pub fn delete_column(&mut self, index: usize) {
        if index == 0 || index > self.columns.len() {
            log::warn!("ignoring deletion of invalid column index {index}");
            return;
        }

        if self.columns.len() == 1 {
            // No comparison is possible with a single remaining column;
            // the name column goes with it and the next import starts over.
            self.columns.clear();
            self.rows.clear();
            return;
        }

        let data_idx = index - 1;
        self.columns.remove(data_idx);
        for row in &mut self.rows {
            row.cells.remove(data_idx);
        }
        self.classify_all();
    }

    /// Recompute the classification of every row from its current cells.
    /// Rows with an empty parameter name are skipped.
    fn classify_all(&mut self) {
        for row in &mut self.rows {
            row.classification = if row.name.is_empty() {
                None
            } else {
                Some(classify_cells(&row.cells))
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Row classifier
// ---------------------------------------------------------------------------

/// Classify one row from its data cells (`cells` must not be empty).
///
/// `AllAgree` requires every file to hold the same non-empty value.
/// `AllDisagree` uses the distinct-count heuristic: the number of distinct
/// cell values, with "unset" counted as one value, must equal the column
/// count minus one. Note this is not a pairwise-inequality check; a full
/// three-way spread (1, 2, 3) does NOT satisfy it and classifies Partial.
pub fn classify_cells(cells: &[Option<String>]) -> RowClassification {
    debug_assert!(!cells.is_empty());

    if let Some(Some(first)) = cells.first() {
        if !first.is_empty() && cells.iter().all(|c| c.as_deref() == Some(first.as_str())) {
            return RowClassification::AllAgree;
        }
    }

    let distinct: BTreeSet<Option<&str>> = cells.iter().map(|c| c.as_deref()).collect();
    if distinct.len() == cells.len() - 1 {
        return RowClassification::AllDisagree;
    }

    RowClassification::Partial
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
