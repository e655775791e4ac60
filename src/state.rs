use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::filter::visible_rows;
use crate::data::loader::{self, LoadError};
use crate::data::model::AlignmentTable;

// ---------------------------------------------------------------------------
// ImportError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file already imported: {}", .0.display())]
    AlreadyImported(PathBuf),
    #[error(transparent)]
    Load(#[from] LoadError),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The comparison session, independent of rendering: the alignment table,
/// which file paths were imported, and the current filter / status.
pub struct AppState {
    pub table: AlignmentTable,

    /// Full paths of every file imported this session. Never shrinks:
    /// deleting a column does not make its source importable again.
    pub imported: BTreeSet<PathBuf>,

    /// Live contents of the filter text field.
    pub filter_text: String,

    /// Indices of rows passing the current filter (cached).
    pub visible_rows: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: AlignmentTable::default(),
            imported: BTreeSet::new(),
            filter_text: String::new(),
            visible_rows: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Import one parameter file: reject re-imports of the same path, load
    /// it, and merge it into the table under its file-stem label. On error
    /// the session state is unchanged.
    pub fn import_file(&mut self, path: &Path) -> Result<(), ImportError> {
        if self.imported.contains(path) {
            return Err(ImportError::AlreadyImported(path.to_path_buf()));
        }

        let params = loader::load_param_file(path)?;
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.table.merge_column(&label, params);
        self.imported.insert(path.to_path_buf());
        self.refilter();
        Ok(())
    }

    /// Delete a column by grid index and refresh the visible rows.
    pub fn delete_column(&mut self, index: usize) {
        self.table.delete_column(index);
        self.refilter();
    }

    /// Recompute `visible_rows` after a filter or table change.
    pub fn refilter(&mut self) {
        self.visible_rows = visible_rows(&self.table, &self.filter_text);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn param_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn import_merges_and_refreshes_visible_rows() {
        let a = param_file("X,1\nY,2\n");
        let b = param_file("X,1\nZ,3\n");

        let mut state = AppState::default();
        state.import_file(a.path()).unwrap();
        state.import_file(b.path()).unwrap();

        assert_eq!(state.table.rows().len(), 3);
        assert_eq!(state.table.data_column_count(), 2);
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_import_is_rejected_without_state_change() {
        let a = param_file("X,1\n");

        let mut state = AppState::default();
        state.import_file(a.path()).unwrap();

        let err = state.import_file(a.path()).unwrap_err();
        assert!(matches!(err, ImportError::AlreadyImported(_)));
        assert_eq!(state.table.data_column_count(), 1);
        assert_eq!(state.table.rows().len(), 1);
    }

    #[test]
    fn unreadable_file_leaves_state_untouched() {
        let mut state = AppState::default();
        let err = state
            .import_file(Path::new("/nonexistent/copter.param"))
            .unwrap_err();

        assert!(matches!(err, ImportError::Load(_)));
        assert!(state.table.is_empty());
        assert!(state.imported.is_empty());
    }

    #[test]
    fn deleted_column_source_stays_blocked() {
        let a = param_file("X,1\n");

        let mut state = AppState::default();
        state.import_file(a.path()).unwrap();
        state.delete_column(1);

        assert!(state.table.is_empty());
        let err = state.import_file(a.path()).unwrap_err();
        assert!(matches!(err, ImportError::AlreadyImported(_)));
    }

    #[test]
    fn filter_text_narrows_visible_rows() {
        let a = param_file("ANGLE_MAX,4500\nRTL_ALT,1500\n");

        let mut state = AppState::default();
        state.import_file(a.path()).unwrap();

        state.filter_text = "rtl".to_string();
        state.refilter();
        assert_eq!(state.visible_rows, vec![1]);

        state.filter_text = "rt".to_string();
        state.refilter();
        assert_eq!(state.visible_rows, vec![0, 1]);
    }
}
