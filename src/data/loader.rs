use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::model::ParamSet;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Parameter file loader
// ---------------------------------------------------------------------------

/// Parse a `.param` file into an ordered name → value mapping.
///
/// The format is one comma-delimited `name,value` pair per line. Lines that
/// do not yield exactly two fields (blank lines, comments, over-long
/// records) are skipped without complaint. Duplicate names keep their first
/// position and take the last value seen. Fields are not trimmed.
pub fn load_param_file(path: &Path) -> Result<ParamSet, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut params = ParamSet::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if record.len() != 2 {
            skipped += 1;
            continue;
        }
        params.insert(record[0].to_string(), record[1].to_string());
    }

    if skipped > 0 {
        debug!("{}: skipped {skipped} malformed line(s)", path.display());
    }

    Ok(params)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_param_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_name_value_pairs_in_file_order() {
        let file = write_param_file("RTL_ALT,1500\nANGLE_MAX,4500\nARMING_CHECK,1\n");
        let params = load_param_file(file.path()).unwrap();

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["RTL_ALT", "ANGLE_MAX", "ARMING_CHECK"]);
        assert_eq!(params["RTL_ALT"], "1500");
    }

    #[test]
    fn skips_lines_without_exactly_two_fields() {
        let file = write_param_file("A,1\nno delimiter here\nB,2\nC,3,extra\n\nD,4\n");
        let params = load_param_file(file.path()).unwrap();

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B", "D"]);
    }

    #[test]
    fn duplicate_names_take_last_value_at_first_position() {
        let file = write_param_file("A,1\nB,2\nA,9\n");
        let params = load_param_file(file.path()).unwrap();

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(params["A"], "9");
    }

    #[test]
    fn fields_are_not_trimmed() {
        let file = write_param_file("A , 1\n");
        let params = load_param_file(file.path()).unwrap();

        assert_eq!(params["A "], " 1");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_param_file(Path::new("/nonexistent/copter.param")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
