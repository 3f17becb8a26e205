// ============================================================
// Layer 4 — CSV Dataset Loader
// ============================================================
// Reads the AI-GA dataset from a CSV file with a header row.
//
// Expected columns (matched by name, any order):
//   title, abstract, label
//
// Extra columns are ignored. A missing file, a missing column
// or a label other than 0/1 fails the whole load; the error
// carries the path and the csv crate's line/record position.
//
// Reference: csv crate documentation (ReaderBuilder, serde)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::path::PathBuf;

use crate::data::dataset::Dataset;
use crate::domain::record::Record;
use crate::domain::traits::RecordSource;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "ai-ga-dataset.csv";

/// Loads all records from one CSV file.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Dataset> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        // Check the header up front so a missing column is reported by name
        let headers = rdr
            .headers()
            .with_context(|| format!("Cannot read header of '{}'", self.path.display()))?
            .clone();
        for column in Record::COLUMNS {
            if !headers.iter().any(|h| h == column) {
                bail!(
                    "Dataset '{}' is missing the '{}' column (found: {})",
                    self.path.display(),
                    column,
                    headers.iter().collect::<Vec<_>>().join(", ")
                );
            }
        }

        let mut records = Vec::new();
        for row in rdr.deserialize::<Record>() {
            let record = row
                .with_context(|| format!("Malformed row in '{}'", self.path.display()))?;
            records.push(record);
        }

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(Dataset::new(records))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Label;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("data.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_rows_in_order() {
        let dir  = tempdir().unwrap();
        let path = write(
            dir.path(),
            "title,abstract,label\n\
             T1,\"We study, in depth, X.\",0\n\
             T1,Generated text,1\n",
        );
        let ds = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0], Record::new("T1", "We study, in depth, X.", Label::Original));
        assert_eq!(ds.records()[1].label, Label::Generated);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let dir  = tempdir().unwrap();
        let path = write(dir.path(), "label,id,abstract,title\n1,7,text,T9\n");
        let ds   = CsvLoader::new(&path).load_all().unwrap();
        assert_eq!(ds.records()[0], Record::new("T9", "text", Label::Generated));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv")).load_all().unwrap_err();
        assert!(err.to_string().contains("Cannot open dataset"));
    }

    #[test]
    fn test_missing_column_fails() {
        let dir  = tempdir().unwrap();
        let path = write(dir.path(), "title,label\nT1,0\n");
        let err  = CsvLoader::new(&path).load_all().unwrap_err();
        assert!(err.to_string().contains("'abstract' column"));
    }

    #[test]
    fn test_bad_label_fails() {
        let dir  = tempdir().unwrap();
        let path = write(dir.path(), "title,abstract,label\nT1,text,2\n");
        assert!(CsvLoader::new(&path).load_all().is_err());
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let dir  = tempdir().unwrap();
        let path = write(dir.path(), "title,abstract,label\n");
        assert!(CsvLoader::new(&path).load_all().unwrap().is_empty());
    }
}
