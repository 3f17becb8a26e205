// ============================================================
// Layer 4 — CSV Dataset Writer
// ============================================================
// Writes one side of the split as comma-separated text:
//
//   title,abstract,label
//   "Some title","An abstract, with commas",0
//   ...
//
// The header is always written, even for an empty dataset.
// There is no index column. Quoting is minimal: only fields
// containing a delimiter, quote or newline are quoted.
//
// The file is written in place; a failure part-way leaves a
// partial file behind.
//
// Reference: csv crate documentation (WriterBuilder, serde)

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::dataset::Dataset;
use crate::domain::record::Record;
use crate::domain::traits::RecordSink;

pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE:  &str = "test.csv";

pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvWriter {
    fn write_all(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("Cannot create '{}'", self.path.display()))?;

        wtr.write_record(Record::COLUMNS)?;
        for record in dataset {
            wtr.serialize(record)
                .with_context(|| format!("Cannot write row to '{}'", self.path.display()))?;
        }
        wtr.flush()
            .with_context(|| format!("Cannot flush '{}'", self.path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", dataset.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
