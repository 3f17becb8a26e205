// ============================================================
// Layer 6 — Split Manifest
// ============================================================
// Optionally records what a run did as pretty-printed JSON:
//
//   {
//     "config":  { "clean": true, "split": 0.8, "random_state": 42, ... },
//     "report":  { "generated_train": 8, ... },
//     "train_file": "out/train.csv",
//     "test_file":  "out/test.csv"
//   }
//
// Given the same input file, the config block is enough to
// rebuild the same train/test membership.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::splitter::SplitReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitManifest {
    pub config:     PrepareConfig,
    pub report:     SplitReport,
    pub train_file: PathBuf,
    pub test_file:  PathBuf,
}

pub struct ManifestWriter {
    path: PathBuf,
}

impl ManifestWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, manifest: &SplitManifest) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", self.path.display()))?;

        tracing::debug!("Saved split manifest to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir    = tempdir().unwrap();
        let writer = ManifestWriter::new(dir.path().join("runs").join("manifest.json"));
        let manifest = SplitManifest {
            config: PrepareConfig { clean: true, split: 0.5, random_state: 7, ..Default::default() },
            report: SplitReport { generated_train: 3, generated_test: 3, ..Default::default() },
            train_file: "train.csv".into(),
            test_file:  "test.csv".into(),
        };

        writer.save(&manifest).unwrap();
        let raw = fs::read_to_string(writer.path()).unwrap();
        assert!(raw.contains("\"random_state\": 7"));

        let back: SplitManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, manifest);
    }
}
