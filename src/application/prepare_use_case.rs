// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full dataset preparation in order:
//
//   Step 1: Build the splitter         (validates the fraction)
//   Step 2: Load the CSV dataset       (Layer 4 - data)
//   Step 3: Clean abstracts, optional  (Layer 4 - data)
//   Step 4: Title-aligned split        (Layer 4 - data)
//   Step 5: Write train.csv / test.csv (Layer 4 - data)
//   Step 6: Write manifest, optional   (Layer 6 - infra)
//
// The use case never prints. It reports progress through
// `PipelineEvent`s and leaves the wording to the CLI layer.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    dataset::Dataset,
    loader::{CsvLoader, DEFAULT_DATASET},
    preprocessor::clean_text,
    splitter::{SplitReport, TitleAlignedSplitter},
    writer::{CsvWriter, TEST_FILE, TRAIN_FILE},
};
use crate::domain::record::Label;
use crate::domain::traits::{RecordSink, RecordSource};
use crate::infra::{
    manifest::{ManifestWriter, SplitManifest},
    progress::ProgressReporter,
};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Built once by the CLI layer after validation and passed in
// explicitly. Serialisable so it can be embedded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub clean:        bool,
    pub split:        f64,
    pub random_state: u64,
    pub input:        PathBuf,
    pub output_dir:   PathBuf,
    pub manifest:     Option<PathBuf>,
    pub progress:     bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            clean:        false,
            split:        0.8,
            random_state: 42,
            input:        PathBuf::from(DEFAULT_DATASET),
            output_dir:   PathBuf::from("."),
            manifest:     None,
            progress:     true,
        }
    }
}

impl PrepareConfig {
    pub fn train_path(&self) -> PathBuf {
        self.output_dir.join(TRAIN_FILE)
    }

    pub fn test_path(&self) -> PathBuf {
        self.output_dir.join(TEST_FILE)
    }
}

/// Milestones of a run, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    Loaded   { rows: usize },
    Cleaning { rows: usize },
    Splitting { fraction: f64 },
    Split    { train_shape: (usize, usize), test_shape: (usize, usize) },
    Saving,
    Done,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareOutcome {
    pub report:      SplitReport,
    pub train_shape: (usize, usize),
    pub test_shape:  (usize, usize),
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run against the configured CSV input and output directory.
    pub fn execute(&self, on_event: &mut dyn FnMut(&PipelineEvent)) -> Result<PrepareOutcome> {
        let cfg     = &self.config;
        let loader  = CsvLoader::new(&cfg.input);
        let train   = CsvWriter::new(cfg.train_path());
        let test    = CsvWriter::new(cfg.test_path());

        let outcome = self.run(&loader, &train, &test, on_event)?;

        if let Some(path) = &cfg.manifest {
            let writer = ManifestWriter::new(path);
            writer.save(&SplitManifest {
                config:     cfg.clone(),
                report:     outcome.report,
                train_file: train.path().to_path_buf(),
                test_file:  test.path().to_path_buf(),
            })?;
            tracing::info!("Wrote split manifest '{}'", writer.path().display());
        }

        on_event(&PipelineEvent::Done);
        Ok(outcome)
    }

    /// The pipeline itself, over any source and sinks.
    pub fn run(
        &self,
        source:     &dyn RecordSource,
        train_sink: &dyn RecordSink,
        test_sink:  &dyn RecordSink,
        on_event:   &mut dyn FnMut(&PipelineEvent),
    ) -> Result<PrepareOutcome> {
        let cfg = &self.config;

        // ── Step 1: Validate the split before touching any data ──────────────
        let splitter = TitleAlignedSplitter::new(cfg.split, cfg.random_state)?;

        // ── Step 2: Load ──────────────────────────────────────────────────────
        let mut dataset = source.load_all()?;
        tracing::debug!(
            "Dataset has {} original and {} generated abstracts",
            dataset.count_label(Label::Original),
            dataset.count_label(Label::Generated)
        );
        on_event(&PipelineEvent::Loaded { rows: dataset.len() });

        // ── Step 3: Clean ─────────────────────────────────────────────────────
        if cfg.clean {
            on_event(&PipelineEvent::Cleaning { rows: dataset.len() });
            clean_dataset(&mut dataset, cfg.progress);
        }

        // ── Step 4: Split ─────────────────────────────────────────────────────
        on_event(&PipelineEvent::Splitting { fraction: splitter.fraction() });
        let (split, report) = splitter.split(&dataset);
        drop(dataset);

        let outcome = PrepareOutcome {
            report,
            train_shape: split.train.shape(),
            test_shape:  split.test.shape(),
        };
        on_event(&PipelineEvent::Split {
            train_shape: outcome.train_shape,
            test_shape:  outcome.test_shape,
        });
        tracing::info!(
            "Split {} train / {} test rows (seed {})",
            split.train.len(),
            split.test.len(),
            splitter.seed()
        );

        // ── Step 5: Persist ───────────────────────────────────────────────────
        on_event(&PipelineEvent::Saving);
        test_sink.write_all(&split.test)?;
        train_sink.write_all(&split.train)?;
        tracing::info!(
            "Saved '{}' and '{}'",
            train_sink.describe(),
            test_sink.describe()
        );

        Ok(outcome)
    }
}

/// Rewrite every abstract in place, with a progress bar.
fn clean_dataset(dataset: &mut Dataset, show_progress: bool) {
    let progress = ProgressReporter::new(dataset.len(), "Cleaning", show_progress);

    dataset.map_abstracts(clean_text, || progress.inc());
    progress.finish();

    tracing::info!("Cleaned {} abstracts", dataset.len());
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    struct MemorySource(Dataset);

    impl RecordSource for MemorySource {
        fn load_all(&self) -> Result<Dataset> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemorySink(RefCell<Option<Dataset>>);

    impl RecordSink for MemorySink {
        fn write_all(&self, dataset: &Dataset) -> Result<()> {
            *self.0.borrow_mut() = Some(dataset.clone());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn load_all(&self) -> Result<Dataset> {
            anyhow::bail!("source should not be read")
        }
    }

    fn paired(n: usize) -> Dataset {
        let mut records = Vec::new();
        for i in 0..n {
            records.push(Record::new(format!("T{i}"), format!("Original <b>Abstract</b> {i}"), Label::Original));
            records.push(Record::new(format!("T{i}"), format!("Generated-Abstract {i}!"),      Label::Generated));
        }
        Dataset::new(records)
    }

    fn quiet(config: PrepareConfig) -> PrepareUseCase {
        PrepareUseCase::new(PrepareConfig { progress: false, ..config })
    }

    #[test]
    fn test_run_reports_events_in_order() {
        let use_case = quiet(PrepareConfig { clean: true, ..Default::default() });
        let (train, test) = (MemorySink::default(), MemorySink::default());
        let mut events = Vec::new();

        use_case
            .run(&MemorySource(paired(10)), &train, &test, &mut |e| events.push(e.clone()))
            .unwrap();

        assert_eq!(events[0], PipelineEvent::Loaded   { rows: 20 });
        assert_eq!(events[1], PipelineEvent::Cleaning { rows: 20 });
        assert_eq!(events[2], PipelineEvent::Splitting { fraction: 0.8 });
        assert_eq!(
            events[3],
            PipelineEvent::Split { train_shape: (16, 3), test_shape: (4, 3) }
        );
        assert_eq!(events[4], PipelineEvent::Saving);
    }

    #[test]
    fn test_clean_flag_controls_abstracts() {
        let (train, test) = (MemorySink::default(), MemorySink::default());
        quiet(PrepareConfig { clean: false, ..Default::default() })
            .run(&MemorySource(paired(5)), &train, &test, &mut |_| {})
            .unwrap();
        let raw = train.0.borrow().clone().unwrap();
        assert!(raw.iter().any(|r| r.abstract_text.contains("<b>")));

        let (train, test) = (MemorySink::default(), MemorySink::default());
        quiet(PrepareConfig { clean: true, ..Default::default() })
            .run(&MemorySource(paired(5)), &train, &test, &mut |_| {})
            .unwrap();
        let cleaned = train.0.borrow().clone().unwrap();
        assert!(cleaned.iter().all(|r| !r.abstract_text.contains('<')
            && !r.abstract_text.contains('-')
            && !r.abstract_text.chars().any(|c| c.is_ascii_digit() || c.is_uppercase())));
    }

    #[test]
    fn test_invalid_split_fails_before_loading() {
        let use_case = quiet(PrepareConfig { split: 1.5, ..Default::default() });
        let (train, test) = (MemorySink::default(), MemorySink::default());
        let err = use_case.run(&FailingSource, &train, &test, &mut |_| {}).unwrap_err();
        assert!(err.to_string().contains("Invalid split value"));
        assert!(train.0.borrow().is_none());
    }

    #[test]
    fn test_execute_writes_files_and_manifest() {
        let dir   = tempdir().unwrap();
        let input = dir.path().join("ai-ga-dataset.csv");
        let mut csv = String::from("title,abstract,label\n");
        for i in 0..10 {
            csv.push_str(&format!("Paper {i},\"This Study shows, result {i}.\",0\n"));
            csv.push_str(&format!("Paper {i},Generated abstract {i},1\n"));
        }
        csv.push_str("Orphan,No generated twin,0\n");
        fs::write(&input, csv).unwrap();

        let config = PrepareConfig {
            clean:        true,
            split:        0.8,
            random_state: 42,
            input,
            output_dir:   dir.path().join("out"),
            manifest:     Some(dir.path().join("out").join("manifest.json")),
            progress:     false,
        };
        let mut saw_done = false;
        let outcome = PrepareUseCase::new(config.clone())
            .execute(&mut |e| saw_done |= *e == PipelineEvent::Done)
            .unwrap();

        assert!(saw_done);
        assert_eq!(outcome.report.orphaned_originals, 1);
        assert_eq!(outcome.train_shape, (16, 3));
        assert_eq!(outcome.test_shape,  (4, 3));

        let train = CsvLoader::new(config.train_path()).load_all().unwrap();
        let test  = CsvLoader::new(config.test_path()).load_all().unwrap();
        assert_eq!(train.len() + test.len(), 20);

        let train_titles: HashSet<_> = train.iter().map(|r| r.title.clone()).collect();
        let test_titles:  HashSet<_> = test.iter().map(|r| r.title.clone()).collect();
        assert!(train_titles.is_disjoint(&test_titles));
        assert!(train.iter().chain(test.iter()).all(|r| !r.abstract_text.contains("study")));

        let raw      = fs::read_to_string(config.manifest.clone().unwrap()).unwrap();
        let manifest: SplitManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(manifest.report, outcome.report);
        assert_eq!(manifest.config.random_state, 42);
    }

    #[test]
    fn test_execute_missing_input_fails() {
        let dir = tempdir().unwrap();
        let config = PrepareConfig {
            input:      dir.path().join("missing.csv"),
            output_dir: dir.path().to_path_buf(),
            progress:   false,
            ..Default::default()
        };
        assert!(PrepareUseCase::new(config.clone()).execute(&mut |_| {}).is_err());
        assert!(!config.train_path().exists());
    }
}
