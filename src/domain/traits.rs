// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline only talks to storage through these traits:
//   - CsvLoader implements RecordSource
//   - CsvWriter implements RecordSink
//
// The application layer holds `&dyn RecordSource` and
// `&dyn RecordSink`, so tests can swap in in-memory versions.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::data::dataset::Dataset;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the full dataset in one go.
pub trait RecordSource {
    /// Load every record. Fails if the source is missing or malformed.
    fn load_all(&self) -> Result<Dataset>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Anything a finished split can be persisted to.
pub trait RecordSink {
    /// Write every record of `dataset`, header first.
    fn write_all(&self, dataset: &Dataset) -> Result<()>;

    /// Human-readable destination, used in log lines
    fn describe(&self) -> String;
}
