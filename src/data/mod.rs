// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file on disk and the two CSV files
// written at the end:
//
//   ai-ga-dataset.csv
//       │
//       ▼
//   CsvLoader             → reads rows into a Dataset
//       │
//       ▼
//   Preprocessor          → cleans every abstract (optional)
//       │
//       ▼
//   TitleAlignedSplitter  → train / test, grouped by title
//       │
//       ▼
//   CsvWriter             → train.csv, test.csv
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// In-memory table of records
pub mod dataset;

/// Reads the labelled dataset from CSV
pub mod loader;

/// Cleans and normalises abstracts
pub mod preprocessor;

/// Title-aligned train/test partitioning
pub mod splitter;

/// Writes a dataset back to CSV
pub mod writer;
