// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers that don't belong to one pipeline stage:
//
//   stopwords.rs — the process-wide English stopword set used
//                  by the text normaliser.
//
//   progress.rs  — progress bar around the cleaning loop.
//
//   manifest.rs  — optional JSON record of the effective
//                  settings and split counts of a run.
//
// Reference: Rust Book §7 (Modules)

/// Lazily initialised English stopword set
pub mod stopwords;

/// indicatif progress bar wrapper
pub mod progress;

/// JSON manifest describing a finished split
pub mod manifest;
