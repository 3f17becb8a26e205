// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the AI-GA
// dataset: one row per abstract, labelled original or generated,
// grouped by the title of the paper it belongs to.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A single labelled abstract and its label enum
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
