// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to turn the raw AI-GA dataset
// into train.csv and test.csv.
//
// Rules for this layer:
//   - No text cleaning or sampling logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The load → clean → split → save workflow
pub mod prepare_use_case;
