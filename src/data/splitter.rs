// ============================================================
// Layer 4 — Title-Aligned Train/Test Splitter
// ============================================================
// Splits the dataset so that every row sharing a paper title
// lands on the same side. Original and generated abstracts of
// the same paper are near-duplicates in topic, so letting them
// straddle the split would leak test content into training.
//
// Algorithm:
//   1. Separate rows into originals (label 0) and generated
//      (label 1), keeping input order.
//   2. Sample round(fraction × |generated|) generated rows with
//      a seeded StdRng; their titles are the train titles.
//      Exact halves round to even (5 × 0.5 → 2).
//   3. Unselected generated rows whose title is already a train
//      title join train too; the rest are generated-test.
//   4. Originals follow their title: train title → train,
//      test title → test, neither → orphan (dropped, counted).
//   5. `split` shuffles each side with an unseeded RNG.
//
// Steps 1–4 are fully determined by (fraction, seed); only the
// final row order changes between runs.
//
// Reference: rand crate documentation (seq::index::sample,
//            SliceRandom, SeedableRng)

use rand::{
    rngs::StdRng,
    seq::{index, SliceRandom},
    SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::data::dataset::Dataset;
use crate::domain::record::Record;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("split: Invalid split value {0}, expected a fraction in [0, 1]")]
    InvalidFraction(f64),
}

/// The two sides of a finished split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub train: Dataset,
    pub test:  Dataset,
}

/// Row counts per side and label, plus rows dropped or regrouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub generated_train:     usize,
    pub generated_test:      usize,
    pub original_train:      usize,
    pub original_test:       usize,
    /// Unsampled generated rows pulled into train by a shared title
    pub regrouped_generated: usize,
    /// Originals whose title matches no generated row
    pub orphaned_originals:  usize,
}

pub struct TitleAlignedSplitter {
    fraction: f64,
    seed:     u64,
}

impl TitleAlignedSplitter {
    /// `fraction` is the share of generated rows sampled into train.
    pub fn new(fraction: f64, seed: u64) -> Result<Self, SplitError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(SplitError::InvalidFraction(fraction));
        }
        Ok(Self { fraction, seed })
    }

    pub fn fraction(&self) -> f64 { self.fraction }

    pub fn seed(&self) -> u64 { self.seed }

    /// Partition and shuffle both sides.
    pub fn split(&self, dataset: &Dataset) -> (Split, SplitReport) {
        let (split, report) = self.partition(dataset);
        let mut rng = rand::thread_rng();

        let mut train = split.train.into_records();
        let mut test  = split.test.into_records();
        train.shuffle(&mut rng);
        test.shuffle(&mut rng);

        (Split { train: train.into(), test: test.into() }, report)
    }

    /// Deterministic partition: same `(fraction, seed)` and input give
    /// the same output, row order included.
    pub fn partition(&self, dataset: &Dataset) -> (Split, SplitReport) {
        let (originals, generated) = dataset.partition_by_label();
        let mut report = SplitReport::default();

        // ── Seeded sample of generated rows ──────────────────────────────────
        let n_train = ((generated.len() as f64) * self.fraction).round_ties_even() as usize;
        let n_train = n_train.min(generated.len());

        let mut rng      = StdRng::seed_from_u64(self.seed);
        let picked       = index::sample(&mut rng, generated.len(), n_train);
        let mut selected = vec![false; generated.len()];

        let mut generated_train: Vec<Record> = Vec::with_capacity(n_train);
        for i in picked.into_iter() {
            selected[i] = true;
            generated_train.push(generated[i].clone());
        }

        let train_titles: HashSet<&str> = generated
            .iter()
            .zip(&selected)
            .filter(|(_, sel)| **sel)
            .map(|(r, _)| r.title.as_str())
            .collect();

        // ── Remaining generated rows ──────────────────────────────────────────
        let mut generated_test: Vec<Record> = Vec::new();
        for (record, _) in generated.iter().zip(&selected).filter(|(_, sel)| !**sel) {
            if train_titles.contains(record.title.as_str()) {
                generated_train.push((*record).clone());
                report.regrouped_generated += 1;
            } else {
                generated_test.push((*record).clone());
            }
        }

        let test_titles: HashSet<&str> =
            generated_test.iter().map(|r| r.title.as_str()).collect();

        // ── Originals follow their title ──────────────────────────────────────
        let mut original_train: Vec<Record> = Vec::new();
        let mut original_test:  Vec<Record> = Vec::new();
        for record in originals {
            let title = record.title.as_str();
            if train_titles.contains(title) {
                original_train.push(record.clone());
            } else if test_titles.contains(title) {
                original_test.push(record.clone());
            } else {
                report.orphaned_originals += 1;
            }
        }

        if report.orphaned_originals > 0 {
            tracing::warn!(
                "Dropping {} original abstracts with no generated counterpart",
                report.orphaned_originals
            );
        }

        report.generated_train = generated_train.len();
        report.generated_test  = generated_test.len();
        report.original_train  = original_train.len();
        report.original_test   = original_test.len();

        tracing::debug!(
            "Split: train {} generated + {} original, test {} generated + {} original",
            report.generated_train,
            report.original_train,
            report.generated_test,
            report.original_test,
        );

        original_train.extend(generated_train);
        original_test.extend(generated_test);

        (
            Split { train: original_train.into(), test: original_test.into() },
            report,
        )
    }
}
