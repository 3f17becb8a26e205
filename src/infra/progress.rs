// ============================================================
// Layer 6 — Progress Reporting
// ============================================================
// Thin wrapper over an indicatif progress bar for the cleaning
// stage. Purely cosmetic: a hidden bar accepts the same calls
// and draws nothing, so callers never branch on whether
// progress is enabled.
//
// indicatif draws to stderr and stays silent when stderr is not
// a terminal, so piping the output keeps logs clean.

use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// A bar over `len` steps, or a hidden one when `enabled` is false.
    pub fn new(len: usize, message: &'static str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: ProgressBar::hidden() };
        }

        let bar = ProgressBar::new(len as u64);
        match ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} ({eta})") {
            Ok(style) => bar.set_style(style),
            Err(e)    => tracing::debug!("Falling back to default progress style: {}", e),
        }
        bar.set_message(message);
        Self { bar }
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}
