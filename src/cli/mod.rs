// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. clap parses the flags;
// the positional `key=value` settings are validated by
// `settings::Settings` and merged into a `PrepareConfig`.
//
// All business logic is delegated to Layer 2 (application).
// This layer owns the console wording: it turns pipeline
// events into the status lines the user sees.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the settings submodule
pub mod settings;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::application::prepare_use_case::{PipelineEvent, PrepareConfig, PrepareUseCase};
use crate::data::loader::DEFAULT_DATASET;
use settings::{ConfigError, Settings};

/// The main CLI struct — clap generates the parser from the fields.
#[derive(Parser, Debug)]
#[command(
    name = "aiga-split",
    version,
    about = "Clean the AI-GA abstracts dataset and split it into title-aligned train/test sets."
)]
pub struct Cli {
    /// Run settings as key=value: clean=true|false, split=<0..1>, random_state=<n>
    #[arg(value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// CSV file with title, abstract and label columns
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub input: PathBuf,

    /// Directory where train.csv and test.csv are written
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write a JSON manifest of the run to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Don't draw a progress bar while cleaning
    #[arg(long)]
    pub no_progress: bool,
}

/// The application layer never sees clap types.
impl TryFrom<Cli> for PrepareConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let settings = Settings::parse(&cli.settings)?;
        Ok(PrepareConfig {
            clean:        settings.clean,
            split:        settings.split,
            random_state: settings.random_state,
            input:        cli.input,
            output_dir:   cli.output_dir,
            manifest:     cli.manifest,
            progress:     !cli.no_progress,
        })
    }
}

impl Cli {
    /// Validate everything, then hand off to the use case.
    pub fn run(self) -> Result<()> {
        let config = PrepareConfig::try_from(self)?;
        tracing::info!(
            "Preparing '{}' (clean={}, split={}, random_state={})",
            config.input.display(),
            config.clean,
            config.split,
            config.random_state
        );

        let use_case = PrepareUseCase::new(config);
        use_case.execute(&mut print_event)?;
        Ok(())
    }
}

/// Console wording for each pipeline milestone.
fn print_event(event: &PipelineEvent) {
    if let Some(line) = status_line(event) {
        println!("{line}");
    }
}

fn status_line(event: &PipelineEvent) -> Option<String> {
    match event {
        PipelineEvent::Loaded { .. } => None,
        PipelineEvent::Cleaning { .. } => Some("Cleaning text...".to_string()),
        PipelineEvent::Splitting { fraction } => Some(format!(
            "Splitting data into train and test sets...\n\
             The train set contains {:?}% and the test set contains {:?}% of the data",
            fraction * 100.0,
            100.0 - fraction * 100.0
        )),
        PipelineEvent::Split { train_shape, test_shape } => Some(format!(
            "The train set shape is {:?}\nThe test set shape is {:?}",
            train_shape, test_shape
        )),
        PipelineEvent::Saving => Some("Saving train and test sets...".to_string()),
        PipelineEvent::Done   => Some("Done!!!".to_string()),
    }
}
