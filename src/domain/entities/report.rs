//! Generation report
//!
//! Result types for a generator run.

use std::path::PathBuf;

/// What happened to a single output asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The asset was written
    Created,
    /// The asset already existed and `force` was off
    Skipped,
    /// Producing or writing the asset failed; the run continued
    Failed(String),
}

/// Outcome of one step, keyed by the asset's file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub asset: String,
    pub outcome: StepOutcome,
}

/// Result of a generator run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Directory the image assets were written to
    pub output_dir: PathBuf,
    /// Directory the manifest was written to
    pub manifest_dir: PathBuf,
    /// Whether the output directory had to be created
    pub created_output_dir: bool,
    /// Step outcomes in execution order
    pub steps: Vec<StepReport>,
}

impl GenerationReport {
    pub fn new(output_dir: PathBuf, manifest_dir: PathBuf) -> Self {
        Self {
            output_dir,
            manifest_dir,
            created_output_dir: false,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, asset: impl Into<String>, outcome: StepOutcome) {
        self.steps.push(StepReport {
            asset: asset.into(),
            outcome,
        });
    }

    pub fn outcome_for(&self, asset: &str) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|s| s.asset == asset)
            .map(|s| &s.outcome)
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Failed(_)))
    }

    /// Failed steps with their reasons
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.steps.iter().filter_map(|s| match &s.outcome {
            StepOutcome::Failed(reason) => Some((s.asset.as_str(), reason.as_str())),
            _ => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(&s.outcome)).count()
    }
}
