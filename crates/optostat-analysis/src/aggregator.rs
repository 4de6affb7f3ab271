//! Directory-wide aggregation of session recordings into a summary table
//!
//! A run has three phases:
//!
//! 1. **Discover** the eligible files of the input directory
//! 2. **Reduce** every file, in discovery order, into one [`SummaryRow`]
//! 3. **Save** the assembled [`SummaryTable`] to the output path
//!
//! Under [`FailurePolicy::Abort`] the first failing file ends the run and no
//! output is written. Under [`FailurePolicy::Skip`] failing files are logged,
//! reported in [`AggregationReport::skipped`] and contribute no row.

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    channel::ChannelMap,
    discovery::{self, FileFilter},
    error::AnalysisError,
    recording::SessionRecording,
    summary::{SummaryRow, SummarySchema, SummaryTable},
};

pub const DEFAULT_PROGRESS_EVERY: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// What to do when a single recording cannot be summarized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the run; nothing is written.
    #[default]
    Abort,
    /// Log the failure and continue without a row for that file.
    Skip,
}

/// Input, output and processing options of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub input_directory: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub channel_map: ChannelMap,
    #[serde(default)]
    pub filter: FileFilter,
    #[serde(default = "default_progress_every")]
    pub progress_every: NonZeroUsize,
    #[serde(default)]
    pub sort_by_name: bool,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_progress_every() -> NonZeroUsize {
    DEFAULT_PROGRESS_EVERY
}

impl AggregatorConfig {
    pub fn new<P, Q>(input_directory: P, output_path: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            input_directory: input_directory.into(),
            output_path: output_path.into(),
            channel_map: ChannelMap::default(),
            filter: FileFilter::default(),
            progress_every: DEFAULT_PROGRESS_EVERY,
            sort_by_name: false,
            failure_policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> SummarySchema {
        SummarySchema::from_channel_map(&self.channel_map)
    }
}

/// Progress of a run, reported every `progress_every` processed files and after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

/// A recording left out of the table under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: AnalysisError,
}

/// Outcome of a run: the assembled table and the recordings that were skipped.
#[derive(Debug)]
pub struct AggregationReport {
    pub table: SummaryTable,
    pub skipped: Vec<SkippedFile>,
}

/// Reduces every eligible recording of a directory into one summary table.
#[derive(Debug, Clone)]
pub struct SessionAggregator {
    config: AggregatorConfig,
}

impl SessionAggregator {
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn discover(&self) -> Result<Vec<PathBuf>, AnalysisError> {
        discovery::discover(
            &self.config.input_directory,
            &self.config.filter,
            self.config.sort_by_name,
        )
    }

    /// Discovers and reduces every eligible file without writing output.
    pub fn aggregate<F>(&self, on_progress: F) -> Result<AggregationReport, AnalysisError>
    where
        F: FnMut(Progress),
    {
        let files = self.discover()?;
        tracing::debug!(
            directory = %self.config.input_directory.display(),
            count = files.len(),
            "discovered session files"
        );
        self.aggregate_files(&files, on_progress)
    }

    /// Reduces `files` in order into a summary table.
    pub fn aggregate_files<F>(
        &self,
        files: &[PathBuf],
        mut on_progress: F,
    ) -> Result<AggregationReport, AnalysisError>
    where
        F: FnMut(Progress),
    {
        let total = files.len();
        let every = self.config.progress_every.get();
        let mut table = SummaryTable::new(self.config.schema());
        let mut skipped = vec![];

        for (i, path) in files.iter().enumerate() {
            match self.summarize_file(path) {
                Ok(row) => table.push(row),
                Err(error)
                    if self.config.failure_policy == FailurePolicy::Skip && error.is_per_file() =>
                {
                    tracing::warn!(path = %path.display(), %error, "skipping session file");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }

            let processed = i + 1;
            if processed % every == 0 || processed == total {
                on_progress(Progress { processed, total });
            }
        }

        Ok(AggregationReport { table, skipped })
    }

    /// Aggregates the input directory and saves the table to the output path.
    pub fn run<F>(&self, on_progress: F) -> Result<AggregationReport, AnalysisError>
    where
        F: FnMut(Progress),
    {
        let report = self.aggregate(on_progress)?;
        report.table.save(&self.config.output_path)?;
        tracing::debug!(
            path = %self.config.output_path.display(),
            rows = report.table.len(),
            "summary table written"
        );
        Ok(report)
    }

    fn summarize_file(&self, path: &Path) -> Result<SummaryRow, AnalysisError> {
        let recording = SessionRecording::load(path)?;
        tracing::debug!(
            path = %path.display(),
            rows = recording.num_rows(),
            samples = recording.num_samples(),
            "loaded recording"
        );
        recording.summarize(&self.config.channel_map)
    }
}
