use std::{io, path::PathBuf};

use ndarray_npy::ReadNpyError;

use crate::channel::Channel;

/// Errors raised while discovering, loading, reducing or persisting session recordings.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("failed to read directory {}", path.display())]
    ReadDirectory { path: PathBuf, source: io::Error },
    #[display("failed to load recording {}", path.display())]
    LoadRecording { path: PathBuf, source: ReadNpyError },
    #[display(
        "structural mismatch in {}: found {rows} physical rows, at least {required} required",
        path.display()
    )]
    StructuralMismatch {
        path: PathBuf,
        rows: usize,
        required: usize,
    },
    #[display("channel {channel} in {} has no samples", path.display())]
    EmptyChannel { path: PathBuf, channel: Channel },
    #[display("invalid channel map: {reason}")]
    InvalidChannelMap { reason: String },
    #[display("invalid file filter: {reason}")]
    InvalidFileFilter { reason: String },
    #[display("failed to render summary table")]
    RenderTable { source: csv::Error },
    #[display("failed to write summary table to {}", path.display())]
    WriteTable { path: PathBuf, source: io::Error },
}

impl AnalysisError {
    /// Returns `true` if the error concerns a single recording rather than the whole run.
    ///
    /// Only these errors may be skipped under [`FailurePolicy::Skip`](crate::aggregator::FailurePolicy::Skip).
    #[must_use]
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::LoadRecording { .. } | Self::StructuralMismatch { .. } | Self::EmptyChannel { .. }
        )
    }
}
