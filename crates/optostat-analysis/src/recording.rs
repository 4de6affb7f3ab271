//! Session recordings loaded from `.npy` files
//!
//! A recording is a `rows x samples` matrix of `f64` values, one physical
//! quantity per row (see [`channel`](crate::channel) for the layout). Files
//! are always read fully into memory.

use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView1, Axis};

use crate::{
    channel::{ChannelMap, ChannelMapping},
    error::AnalysisError,
    statistics::ChannelStatistics,
    summary::SummaryRow,
};

/// One recording held fully in memory.
#[derive(Debug, Clone)]
pub struct SessionRecording {
    path: PathBuf,
    data: Array2<f64>,
}

impl SessionRecording {
    /// Loads a 2-D `float64` array from a `.npy` file.
    pub fn load<P>(path: P) -> Result<Self, AnalysisError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = ndarray_npy::read_npy::<_, Array2<f64>>(path).map_err(|source| {
            AnalysisError::LoadRecording {
                path: path.to_owned(),
                source,
            }
        })?;
        Ok(Self::from_array(path, data))
    }

    pub fn from_array<P>(path: P, data: Array2<f64>) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            data,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.data.ncols()
    }

    /// Checks that every row referenced by `map` exists.
    pub fn validate(&self, map: &ChannelMap) -> Result<(), AnalysisError> {
        let required = map.required_rows();
        if self.num_rows() < required {
            return Err(AnalysisError::StructuralMismatch {
                path: self.path.clone(),
                rows: self.num_rows(),
                required,
            });
        }
        Ok(())
    }

    /// Returns the samples of one physical row.
    pub fn row(&self, row: usize) -> Result<ArrayView1<'_, f64>, AnalysisError> {
        if row >= self.num_rows() {
            return Err(AnalysisError::StructuralMismatch {
                path: self.path.clone(),
                rows: self.num_rows(),
                required: row + 1,
            });
        }
        Ok(self.data.index_axis(Axis(0), row))
    }

    /// Reduces a single mapped channel.
    pub fn channel_statistics(
        &self,
        mapping: ChannelMapping,
    ) -> Result<ChannelStatistics, AnalysisError> {
        let samples = self.row(mapping.row)?;
        ChannelStatistics::from_array(&samples).ok_or_else(|| AnalysisError::EmptyChannel {
            path: self.path.clone(),
            channel: mapping.channel,
        })
    }

    /// Reduces every channel of `map`, in map order, into one summary row.
    pub fn summarize(&self, map: &ChannelMap) -> Result<SummaryRow, AnalysisError> {
        self.validate(map)?;
        let mut values = Vec::with_capacity(map.mappings().len() * ChannelStatistics::LEN);
        for &mapping in map.mappings() {
            values.extend(self.channel_statistics(mapping)?.to_array());
        }
        Ok(SummaryRow {
            source: self.path.clone(),
            values,
        })
    }
}
