//! Summary table assembled from per-session channel statistics
//!
//! # CSV layout
//!
//! ```text
//! ,Fx_min,Fx_max,Fx_mean,Fx_median,Fx_std,Fy_min,...,Fz_std
//! 0,-5.0,5.0,3.0,3.0,1.8973665961010275,...
//! 1,...
//! ```
//!
//! The first, unlabeled column is the zero-based row index. Values are
//! written in shortest round-trip form, with a signed two-digit exponent
//! below `1e-4` and from `1e16` on; NaN is written as an empty field.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    channel::{Channel, ChannelMap},
    error::AnalysisError,
    statistics::{ChannelStatistics, STATISTIC_NAMES},
};

/// Column names of a summary table, derived from a channel map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySchema {
    channels: Vec<Channel>,
    columns: Vec<String>,
}

impl SummarySchema {
    #[must_use]
    pub fn from_channel_map(map: &ChannelMap) -> Self {
        let channels = map.channels().collect::<Vec<_>>();
        let columns = channels
            .iter()
            .flat_map(|channel| {
                STATISTIC_NAMES
                    .iter()
                    .map(move |stat| format!("{channel}_{stat}"))
            })
            .collect();
        Self { channels, columns }
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Statistics of one recording: one [`ChannelStatistics`] block per channel, concatenated.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub source: PathBuf,
    pub values: Vec<f64>,
}

impl SummaryRow {
    /// Returns the statistics block of the `index`-th channel.
    #[must_use]
    pub fn block(&self, index: usize) -> Option<&[f64]> {
        let start = index * ChannelStatistics::LEN;
        self.values.get(start..start + ChannelStatistics::LEN)
    }
}

/// Summary rows in discovery order under one schema.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    schema: SummarySchema,
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    #[must_use]
    pub fn new(schema: SummarySchema) -> Self {
        Self {
            schema,
            rows: vec![],
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if the row width does not match the schema.
    pub fn push(&mut self, row: SummaryRow) {
        assert_eq!(
            row.values.len(),
            self.schema.len(),
            "row width must match the schema"
        );
        self.rows.push(row);
    }

    #[must_use]
    pub fn schema(&self) -> &SummarySchema {
        &self.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the table as CSV, header first.
    pub fn write_csv<W>(&self, writer: W) -> Result<(), csv::Error>
    where
        W: io::Write,
    {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(
            std::iter::once("").chain(self.schema.columns().iter().map(String::as_str)),
        )?;
        for (index, row) in self.rows.iter().enumerate() {
            writer.write_record(
                std::iter::once(index.to_string()).chain(row.values.iter().map(|&v| format_value(v))),
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Renders the whole table in memory, then writes it to `path` in one step.
    ///
    /// Nothing is written if rendering fails.
    pub fn save(&self, path: &Path) -> Result<(), AnalysisError> {
        let mut buffer = vec![];
        self.write_csv(&mut buffer)
            .map_err(|source| AnalysisError::RenderTable { source })?;
        fs::write(path, buffer).map_err(|source| AnalysisError::WriteTable {
            path: path.to_owned(),
            source,
        })
    }
}

/// Shortest round-trip form; exponents carry a sign and at least two digits (`3.2e-05`, `1e+16`).
fn format_value(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
