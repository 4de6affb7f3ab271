//! Resolution of the aggregator configuration from a JSON file and command-line flags
//!
//! Command-line flags take precedence over the configuration file, which
//! takes precedence over built-in defaults. The input directory and output
//! path have no default and must come from one of the two sources.

use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use clap::Args;
use optostat_analysis::{
    aggregator::{AggregatorConfig, FailurePolicy},
    channel::{Channel, ChannelMap, ChannelMapping},
};
use serde::Deserialize;

use crate::util;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ConfigArg {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing the session recordings
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Destination CSV file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Substring a file name must contain to be processed [default: OptoForce]
    #[arg(long)]
    pub marker: Option<String>,

    /// File extension of the recordings [default: npy]
    #[arg(long)]
    pub extension: Option<String>,

    /// Channels to summarize, in output column order (comma-separated) [default: fx,fy,tz,fz]
    #[arg(long, value_delimiter = ',')]
    pub channels: Option<Vec<Channel>>,

    /// Report progress every N processed files [default: 10]
    #[arg(long)]
    pub progress_every: Option<NonZeroUsize>,

    /// Process files in file name order instead of directory order
    #[arg(long)]
    pub sort_by_name: bool,

    /// Skip recordings that cannot be loaded or summarized instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,
}

/// Configuration file contents; every field is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input_directory: Option<PathBuf>,
    output_path: Option<PathBuf>,
    channel_map: Option<Vec<ChannelMapping>>,
    marker: Option<String>,
    extension: Option<String>,
    progress_every: Option<NonZeroUsize>,
    sort_by_name: Option<bool>,
    failure_policy: Option<FailurePolicy>,
}

impl ConfigArg {
    pub(crate) fn resolve(&self) -> anyhow::Result<AggregatorConfig> {
        let file = match &self.config {
            Some(path) => util::read_json_file::<ConfigFile, _>("configuration", path)?,
            None => ConfigFile::default(),
        };

        let input_directory = self
            .input_dir
            .clone()
            .or(file.input_directory)
            .context("No input directory given (use --input-dir or `input_directory` in the configuration file)")?;
        let output_path = self
            .output
            .clone()
            .or(file.output_path)
            .context("No output path given (use --output or `output_path` in the configuration file)")?;

        let mut config = AggregatorConfig::new(input_directory, output_path);

        if let Some(channels) = &self.channels {
            config.channel_map = ChannelMap::from_channels(channels.iter().copied())
                .context("Invalid --channels")?;
        } else if let Some(mappings) = file.channel_map {
            config.channel_map =
                ChannelMap::new(mappings).context("Invalid `channel_map` in configuration file")?;
        }
        if let Some(marker) = self.marker.clone().or(file.marker) {
            config.filter.marker = marker;
        }
        if let Some(extension) = self.extension.clone().or(file.extension) {
            config.filter.extension = extension;
        }
        config.filter.validate().context("Invalid file filter")?;
        if let Some(every) = self.progress_every.or(file.progress_every) {
            config.progress_every = every;
        }
        config.sort_by_name = self.sort_by_name || file.sort_by_name.unwrap_or(false);
        config.failure_policy = if self.skip_invalid {
            FailurePolicy::Skip
        } else {
            file.failure_policy.unwrap_or_default()
        };

        Ok(config)
    }
}
