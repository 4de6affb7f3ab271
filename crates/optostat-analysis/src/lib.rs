//! Summary statistics of force/torque sensor sessions
//!
//! This crate reduces raw force/torque recordings to the per-channel
//! statistics used to size a sensor calibration: signed extremes plus the
//! mean, median and standard deviation of the load magnitude.
//!
//! # Overview
//!
//! 1. **Discover Files** ([`discovery::discover`]): Select eligible recordings in a directory
//! 2. **Load Recordings** ([`recording::SessionRecording`]): Read `rows x samples` `.npy` matrices
//! 3. **Reduce Channels** ([`statistics::ChannelStatistics`]): Five statistics per mapped channel
//! 4. **Assemble Table** ([`summary::SummaryTable`]): One row per recording, columns per [`channel::ChannelMap`]
//! 5. **Persist** ([`summary::SummaryTable::save`]): Write the table as CSV in a single step
//!
//! [`aggregator::SessionAggregator`] drives all five steps from an
//! [`aggregator::AggregatorConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use optostat_analysis::aggregator::{AggregatorConfig, SessionAggregator};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let config = AggregatorConfig::new("recordings/", "summary.csv");
//! let aggregator = SessionAggregator::new(config);
//! let report = aggregator.run(|progress| {
//!     println!("{} of {} ...", progress.processed, progress.total);
//! })?;
//!
//! println!("Summarized {} sessions", report.table.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod channel;
pub mod discovery;
pub mod error;
pub mod recording;
pub mod statistics;
pub mod summary;
