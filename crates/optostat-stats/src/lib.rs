//! Statistical utilities for the optostat project.
//!
//! This crate provides the numeric core used to summarize force/torque
//! channels:
//!
//! - **Descriptive statistics**: minimum, maximum, mean, median, variance and
//!   standard deviation of a dataset
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ```
//! use optostat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```

pub mod descriptive;
