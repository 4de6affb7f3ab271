//! Physical channels of a force/torque recording and their row mapping
//!
//! A session recording stores one physical quantity per row:
//!
//! ```text
//! row 0  time (s, sampled at 1000 Hz)
//! row 1  Fx   force along x
//! row 2  Fy   force along y
//! row 3  Fz   force along z
//! row 4  Tx   torque about x
//! row 5  Ty   torque about y
//! row 6  Tz   torque about z
//! ```
//!
//! A [`ChannelMap`] selects which channels are summarized, which row each is
//! read from, and the order in which their statistics appear in the output.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Number of physical rows in a complete recording.
pub const PHYSICAL_ROWS: usize = 7;

/// One physical quantity of a recording.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Channel {
    Time,
    Fx,
    Fy,
    Fz,
    Tx,
    Ty,
    Tz,
}

impl Channel {
    /// Row index of this channel in the standard recording layout.
    #[must_use]
    pub const fn default_row(self) -> usize {
        match self {
            Self::Time => 0,
            Self::Fx => 1,
            Self::Fy => 2,
            Self::Fz => 3,
            Self::Tx => 4,
            Self::Ty => 5,
            Self::Tz => 6,
        }
    }
}

/// A channel and the physical row it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMapping {
    pub channel: Channel,
    pub row: usize,
}

impl ChannelMapping {
    /// Maps `channel` to its row in the standard layout.
    #[must_use]
    pub const fn standard(channel: Channel) -> Self {
        Self {
            channel,
            row: channel.default_row(),
        }
    }
}

/// Ordered, validated list of channel mappings.
///
/// The order of the mappings is the column order of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChannelMapping>", into = "Vec<ChannelMapping>")]
pub struct ChannelMap {
    mappings: Vec<ChannelMapping>,
}

impl Default for ChannelMap {
    /// `Fx, Fy, Tz, Fz` in the standard layout.
    fn default() -> Self {
        Self {
            mappings: [Channel::Fx, Channel::Fy, Channel::Tz, Channel::Fz]
                .into_iter()
                .map(ChannelMapping::standard)
                .collect(),
        }
    }
}

impl ChannelMap {
    pub fn new(mappings: Vec<ChannelMapping>) -> Result<Self, AnalysisError> {
        if mappings.is_empty() {
            return Err(AnalysisError::InvalidChannelMap {
                reason: "no channels selected".to_owned(),
            });
        }
        for (i, mapping) in mappings.iter().enumerate() {
            if mappings[..i].iter().any(|m| m.channel == mapping.channel) {
                return Err(AnalysisError::InvalidChannelMap {
                    reason: format!("channel {} selected more than once", mapping.channel),
                });
            }
        }
        Ok(Self { mappings })
    }

    /// Builds a map from channels in the standard layout.
    pub fn from_channels<I>(channels: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = Channel>,
    {
        Self::new(
            channels
                .into_iter()
                .map(ChannelMapping::standard)
                .collect(),
        )
    }

    #[must_use]
    pub fn mappings(&self) -> &[ChannelMapping] {
        &self.mappings
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.mappings.iter().map(|m| m.channel)
    }

    /// Minimum number of physical rows a recording must have to be summarized.
    #[must_use]
    pub fn required_rows(&self) -> usize {
        self.mappings.iter().map(|m| m.row + 1).max().unwrap_or(0)
    }
}

impl TryFrom<Vec<ChannelMapping>> for ChannelMap {
    type Error = AnalysisError;

    fn try_from(mappings: Vec<ChannelMapping>) -> Result<Self, Self::Error> {
        Self::new(mappings)
    }
}

impl From<ChannelMap> for Vec<ChannelMapping> {
    fn from(map: ChannelMap) -> Self {
        map.mappings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_order_and_rows() {
        let map = ChannelMap::default();
        let pairs = map
            .mappings()
            .iter()
            .map(|m| (m.channel, m.row))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            [
                (Channel::Fx, 1),
                (Channel::Fy, 2),
                (Channel::Tz, 6),
                (Channel::Fz, 3)
            ]
        );
        assert_eq!(map.required_rows(), PHYSICAL_ROWS);
    }

    #[test]
    fn test_parse_channel_is_case_insensitive() {
        assert_eq!("fx".parse::<Channel>().unwrap(), Channel::Fx);
        assert_eq!("TZ".parse::<Channel>().unwrap(), Channel::Tz);
        assert_eq!("time".parse::<Channel>().unwrap(), Channel::Time);
        assert!("fw".parse::<Channel>().is_err());
    }

    #[test]
    fn test_rejects_empty_and_duplicate_channels() {
        assert!(matches!(
            ChannelMap::new(vec![]),
            Err(AnalysisError::InvalidChannelMap { .. })
        ));
        assert!(matches!(
            ChannelMap::from_channels([Channel::Fx, Channel::Fy, Channel::Fx]),
            Err(AnalysisError::InvalidChannelMap { .. })
        ));
    }

    #[test]
    fn test_required_rows_follows_highest_row() {
        let map = ChannelMap::from_channels([Channel::Fx, Channel::Fz]).unwrap();
        assert_eq!(map.required_rows(), 4);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"channel":"Fx","row":1},{"channel":"Tz","row":6}]"#;
        let map: ChannelMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.mappings().len(), 2);

        let empty = serde_json::from_str::<ChannelMap>("[]");
        assert!(empty.is_err());
    }
}
