use core::fmt;
use core::str::FromStr;

use crate::{Axis, ConfigurationError, Error};

/// Which axes of the surface loop endlessly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PeriodicityMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl PeriodicityMode {
    pub const ALL: [PeriodicityMode; 4] = [
        PeriodicityMode::None,
        PeriodicityMode::Horizontal,
        PeriodicityMode::Vertical,
        PeriodicityMode::Both,
    ];

    pub fn is_periodic(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Self::Both, _)
                | (Self::Horizontal, Axis::Horizontal)
                | (Self::Vertical, Axis::Vertical)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Both => "both",
        }
    }
}

impl From<PeriodicityMode> for u32 {
    fn from(mode: PeriodicityMode) -> Self {
        match mode {
            PeriodicityMode::None => 0,
            PeriodicityMode::Horizontal => 1,
            PeriodicityMode::Vertical => 2,
            PeriodicityMode::Both => 3,
        }
    }
}

impl TryFrom<u32> for PeriodicityMode {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::Horizontal),
            2 => Ok(Self::Vertical),
            3 => Ok(Self::Both),
            other => Err(ConfigurationError::UnknownPeriodicity(other).into()),
        }
    }
}

impl FromStr for PeriodicityMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(ConfigurationError::UnknownPeriodicityName.into())
    }
}

impl fmt::Display for PeriodicityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
