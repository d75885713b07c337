//! Time unit selection and conversion.
//!
//! Raw costs are stored in deciseconds. The selected unit only changes
//! what is displayed, never how nodes rank against each other.

use crate::utils::config::{
    DECISECONDS_PER_SECOND, MICROSECONDS_PER_DECISECOND, MILLISECONDS_PER_DECISECOND,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Display unit for costs
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Base unit, no conversion
    #[default]
    Deciseconds,
    Milliseconds,
    Seconds,
    Microseconds,
    /// Unrecognized selector; converts as the base unit and keeps its text
    Other(String),
}

impl TimeUnit {
    /// Interpret a selector. Matching is exact; anything else, including
    /// padded or ASCII-spelled selectors, becomes `Other`.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "ds" => TimeUnit::Deciseconds,
            "ms" => TimeUnit::Milliseconds,
            "s" => TimeUnit::Seconds,
            "µs" => TimeUnit::Microseconds,
            other => TimeUnit::Other(other.to_string()),
        }
    }

    /// Suffix shown after converted figures
    pub fn label(&self) -> &str {
        match self {
            TimeUnit::Deciseconds => "ds",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Microseconds => "µs",
            TimeUnit::Other(text) => text,
        }
    }

    /// Convert a raw decisecond value into this unit
    pub fn convert(&self, deciseconds: f64) -> f64 {
        match self {
            TimeUnit::Milliseconds => deciseconds * MILLISECONDS_PER_DECISECOND,
            TimeUnit::Seconds => deciseconds / DECISECONDS_PER_SECOND,
            TimeUnit::Microseconds => deciseconds * MICROSECONDS_PER_DECISECOND,
            TimeUnit::Deciseconds | TimeUnit::Other(_) => deciseconds,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeUnit::parse(s))
    }
}

impl Serialize for TimeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TimeUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        Ok(TimeUnit::parse(&selector))
    }
}

/// Convert a raw decisecond value using a selector string
pub fn convert_time(deciseconds: f64, selector: &str) -> f64 {
    TimeUnit::parse(selector).convert(deciseconds)
}
