//! Input schema for cost data documents.
//!
//! The external loader hands us one JSON object with a flat map per
//! breakdown mode:
//!
//! ```json
//! {
//!   "init": { "app/db/pool": { "cost": 12, "count": 3 } },
//!   "late": { "app/cache":   { "cost": 4,  "count": 1 } }
//! }
//! ```
//!
//! Deserialization is lenient. A bad field degrades to zero instead of
//! rejecting the whole document.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Cost and instance count recorded for one flat key
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Cost in deciseconds
    #[serde(default, deserialize_with = "lenient_cost")]
    pub cost: f64,

    /// Number of instances
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl CostEntry {
    pub fn new(cost: f64, count: u64) -> Self {
        Self { cost, count }
    }
}

fn lenient_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|c| c.is_finite() && *c >= 0.0)
        .unwrap_or(0.0))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let count = match value {
        Some(v) => v
            .as_u64()
            .or_else(|| {
                v.as_f64()
                    .filter(|c| c.is_finite() && *c > 0.0)
                    .map(|c| c.trunc() as u64)
            })
            .unwrap_or(0),
        None => 0,
    };
    Ok(count)
}

/// Flat mapping of slash-delimited keys to cost entries
///
/// Keys keep their document order. A key that repeats verbatim keeps its
/// first position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatCostMap {
    entries: Vec<(String, CostEntry)>,
    index: HashMap<String, usize>,
}

impl FlatCostMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`
    pub fn insert(&mut self, key: impl Into<String>, entry: CostEntry) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = entry,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CostEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CostEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Sum of `cost` over every entry
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(|(_, e)| e.cost).sum()
    }

    /// Sum of `count` over every entry, saturating at `u64::MAX`
    pub fn total_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, e)| acc.saturating_add(e.count))
    }
}

impl<K: Into<String>> FromIterator<(K, CostEntry)> for FlatCostMap {
    fn from_iter<I: IntoIterator<Item = (K, CostEntry)>>(iter: I) -> Self {
        let mut map = FlatCostMap::new();
        for (key, entry) in iter {
            map.insert(key, entry);
        }
        map
    }
}

impl Serialize for FlatCostMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

struct FlatCostMapVisitor;

impl<'de> Visitor<'de> for FlatCostMapVisitor {
    type Value = FlatCostMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of path strings to {cost, count} entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = FlatCostMap::new();
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            // An entry that is not an object counts as zero cost
            let entry = serde_json::from_value::<CostEntry>(value).unwrap_or_default();
            map.insert(key, entry);
        }
        Ok(map)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FlatCostMap::new())
    }
}

impl<'de> Deserialize<'de> for FlatCostMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlatCostMapVisitor)
    }
}

/// Both flat maps supplied by the data loader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostData {
    #[serde(default)]
    pub init: FlatCostMap,

    #[serde(default)]
    pub late: FlatCostMap,
}

impl CostData {
    /// The flat map a breakdown mode aggregates
    pub fn select(&self, mode: Mode) -> &FlatCostMap {
        match mode {
            Mode::Init => &self.init,
            Mode::Late => &self.late,
        }
    }
}

/// Which flat map is broken down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Init,
    Late,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Init => "init",
            Mode::Late => "late",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "init" => Ok(Mode::Init),
            "late" => Ok(Mode::Late),
            other => Err(format!("unknown mode '{}' (expected init or late)", other)),
        }
    }
}
