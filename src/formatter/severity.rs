//! Severity buckets for a node's share of the total cost.

use crate::utils::config::{HIGH_SEVERITY_PERCENT, MEDIUM_SEVERITY_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the total a node accounts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Below 1%
    Low,
    /// From 1% up to (not including) 10%
    Medium,
    /// 10% and above
    High,
}

impl Severity {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_SEVERITY_PERCENT {
            Severity::High
        } else if percentage >= MEDIUM_SEVERITY_PERCENT {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Class name for HTML render surfaces
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "cost-low",
            Severity::Medium => "cost-med",
            Severity::High => "cost-high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
