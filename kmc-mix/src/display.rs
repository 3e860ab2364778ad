//! Formatted results handed back to whatever shows them to the user.

use crate::{
    calculator::MixResult,
    component::{Component, Components},
    error::CalculationError,
};
use kmc_utils::numbers::{format_dollars, format_pounds};
use serde::Serialize;
use std::fmt;

/// How a message should be presented.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Text colour used by the mix form.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "green",
            Severity::Error => "red",
        }
    }
}

/// A successful calculation, rounded to 2 decimals for display.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MixDisplay {
    /// e.g. "735.00 lbs"
    pub weights: Components<String>,
    /// e.g. "1000.00 lbs"
    pub total_weight: String,
    /// e.g. "$2.88"
    pub blended_cost: String,
}

impl From<&MixResult> for MixDisplay {
    fn from(result: &MixResult) -> Self {
        MixDisplay {
            weights: result.weights.map(|_, w| format_pounds(*w)),
            total_weight: format_pounds(result.total_weight),
            blended_cost: format_dollars(result.blended_cost),
        }
    }
}

impl fmt::Display for MixDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (component, weight) in self.weights.iter() {
            writeln!(f, "{} Weight: {}", component, weight)?;
        }
        writeln!(f, "Total Weight: {}", self.total_weight)?;
        write!(f, "Total Cost per Pound: {}", self.blended_cost)
    }
}

/// What the caller gets back from a calculation.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayResult {
    Success(MixDisplay),
    Error { message: String, severity: Severity },
}

impl DisplayResult {
    pub fn severity(&self) -> Severity {
        match self {
            DisplayResult::Success(_) => Severity::Success,
            DisplayResult::Error { severity, .. } => *severity,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DisplayResult::Success(_))
    }

    pub fn weight(&self, component: Component) -> Option<&str> {
        match self {
            DisplayResult::Success(mix) => Some(&mix.weights[component]),
            DisplayResult::Error { .. } => None,
        }
    }
}

impl From<Result<MixResult, CalculationError>> for DisplayResult {
    fn from(outcome: Result<MixResult, CalculationError>) -> Self {
        match outcome {
            Ok(result) => DisplayResult::Success(MixDisplay::from(&result)),
            Err(e) => DisplayResult::Error {
                message: e.to_string(),
                severity: Severity::Error,
            },
        }
    }
}
