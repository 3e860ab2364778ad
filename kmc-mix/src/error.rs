use crate::component::{Component, Field};
use thiserror::Error;

/// Why a calculation step could not produce a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixError {
    #[error("{field} is not a number: {text:?}")]
    Parse { field: Field, text: String },

    #[error("mix percentages add up to {sum}, not 100")]
    PercentageMismatch { sum: f64 },

    #[error("neither a total weight nor a component weight was supplied")]
    InsufficientInput,

    #[error("{component} weight was given but its percentage is 0")]
    DivisionByZero { component: Component },

    #[error("unknown input field {0:?}")]
    UnknownField(String),
}

/// The message shown to the user when a calculation fails.
///
/// The wrapped [`MixError`] says which step failed and why.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Mix percentages must add up to 100%.")]
    Percentages(#[source] MixError),

    #[error("Please enter valid numeric values.")]
    TotalWeight(#[source] MixError),

    #[error("Please enter valid numbers for the mix.")]
    Weights(#[source] MixError),

    #[error("Please enter valid numbers for $/lb and percentages.")]
    Cost(#[source] MixError),
}

impl CalculationError {
    pub fn reason(&self) -> &MixError {
        match self {
            CalculationError::Percentages(e)
            | CalculationError::TotalWeight(e)
            | CalculationError::Weights(e)
            | CalculationError::Cost(e) => e,
        }
    }
}

/// A component or field name that is not one of the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown name {0:?}")]
pub struct ParseNameError(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("percentage tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),
}
