//! Weight and blended-cost calculator for the four-part Kopcoat mix.
//!
//! A [`MixRequest`] holds the raw text of every input field. The
//! [`MixCalculator`] validates the percentages, derives the four component
//! weights (forward from a total weight, or inverse from one known component
//! weight) and computes the blended cost per pound.

pub mod calculator;
pub mod component;
pub mod defaults;
pub mod display;
pub mod error;
pub mod request;

pub use calculator::{CalculatorConfig, DerivationMode, DerivedWeights, MixCalculator, MixResult};
pub use component::{Component, Components, Field};
pub use display::{DisplayResult, MixDisplay, Severity};
pub use error::{CalculationError, ConfigError, MixError, ParseNameError};
pub use request::{ComponentInput, MixRequest};
