use crate::{
    component::{Component, Components, Field},
    display::DisplayResult,
    error::{CalculationError, ConfigError, MixError},
    request::MixRequest,
};
use kmc_utils::numbers::{is_blank, parse_number};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Calculator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    percent_tolerance: f64,
}

impl Default for CalculatorConfig {
    /// Percentages must add up to exactly 100.
    fn default() -> Self {
        CalculatorConfig {
            percent_tolerance: 0.0,
        }
    }
}

impl CalculatorConfig {
    /// Accept percentage sums within `tolerance` of 100.
    pub fn with_percent_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(CalculatorConfig {
            percent_tolerance: tolerance,
        })
    }

    pub fn percent_tolerance(&self) -> f64 {
        self.percent_tolerance
    }
}

/// Which quantity the total weight came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMode {
    /// Forward: the total weight was given.
    TotalWeight,
    /// Inverse: the total was worked back from this component's weight.
    ComponentWeight(Component),
}

/// Output of [`MixCalculator::derive_weights`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DerivedWeights {
    pub weights: Components<f64>,
    pub total_weight: f64,
    pub mode: DerivationMode,
}

/// A finished calculation. Values are kept at full precision; rounding
/// happens when the result is displayed.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct MixResult {
    /// Pounds of each component.
    pub weights: Components<f64>,
    /// Pounds in the whole batch.
    pub total_weight: f64,
    /// Dollars per pound of the finished mix.
    pub blended_cost: f64,
    pub mode: DerivationMode,
}

/// Stateless mix calculator.
///
/// Every operation reads a [`MixRequest`] and parses only the fields it
/// needs. Nothing is kept between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixCalculator {
    config: CalculatorConfig,
}

impl MixCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        MixCalculator { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn number(request: &MixRequest, field: Field) -> Result<f64, MixError> {
        let text = request.text(field);
        parse_number(text).map_err(|_| MixError::Parse {
            field,
            text: text.to_string(),
        })
    }

    fn percentages(request: &MixRequest) -> Result<Components<f64>, MixError> {
        Components::try_from_fn(|c| Self::number(request, Field::Percentage(c)))
    }

    /// Sum of the four percentages, added in canonical order.
    pub fn percentage_sum(&self, request: &MixRequest) -> Result<f64, MixError> {
        let percentages = Self::percentages(request)?;
        Ok(percentages.iter().fold(0.0, |sum, (_, p)| sum + p))
    }

    /// Like [`MixCalculator::validate_percentages`], but says why it failed.
    /// Returns the sum on success.
    pub fn check_percentages(&self, request: &MixRequest) -> Result<f64, MixError> {
        let sum = self.percentage_sum(request)?;
        // With a zero tolerance this is exact equality; NaN never passes.
        if (sum - 100.0).abs() <= self.config.percent_tolerance {
            Ok(sum)
        } else {
            Err(MixError::PercentageMismatch { sum })
        }
    }

    /// True iff every percentage is a number and they add up to 100.
    pub fn validate_percentages(&self, request: &MixRequest) -> bool {
        self.check_percentages(request).is_ok()
    }

    /// The total weight, if one was given.
    ///
    /// A total of exactly 0 gives way to a component weight when there is
    /// one; otherwise it stands and every weight comes out 0.
    fn given_total_weight(
        request: &MixRequest,
        supplied: &[Component],
    ) -> Result<Option<f64>, MixError> {
        // Whitespace-only text counts as blank, not as a bad number.
        if is_blank(&request.total_weight) {
            return Ok(None);
        }
        let total = Self::number(request, Field::TotalWeight)?;
        if total == 0.0 && !supplied.is_empty() {
            debug!("Total weight is 0, using a component weight instead");
            return Ok(None);
        }
        Ok(Some(total))
    }

    /// Work out all four component weights and the batch total.
    ///
    /// A given total weight always wins. Otherwise the first component
    /// weight in canonical order is used to work back to the total; any
    /// other quantities are ignored without being parsed.
    pub fn derive_weights(&self, request: &MixRequest) -> Result<DerivedWeights, MixError> {
        let fractions = Self::percentages(request)?.map(|_, p| p / 100.0);
        let supplied = request.supplied_weights();

        let (total_weight, mode) = match Self::given_total_weight(request, &supplied)? {
            Some(total) => {
                if !supplied.is_empty() {
                    warn!(
                        "Total weight given; ignoring component weights for {:?}",
                        supplied
                    );
                }
                (total, DerivationMode::TotalWeight)
            }
            None => {
                let (&known, ignored) = supplied
                    .split_first()
                    .ok_or(MixError::InsufficientInput)?;
                if !ignored.is_empty() {
                    warn!(
                        "Using the {} weight; ignoring component weights for {:?}",
                        known, ignored
                    );
                }
                let weight = Self::number(request, Field::Weight(known))?;
                let fraction = fractions[known];
                if fraction == 0.0 {
                    return Err(MixError::DivisionByZero { component: known });
                }
                (weight / fraction, DerivationMode::ComponentWeight(known))
            }
        };

        debug!("Deriving weights from {:?}: total {} lbs", mode, total_weight);
        Ok(DerivedWeights {
            weights: fractions.map(|_, f| total_weight * f),
            total_weight,
            mode,
        })
    }

    /// Dollars per pound of the finished mix: the sum of each unit cost
    /// weighted by its percentage.
    pub fn compute_blended_cost(&self, request: &MixRequest) -> Result<f64, MixError> {
        let shares = Components::try_from_fn(|c| -> Result<f64, MixError> {
            let cost = Self::number(request, Field::UnitCost(c))?;
            let fraction = Self::number(request, Field::Percentage(c))? / 100.0;
            Ok(cost * fraction)
        })?;
        Ok(shares.iter().fold(0.0, |sum, (_, share)| sum + share))
    }

    /// Validate, derive weights and cost, in that order. The first failing
    /// step decides the error.
    pub fn calculate_mix(&self, request: &MixRequest) -> Result<MixResult, CalculationError> {
        let sum = self
            .check_percentages(request)
            .map_err(CalculationError::Percentages)?;
        debug!("Percentages add up to {}", sum);

        let derived = self.derive_weights(request).map_err(|e| match e {
            e @ MixError::Parse {
                field: Field::TotalWeight,
                ..
            } => CalculationError::TotalWeight(e),
            e => CalculationError::Weights(e),
        })?;

        let blended_cost = self
            .compute_blended_cost(request)
            .map_err(CalculationError::Cost)?;

        Ok(MixResult {
            weights: derived.weights,
            total_weight: derived.total_weight,
            blended_cost,
            mode: derived.mode,
        })
    }

    /// Run [`MixCalculator::calculate_mix`] and format the outcome for display.
    pub fn calculate_display(&self, request: &MixRequest) -> DisplayResult {
        let outcome = self.calculate_mix(request);
        if let Err(e) = &outcome {
            debug!("Calculation failed: {} ({})", e, e.reason());
        }
        outcome.into()
    }
}
