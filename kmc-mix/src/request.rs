use crate::{
    component::{Component, Components, Field},
    defaults::{DEFAULT_PERCENTAGE_TEXT, DEFAULT_UNIT_COSTS, UNIT_COST_PLACES},
    error::MixError,
};
use kmc_utils::numbers::{format_fixed, is_blank};
use serde::{Deserialize, Serialize};

/// Raw text of the three inputs belonging to one component.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ComponentInput {
    /// Known weight in pounds. Blank when not supplied.
    pub weight: String,
    /// Dollars per pound.
    pub unit_cost: String,
    /// Share of the batch by weight, 0 to 100.
    pub percentage: String,
}

/// Everything a caller typed into the mix form, as text.
///
/// Nothing is parsed until the calculator needs it, so a field that loses
/// precedence never causes a parse failure. Blank text means "not supplied".
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct MixRequest {
    pub total_weight: String,
    pub components: Components<ComponentInput>,
}

impl MixRequest {
    /// A request with every field blank.
    pub fn new() -> Self {
        MixRequest::default()
    }

    /// A request pre-filled with the default percentages and unit costs,
    /// as the form shows them on start-up. No quantity is set.
    pub fn seeded() -> Self {
        MixRequest {
            total_weight: String::new(),
            components: Components::from_fn(|c| ComponentInput {
                weight: String::new(),
                unit_cost: format_fixed(DEFAULT_UNIT_COSTS[c], UNIT_COST_PLACES),
                percentage: DEFAULT_PERCENTAGE_TEXT[c].to_string(),
            }),
        }
    }

    /// Build a request from `field name -> text` pairs.
    ///
    /// Field names follow [`Field`]'s display form ("total_weight",
    /// "water_weight", "tru_core_cost", "chromostop_percentage", ...).
    /// Fields that are not mentioned stay blank.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, MixError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = MixRequest::new();
        request.apply_fields(fields)?;
        Ok(request)
    }

    /// Overwrite fields from `field name -> text` pairs. Later pairs win.
    /// Stops at the first unknown name; fields set before it stay set.
    pub fn apply_fields<I, K, V>(&mut self, fields: I) -> Result<(), MixError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, text) in fields {
            let name = name.as_ref();
            let field = name
                .parse::<Field>()
                .map_err(|e| MixError::UnknownField(e.0))?;
            self.set(field, text);
        }
        Ok(())
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::TotalWeight => &self.total_weight,
            Field::Weight(c) => &self.components[c].weight,
            Field::UnitCost(c) => &self.components[c].unit_cost,
            Field::Percentage(c) => &self.components[c].percentage,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::TotalWeight => &mut self.total_weight,
            Field::Weight(c) => &mut self.components[c].weight,
            Field::UnitCost(c) => &mut self.components[c].unit_cost,
            Field::Percentage(c) => &mut self.components[c].percentage,
        };
        *slot = text.into();
    }

    /// True when the field holds non-blank text.
    pub fn is_supplied(&self, field: Field) -> bool {
        !is_blank(self.text(field))
    }

    /// Component weights that hold text, in canonical order.
    pub fn supplied_weights(&self) -> Vec<Component> {
        Component::ALL
            .into_iter()
            .filter(|c| self.is_supplied(Field::Weight(*c)))
            .collect()
    }

    pub fn with_field(mut self, field: Field, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn with_total_weight(self, text: impl Into<String>) -> Self {
        self.with_field(Field::TotalWeight, text)
    }

    pub fn with_weight(self, component: Component, text: impl Into<String>) -> Self {
        self.with_field(Field::Weight(component), text)
    }

    pub fn with_unit_cost(self, component: Component, text: impl Into<String>) -> Self {
        self.with_field(Field::UnitCost(component), text)
    }

    pub fn with_percentage(self, component: Component, text: impl Into<String>) -> Self {
        self.with_field(Field::Percentage(component), text)
    }
}
