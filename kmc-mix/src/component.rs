use crate::error::ParseNameError;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// One of the four ingredients of the mix.
///
/// The declaration order is the canonical order: it decides which known
/// component weight wins when more than one is supplied.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Water,
    BoricAcid,
    TruCore,
    Chromostop,
}

impl Component {
    /// All components in canonical order.
    pub const ALL: [Component; 4] = [
        Component::Water,
        Component::BoricAcid,
        Component::TruCore,
        Component::Chromostop,
    ];

    /// Field-name prefix, e.g. "boric_acid" in "boric_acid_weight".
    pub fn key(&self) -> &'static str {
        match self {
            Component::Water => "water",
            Component::BoricAcid => "boric_acid",
            Component::TruCore => "tru_core",
            Component::Chromostop => "chromostop",
        }
    }

    /// Human-readable name shown next to results.
    pub fn label(&self) -> &'static str {
        match self {
            Component::Water => "Water",
            Component::BoricAcid => "Boric Acid",
            Component::TruCore => "Tru-Core Concentrate",
            Component::Chromostop => "Chromostop",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Component {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseNameError(s.to_string()))
    }
}

/// One value per component, stored as four named fields.
///
/// Iteration always visits the components in canonical order.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Components<T> {
    pub water: T,
    pub boric_acid: T,
    pub tru_core: T,
    pub chromostop: T,
}

impl<T> Components<T> {
    pub fn new(water: T, boric_acid: T, tru_core: T, chromostop: T) -> Self {
        Components {
            water,
            boric_acid,
            tru_core,
            chromostop,
        }
    }

    /// Build by calling `f` once per component, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Component) -> T) -> Self {
        let water = f(Component::Water);
        let boric_acid = f(Component::BoricAcid);
        let tru_core = f(Component::TruCore);
        let chromostop = f(Component::Chromostop);
        Components::new(water, boric_acid, tru_core, chromostop)
    }

    /// Like [`Components::from_fn`], stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Component) -> Result<T, E>) -> Result<Self, E> {
        let water = f(Component::Water)?;
        let boric_acid = f(Component::BoricAcid)?;
        let tru_core = f(Component::TruCore)?;
        let chromostop = f(Component::Chromostop)?;
        Ok(Components::new(water, boric_acid, tru_core, chromostop))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, &T)> {
        Component::ALL.into_iter().map(move |c| (c, &self[c]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Component, &T) -> U) -> Components<U> {
        Components::from_fn(|c| f(c, &self[c]))
    }

    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(Component, &T) -> Result<U, E>,
    ) -> Result<Components<U>, E> {
        Components::try_from_fn(|c| f(c, &self[c]))
    }
}

impl<T> Index<Component> for Components<T> {
    type Output = T;

    fn index(&self, component: Component) -> &T {
        match component {
            Component::Water => &self.water,
            Component::BoricAcid => &self.boric_acid,
            Component::TruCore => &self.tru_core,
            Component::Chromostop => &self.chromostop,
        }
    }
}

impl<T> IndexMut<Component> for Components<T> {
    fn index_mut(&mut self, component: Component) -> &mut T {
        match component {
            Component::Water => &mut self.water,
            Component::BoricAcid => &mut self.boric_acid,
            Component::TruCore => &mut self.tru_core,
            Component::Chromostop => &mut self.chromostop,
        }
    }
}

/// A single text input of the mix form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    TotalWeight,
    Weight(Component),
    UnitCost(Component),
    Percentage(Component),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::TotalWeight => f.write_str("total_weight"),
            Field::Weight(c) => write!(f, "{}_weight", c.key()),
            Field::UnitCost(c) => write!(f, "{}_cost", c.key()),
            Field::Percentage(c) => write!(f, "{}_percentage", c.key()),
        }
    }
}

impl FromStr for Field {
    type Err = ParseNameError;

    /// Parse names like "total_weight", "tru_core_cost" or
    /// "water_percentage".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "total_weight" {
            return Ok(Field::TotalWeight);
        }
        let unknown = || ParseNameError(s.to_string());
        let (prefix, suffix) = s.rsplit_once('_').ok_or_else(unknown)?;
        let component = prefix.parse::<Component>().map_err(|_| unknown())?;
        match suffix {
            "weight" => Ok(Field::Weight(component)),
            "cost" => Ok(Field::UnitCost(component)),
            "percentage" => Ok(Field::Percentage(component)),
            _ => Err(unknown()),
        }
    }
}
