//! Seed values the mix form starts with.

use crate::component::Components;

/// Starting mix percentages: water, boric acid, Tru-Core, Chromostop.
pub const DEFAULT_PERCENTAGES: Components<f64> = Components {
    water: 73.5,
    boric_acid: 3.5,
    tru_core: 21.0,
    chromostop: 2.0,
};

/// Starting unit costs in dollars per pound.
pub const DEFAULT_UNIT_COSTS: Components<f64> = Components {
    water: 0.0,
    boric_acid: 0.8586,
    tru_core: 13.0857,
    chromostop: 5.1237,
};

/// Percentages as pre-filled text. Whole numbers carry no decimal point.
pub const DEFAULT_PERCENTAGE_TEXT: Components<&str> = Components {
    water: "73.5",
    boric_acid: "3.5",
    tru_core: "21",
    chromostop: "2",
};

/// Decimal places used when pre-filling unit costs.
pub const UNIT_COST_PLACES: usize = 4;
