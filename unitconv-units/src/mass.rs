//! Mass units, scaled through the gram

use serde::{Serialize, Deserialize};
use crate::{convert, Domain, Unit, UnitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
}

impl MassUnit {
    /// Grams per one of this unit
    pub fn grams(self) -> f64 {
        match self {
            MassUnit::Gram => 1.0,
            MassUnit::Kilogram => 1000.0,
            MassUnit::Milligram => 0.001,
            MassUnit::Pound => 453.592,
            MassUnit::Ounce => 28.3495,
        }
    }
}

impl UnitKind for MassUnit {
    const DOMAIN: Domain = Domain::Mass;

    const ALL: &'static [Self] = &[
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Milligram,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MassUnit::Gram => &["g", "gram", "grams"],
            MassUnit::Kilogram => &["kg", "kilogram", "kilograms"],
            MassUnit::Milligram => &["mg", "milligram", "milligrams"],
            MassUnit::Pound => &["lb", "pound", "pounds"],
            MassUnit::Ounce => &["oz", "ounce", "ounces"],
        }
    }

    fn singular(self) -> &'static str {
        match self {
            MassUnit::Gram => "gram",
            MassUnit::Kilogram => "kilogram",
            MassUnit::Milligram => "milligram",
            MassUnit::Pound => "pound",
            MassUnit::Ounce => "ounce",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            MassUnit::Gram => "grams",
            MassUnit::Kilogram => "kilograms",
            MassUnit::Milligram => "milligrams",
            MassUnit::Pound => "pounds",
            MassUnit::Ounce => "ounces",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            return value;
        }
        convert::via_base(value, self.grams(), to.grams())
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Mass(u) => Some(u),
            _ => None,
        }
    }
}
