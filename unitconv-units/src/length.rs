//! Length units, scaled through the meter

use serde::{Serialize, Deserialize};
use crate::{convert, Domain, Unit, UnitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LengthUnit {
    /// Meters per one of this unit
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.35,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

impl UnitKind for LengthUnit {
    const DOMAIN: Domain = Domain::Length;

    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Meter => &["m", "meter", "meters"],
            LengthUnit::Kilometer => &["km", "kilometer", "kilometers"],
            LengthUnit::Centimeter => &["cm", "centimeter", "centimeters"],
            LengthUnit::Millimeter => &["mm", "millimeter", "millimeters"],
            LengthUnit::Mile => &["mi", "mile", "miles"],
            LengthUnit::Yard => &["yd", "yard", "yards"],
            LengthUnit::Foot => &["ft", "foot", "feet"],
            LengthUnit::Inch => &["in", "inch", "inches"],
        }
    }

    fn singular(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Mile => "mile",
            LengthUnit::Yard => "yard",
            LengthUnit::Foot => "foot",
            LengthUnit::Inch => "inch",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meters",
            LengthUnit::Kilometer => "kilometers",
            LengthUnit::Centimeter => "centimeters",
            LengthUnit::Millimeter => "millimeters",
            LengthUnit::Mile => "miles",
            LengthUnit::Yard => "yards",
            LengthUnit::Foot => "feet",
            LengthUnit::Inch => "inches",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            return value;
        }
        convert::via_base(value, self.meters(), to.meters())
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Length(u) => Some(u),
            _ => None,
        }
    }
}
