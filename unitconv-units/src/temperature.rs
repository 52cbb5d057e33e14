//! Temperature units

use serde::{Serialize, Deserialize};
use crate::{convert, Domain, Unit, UnitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl UnitKind for TemperatureUnit {
    const DOMAIN: Domain = Domain::Temperature;

    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["degree Celsius", "degrees Celsius", "celsius", "dc", "c"],
            TemperatureUnit::Fahrenheit => &["degree Fahrenheit", "degrees Fahrenheit", "fahrenheit", "df", "f"],
            TemperatureUnit::Kelvin => &["Kelvin", "Kelvins", "k"],
        }
    }

    fn singular(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "degree Celsius",
            TemperatureUnit::Fahrenheit => "degree Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "degrees Celsius",
            TemperatureUnit::Fahrenheit => "degrees Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvins",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        convert::temperature(value, self, to)
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Temperature(u) => Some(u),
            _ => None,
        }
    }
}
