//! Conversion formulas
//!
//! Temperature uses an explicit pairwise table because its scales have
//! offsets. Length and mass scale through a base unit (meter, gram).

use crate::TemperatureUnit;

/// Pairwise temperature conversion
pub fn temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => 9.0 / 5.0 * value + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => 5.0 / 9.0 * (value - 32.0),
        (Fahrenheit, Kelvin) => 5.0 / 9.0 * (value + 459.67),
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => 9.0 / 5.0 * value - 459.67,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}

/// Two-step conversion through the domain's base unit.
/// Factors are "base units per one of this unit".
pub fn via_base(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    (value * from_factor) / to_factor
}
