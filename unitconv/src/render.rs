//! Result sentence renderer

use std::fmt;
use serde::{Deserialize, Serialize};
use unitconv_core::format_magnitude;
use unitconv_units::Unit;

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from: Unit,
    pub result: f64,
    pub to: Unit,
}

impl fmt::Display for Conversion {
    /// `<input> <input word> is <result> <result word>`, each word agreeing
    /// with its own magnitude
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_magnitude(self.value),
            self.from.word_for(self.value),
            format_magnitude(self.result),
            self.to.word_for(self.result),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::{LengthUnit, MassUnit, TemperatureUnit};

    #[test]
    fn test_plural_both_sides() {
        let conv = Conversion {
            value: 100.0,
            from: TemperatureUnit::Celsius.into(),
            result: 212.0,
            to: TemperatureUnit::Fahrenheit.into(),
        };
        assert_eq!(conv.to_string(), "100.0 degrees Celsius is 212.0 degrees Fahrenheit");
    }

    #[test]
    fn test_singular_input() {
        let conv = Conversion {
            value: 1.0,
            from: LengthUnit::Meter.into(),
            result: 1.0 / 0.3048,
            to: LengthUnit::Foot.into(),
        };
        assert_eq!(conv.to_string(), "1.0 meter is 3.280839895013123 feet");
    }

    #[test]
    fn test_singular_result() {
        let conv = Conversion {
            value: 1000.0,
            from: MassUnit::Gram.into(),
            result: 1.0,
            to: MassUnit::Kilogram.into(),
        };
        assert_eq!(conv.to_string(), "1000.0 grams is 1.0 kilogram");
    }

    #[test]
    fn test_zero_is_plural() {
        let conv = Conversion {
            value: 0.0,
            from: LengthUnit::Inch.into(),
            result: 0.0,
            to: LengthUnit::Centimeter.into(),
        };
        assert_eq!(conv.to_string(), "0.0 inches is 0.0 centimeters");
    }
}
