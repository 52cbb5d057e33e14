//! Measurement domains
//!
//! A unit only converts to units of its own domain.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{LengthUnit, MassUnit, TemperatureUnit, Unit, UnitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Temperature,
    Length,
    Mass,
}

impl Domain {
    /// All domains, in the order they are probed when resolving a unit phrase
    pub const ALL: [Domain; 3] = [Domain::Temperature, Domain::Mass, Domain::Length];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Temperature => "temperature",
            Domain::Length => "length",
            Domain::Mass => "mass",
        }
    }

    /// Quantity label used when a negative magnitude is rejected.
    /// `None` means the domain accepts negative values.
    pub fn floor_label(self) -> Option<&'static str> {
        match self {
            Domain::Temperature => None,
            Domain::Length => Some("Length"),
            Domain::Mass => Some("Weight"),
        }
    }

    /// Units of this domain in declaration order
    pub fn units(self) -> Vec<Unit> {
        match self {
            Domain::Temperature => collect::<TemperatureUnit>(),
            Domain::Length => collect::<LengthUnit>(),
            Domain::Mass => collect::<MassUnit>(),
        }
    }
}

fn collect<U: UnitKind>() -> Vec<Unit> {
    U::ALL.iter().map(|u| (*u).into()).collect()
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_order() {
        assert_eq!(Domain::ALL, [Domain::Temperature, Domain::Mass, Domain::Length]);
    }

    #[test]
    fn test_floor_labels() {
        assert_eq!(Domain::Temperature.floor_label(), None);
        assert_eq!(Domain::Length.floor_label(), Some("Length"));
        assert_eq!(Domain::Mass.floor_label(), Some("Weight"));
    }

    #[test]
    fn test_units_belong_to_domain() {
        for domain in Domain::ALL {
            let units = domain.units();
            assert!(!units.is_empty());
            assert!(units.iter().all(|u| u.domain() == domain));
        }
        assert_eq!(Domain::Temperature.units().len(), 3);
        assert_eq!(Domain::Length.units().len(), 8);
        assert_eq!(Domain::Mass.units().len(), 5);
    }
}
