//! unitconv Units - temperature, length and mass
//!
//! Each domain is an enum implementing [`UnitKind`]: aliases, display names
//! and conversion formulas live on the variants. [`UNITS`] indexes the
//! aliases case-insensitively, one table per domain.
//!
//! Categories:
//! - Temperature (C, F, K)
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Mass (g, kg, mg, lb, oz)

mod domain;
mod unit;
mod temperature;
mod length;
mod mass;
mod convert;
mod registry;

pub use domain::Domain;
pub use unit::{Unit, UnitKind, ConversionError};
pub use temperature::TemperatureUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use registry::{UnitRegistry, UNITS};

#[cfg(test)]
mod laws {
    use super::*;
    use proptest::prelude::*;

    fn all_units() -> Vec<Unit> {
        Domain::ALL.iter().flat_map(|d| d.units()).collect()
    }

    fn same_domain_pair() -> impl Strategy<Value = (Unit, Unit)> {
        prop::sample::select(Domain::ALL.to_vec()).prop_flat_map(|domain| {
            let units = domain.units();
            (prop::sample::select(units.clone()), prop::sample::select(units))
        })
    }

    proptest! {
        #[test]
        fn round_trip_returns_input((a, b) in same_domain_pair(), x in -1.0e6f64..1.0e6) {
            let there = a.convert_to(x, b).unwrap();
            let back = b.convert_to(there, a).unwrap();
            // offsets (459.67) dominate the error for small temperatures
            let tolerance = 1e-9 * (x.abs() + 500.0);
            prop_assert!((back - x).abs() <= tolerance, "{a:?} -> {b:?}: {x} came back as {back}");
        }

        #[test]
        fn identity_is_exact(index in 0usize..16, x in prop::num::f64::NORMAL) {
            let unit = all_units()[index];
            prop_assert_eq!(unit.convert_to(x, unit).unwrap(), x);
        }
    }

    #[test]
    fn sixteen_units_in_total() {
        assert_eq!(all_units().len(), 16);
    }
}
