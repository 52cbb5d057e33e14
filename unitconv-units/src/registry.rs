//! Alias registry - lowercased alias -> unit, one table per domain

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{ConversionError, Domain, LengthUnit, MassUnit, TemperatureUnit, Unit, UnitKind};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known unit aliases.
///
/// Aliases are kept per domain; the same spelling may appear in more than
/// one domain, so lookups always name the domain they search.
pub struct UnitRegistry {
    domains: HashMap<Domain, HashMap<String, Unit>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            domains: HashMap::new(),
        };
        registry.register::<TemperatureUnit>();
        registry.register::<LengthUnit>();
        registry.register::<MassUnit>();
        registry
    }

    fn register<U: UnitKind>(&mut self) {
        let table = self.domains.entry(U::DOMAIN).or_default();
        for &unit in U::ALL {
            for alias in unit.aliases() {
                // First registration wins on a case-folded collision
                table.entry(alias.to_lowercase()).or_insert_with(|| unit.into());
            }
        }
    }

    /// Look up `text` among the aliases of one domain
    pub fn resolve_in(&self, domain: Domain, text: &str) -> Option<Unit> {
        self.domains.get(&domain)?.get(&text.to_lowercase()).copied()
    }

    /// Whether `text` names a unit of `domain`
    pub fn is_member(&self, domain: Domain, text: &str) -> bool {
        self.resolve_in(domain, text).is_some()
    }

    /// Like `resolve_in`, failing with `UnknownUnit`
    pub fn parse_in(&self, domain: Domain, text: &str) -> Result<Unit, ConversionError> {
        self.resolve_in(domain, text)
            .ok_or_else(|| ConversionError::UnknownUnit(text.to_string()))
    }

    /// Resolve `text` in the first domain (by probe order) that knows it
    pub fn resolve(&self, text: &str) -> Option<Unit> {
        Domain::ALL.iter().find_map(|&domain| self.resolve_in(domain, text))
    }

    /// First domain (by probe order) containing both phrases
    pub fn shared_domain(&self, from: &str, to: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|&domain| self.is_member(domain, from) && self.is_member(domain, to))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let c = UNITS.resolve("C");
        assert_eq!(c, Some(Unit::Temperature(TemperatureUnit::Celsius)));
        assert_eq!(UNITS.resolve("celsius"), c);
        assert_eq!(UNITS.resolve("CELSIUS"), c);
    }

    #[test]
    fn test_resolve_in_wrong_domain() {
        assert_eq!(UNITS.resolve_in(Domain::Mass, "m"), None);
        assert_eq!(
            UNITS.resolve_in(Domain::Length, "m"),
            Some(Unit::Length(LengthUnit::Meter))
        );
    }

    #[test]
    fn test_parse_in_unknown() {
        let err = UNITS.parse_in(Domain::Length, "xyz").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("xyz".to_string()));
    }

    #[test]
    fn test_shared_domain() {
        assert_eq!(UNITS.shared_domain("km", "feet"), Some(Domain::Length));
        assert_eq!(UNITS.shared_domain("kg", "oz"), Some(Domain::Mass));
        assert_eq!(UNITS.shared_domain("C", "kg"), None);
        assert_eq!(UNITS.shared_domain("xyz", "m"), None);
    }

    #[test]
    fn test_every_alias_is_registered() {
        for domain in Domain::ALL {
            for unit in domain.units() {
                for alias in unit.aliases() {
                    assert_eq!(UNITS.resolve_in(domain, alias), Some(unit), "alias {alias}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_phrase() {
        assert_eq!(UNITS.resolve("banana"), None);
        assert_eq!(UNITS.resolve("degrees"), None);
        assert_eq!(
            UNITS.resolve("Degrees Fahrenheit"),
            Some(Unit::Temperature(TemperatureUnit::Fahrenheit))
        );
    }
}
