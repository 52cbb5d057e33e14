//! Unit representation shared by every domain

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::trace;
use unitconv_core::{is_singular, RequestError};
use crate::{Domain, LengthUnit, MassUnit, TemperatureUnit, UNITS};

/// Behavior every per-domain unit enum provides
pub trait UnitKind: Copy + Eq + fmt::Debug + Into<Unit> + 'static {
    /// Domain the enum belongs to
    const DOMAIN: Domain;

    /// Every variant in declaration order
    const ALL: &'static [Self];

    /// Accepted spellings, matched case-insensitively
    fn aliases(self) -> &'static [&'static str];

    fn singular(self) -> &'static str;

    fn plural(self) -> &'static str;

    /// Convert `value` from this unit to `to`
    fn convert(self, value: f64, to: Self) -> f64;

    /// Narrow a domain-agnostic unit back to this enum
    fn from_unit(unit: Unit) -> Option<Self>;

    /// Resolve `text` within this domain
    fn parse(text: &str) -> Result<Self, ConversionError> {
        UNITS
            .parse_in(Self::DOMAIN, text)
            .and_then(|unit| Self::from_unit(unit).ok_or_else(|| ConversionError::UnknownUnit(text.to_string())))
    }

    /// Whether `text` names a unit of this domain
    fn is_member(text: &str) -> bool {
        UNITS.is_member(Self::DOMAIN, text)
    }
}

/// A unit from any domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "domain", content = "unit", rename_all = "lowercase")]
pub enum Unit {
    Temperature(TemperatureUnit),
    Length(LengthUnit),
    Mass(MassUnit),
}

impl Unit {
    pub fn domain(self) -> Domain {
        match self {
            Unit::Temperature(_) => Domain::Temperature,
            Unit::Length(_) => Domain::Length,
            Unit::Mass(_) => Domain::Mass,
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Unit::Temperature(u) => u.aliases(),
            Unit::Length(u) => u.aliases(),
            Unit::Mass(u) => u.aliases(),
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.singular(),
            Unit::Length(u) => u.singular(),
            Unit::Mass(u) => u.singular(),
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.plural(),
            Unit::Length(u) => u.plural(),
            Unit::Mass(u) => u.plural(),
        }
    }

    /// Display word agreeing with `value`: singular only for exactly 1.0
    pub fn word_for(self, value: f64) -> &'static str {
        if is_singular(value) {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Convert a value from this unit to another unit of the same domain
    pub fn convert_to(self, value: f64, target: Unit) -> Result<f64, ConversionError> {
        let result = match (self, target) {
            (Unit::Temperature(from), Unit::Temperature(to)) => from.convert(value, to),
            (Unit::Length(from), Unit::Length(to)) => from.convert(value, to),
            (Unit::Mass(from), Unit::Mass(to)) => from.convert(value, to),
            _ => {
                return Err(ConversionError::IncompatibleDomains {
                    from: self,
                    to: target,
                })
            }
        };
        trace!(value, from = ?self, to = ?target, result, "converted");
        Ok(result)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(unit: TemperatureUnit) -> Self {
        Unit::Temperature(unit)
    }
}

impl From<LengthUnit> for Unit {
    fn from(unit: LengthUnit) -> Self {
        Unit::Length(unit)
    }
}

impl From<MassUnit> for Unit {
    fn from(unit: MassUnit) -> Self {
        Unit::Mass(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

/// Errors that can occur during unit lookup or conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No unit of the searched domain has this alias
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Units live in different domains
    #[error("cannot convert {} ({}) to {} ({}): incompatible domains",
        .from.plural(), .from.domain(), .to.plural(), .to.domain())]
    IncompatibleDomains { from: Unit, to: Unit },
}

impl From<ConversionError> for RequestError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownUnit(_) => RequestError::impossible_unknown(),
            ConversionError::IncompatibleDomains { from, to } => {
                RequestError::impossible(from.plural(), to.plural())
            }
        }
    }
}
