//! Resolve a parsed request against the unit registry and convert it

use tracing::debug;
use unitconv_core::{RequestError, UNKNOWN_UNIT};
use unitconv_units::UnitRegistry;

use crate::request::ConversionRequest;
use crate::render::Conversion;

/// Resolve both unit phrases, validate, and convert.
///
/// Checks run in a fixed order and stop at the first failure: unknown
/// units, domain mismatch, negative magnitude for floored domains.
pub fn dispatch(request: &ConversionRequest, registry: &UnitRegistry) -> Result<Conversion, RequestError> {
    let from_known = registry.resolve(&request.from);
    let to_known = registry.resolve(&request.to);

    let (from_any, to_any) = match (from_known, to_known) {
        (None, None) => return Err(RequestError::impossible_unknown()),
        (None, Some(to)) => return Err(RequestError::impossible(UNKNOWN_UNIT, to.plural())),
        (Some(from), None) => return Err(RequestError::impossible(from.plural(), UNKNOWN_UNIT)),
        (Some(from), Some(to)) => (from, to),
    };

    let Some(domain) = registry.shared_domain(&request.from, &request.to) else {
        debug!(from = ?from_any, to = ?to_any, "units in different domains");
        return Err(RequestError::impossible(from_any.plural(), to_any.plural()));
    };

    if request.value < 0.0 {
        if let Some(quantity) = domain.floor_label() {
            return Err(RequestError::negative(quantity));
        }
    }

    let from = registry.parse_in(domain, &request.from)?;
    let to = registry.parse_in(domain, &request.to)?;
    let result = from.convert_to(request.value, to)?;
    debug!(%domain, value = request.value, result, "conversion done");

    Ok(Conversion {
        value: request.value,
        from,
        result,
        to,
    })
}
