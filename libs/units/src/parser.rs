//! Expression parsing: text like `36*km*h^-1` into [`Expression`] values.

use crate::ast::{Expression, Term};
use crate::error::{Error, Result};
use crate::registry::UnitRegistry;

/// Parse a unit expression of the form `[<coefficient>*]<term1>*...*<termN>`.
///
/// The first `*`-separated token is consumed as a floating-point coefficient
/// if it parses as one; otherwise the coefficient defaults to 1 and the token
/// is parsed as a term. A numeric-looking token in any later position is a
/// term, never a coefficient. Unit names are not resolved here; see
/// [`validate`].
pub fn parse(input: &str) -> Result<Expression> {
    let mut coefficient = 1.0;
    let mut terms = Vec::new();

    for (i, token) in input.split('*').enumerate() {
        if i == 0 {
            if let Ok(value) = token.trim().parse::<f64>() {
                coefficient = value;
                continue;
            }
        }
        terms.push(parse_term(token)?);
    }

    Ok(Expression { coefficient, terms })
}

/// Parse a single `<unit>[^<exponent>]` factor.
fn parse_term(token: &str) -> Result<Term> {
    let mut parts = token.split('^');
    let unit = parts.next().unwrap_or_default().trim();
    let exponent = parts.next();
    if parts.next().is_some() {
        return Err(Error::InvalidTerm(token.to_string()));
    }
    if unit.is_empty() {
        return Err(Error::InvalidTerm(token.to_string()));
    }

    let exponent = match exponent {
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidTerm(token.to_string()))?,
        None => 1,
    };

    Ok(Term {
        unit: unit.to_string(),
        exponent,
    })
}

/// Check that every term's unit name resolves in `registry`.
///
/// The first unresolved name is reported; cycles between definitions are not
/// detected here (see [`expand`](crate::expand)).
pub fn validate(expr: &Expression, registry: &UnitRegistry) -> Result<()> {
    for term in &expr.terms {
        registry.get(&term.unit)?;
    }
    Ok(())
}
