//! Reduction of expressions to SI base units.

use std::collections::BTreeMap;

use tracing::debug;

use crate::ast::{Expression, Term};
use crate::error::{Error, Result};
use crate::parser;
use crate::registry::UnitRegistry;

/// Recursively replace every derived-unit term with its base-unit expansion.
///
/// Base-unit terms pass through unchanged. For a derived unit, its formula is
/// parsed and expanded depth-first; each resulting sub-term's exponent is
/// multiplied by the outer term's exponent, and a sub-expression coefficient
/// other than 1 is raised to the outer exponent and folded into the result's
/// coefficient. A definition that reaches back into a unit currently being
/// expanded fails with [`Error::Cycle`].
pub fn expand(expr: &Expression, registry: &UnitRegistry) -> Result<Expression> {
    let mut in_progress = Vec::new();
    expand_inner(expr, registry, &mut in_progress)
}

fn expand_inner(
    expr: &Expression,
    registry: &UnitRegistry,
    in_progress: &mut Vec<String>,
) -> Result<Expression> {
    let mut coefficient = expr.coefficient;
    let mut terms = Vec::new();

    for term in &expr.terms {
        let unit = registry.get(&term.unit)?;
        if unit.is_base() {
            terms.push(term.clone());
            continue;
        }
        if in_progress.iter().any(|name| name == unit.name()) {
            return Err(Error::Cycle(unit.name().to_string()));
        }

        in_progress.push(unit.name().to_string());
        let sub = parser::parse(unit.formula())?;
        let sub = expand_inner(&sub, registry, in_progress)?;
        in_progress.pop();

        debug!(
            unit = unit.name(),
            formula = unit.formula(),
            "expanded derived unit"
        );

        for mut sub_term in sub.terms {
            sub_term.exponent *= term.exponent;
            terms.push(sub_term);
        }
        if sub.coefficient != 1.0 {
            coefficient *= sub.coefficient.powi(term.exponent);
        }
    }

    Ok(Expression { coefficient, terms })
}

/// Combine like terms and drop zero exponents.
///
/// The coefficient is carried through unchanged. Terms come out sorted by
/// unit name so that rendered output is reproducible.
pub fn normalize(expr: &Expression) -> Expression {
    let mut by_unit: BTreeMap<String, i32> = BTreeMap::new();
    for term in &expr.terms {
        *by_unit.entry(term.unit.clone()).or_insert(0) += term.exponent;
    }

    let terms = by_unit
        .into_iter()
        .filter(|(_, exponent)| *exponent != 0)
        .map(|(unit, exponent)| Term { unit, exponent })
        .collect();

    Expression {
        coefficient: expr.coefficient,
        terms,
    }
}
