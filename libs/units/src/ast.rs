use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `unit^exponent` factor of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub unit: String,
    pub exponent: i32,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            0 => write!(f, "1"),
            1 => write!(f, "{}", self.unit),
            e => write!(f, "{}^{}", self.unit, e),
        }
    }
}

/// A multiplicative product `coefficient * term1 * ... * termN`.
///
/// Unit names in terms are plain strings; resolution against a
/// [`UnitRegistry`](crate::UnitRegistry) happens in
/// [`validate`](crate::validate) and [`expand`](crate::expand).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    pub coefficient: f64,
    pub terms: Vec<Term>,
}

impl Expression {
    /// The multiplicative identity: coefficient 1, no terms.
    pub fn one() -> Self {
        Self {
            coefficient: 1.0,
            terms: vec![],
        }
    }

    /// Whether any term names `unit` directly. Non-recursive: a unit that
    /// only appears through another definition's formula does not count.
    pub fn refers_to_unit(&self, unit: &str) -> bool {
        self.terms.iter().any(|t| t.unit == unit)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "1");
        }
        let mut wrote = false;
        if self.coefficient != 1.0 {
            write!(f, "{:.6}", self.coefficient)?;
            wrote = true;
        }
        for term in &self.terms {
            if wrote {
                write!(f, "*")?;
            }
            write!(f, "{}", term)?;
            wrote = true;
        }
        Ok(())
    }
}
