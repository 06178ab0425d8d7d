//! Command implementations for the `mensura` binary.
//!
//! Each command is all-or-nothing: the registry file is rewritten only after
//! every validation step has succeeded.

use std::path::Path;

use anyhow::{Context, Result};
use mensura_units::{expand, normalize, parse, validate, Error, UnitRegistry};
use tracing::debug;

/// Print every known unit: base units as bare names, derived units with
/// their defining formula.
pub fn list(file: &Path) -> Result<()> {
    let registry = load(file)?;
    for unit in registry.units() {
        if unit.is_base() {
            println!("{}", unit.name());
        } else {
            println!("{} = {}", unit.name(), unit.formula());
        }
    }
    Ok(())
}

/// Define `unit` by `expression` and persist the registry.
pub fn add(file: &Path, unit: &str, expression: &str) -> Result<()> {
    let mut registry = load(file)?;

    if registry.get(unit).is_ok() {
        return Err(Error::AlreadyDefined(unit.to_string()).into());
    }

    // Validation runs against the pre-add registry, so self-referential
    // definitions are rejected as unknown units here.
    let expr = parse(expression)?;
    validate(&expr, &registry)?;

    registry.add(unit, expression)?;
    save(&registry, file)?;
    debug!(unit, formula = expression, "added unit");
    Ok(())
}

/// Remove `unit` if policy allows, then persist the registry.
pub fn remove(file: &Path, unit: &str) -> Result<()> {
    let mut registry = load(file)?;

    check_removable(&registry, unit)?;
    registry.remove(unit)?;
    save(&registry, file)?;
    debug!(unit, "removed unit");
    Ok(())
}

/// Evaluate `expression` down to SI base units and print the canonical form.
pub fn eval(file: &Path, expression: &str) -> Result<()> {
    let registry = load(file)?;

    let expr = parse(expression)?;
    validate(&expr, &registry)?;
    let expanded = expand(&expr, &registry)?;
    println!("{}", normalize(&expanded));
    Ok(())
}

/// Removal policy: base units stay, and so does any unit another
/// definition's formula references directly. A unit that only shows up
/// through deeper expansion does not block removal.
fn check_removable(registry: &UnitRegistry, name: &str) -> std::result::Result<(), Error> {
    let unit = registry.get(name)?;
    if unit.is_base() {
        return Err(Error::BaseUnit(name.to_string()));
    }

    for other in registry.units() {
        if other.name() == name {
            continue;
        }
        let formula = parse(other.formula())?;
        if formula.refers_to_unit(name) {
            return Err(Error::InUse {
                unit: name.to_string(),
                by: other.name().to_string(),
            });
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<UnitRegistry> {
    UnitRegistry::load(file)
        .with_context(|| format!("failed to load unit registry from {}", file.display()))
}

fn save(registry: &UnitRegistry, file: &Path) -> Result<()> {
    registry
        .save(file)
        .with_context(|| format!("failed to write unit registry to {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> UnitRegistry {
        let mut registry = UnitRegistry::new();
        registry.add("km", "1000*m").unwrap();
        registry.add("h", "3600*s").unwrap();
        registry.add("kmh", "km*h^-1").unwrap();
        registry.add("mi", "1609.344*m").unwrap();
        registry
    }

    #[test]
    fn base_units_cannot_be_removed() {
        let err = check_removable(&registry(), "m").unwrap_err();
        assert!(matches!(err, Error::BaseUnit(name) if name == "m"));
    }

    #[test]
    fn directly_referenced_units_cannot_be_removed() {
        let err = check_removable(&registry(), "km").unwrap_err();
        assert!(matches!(
            err,
            Error::InUse { unit, by } if unit == "km" && by == "kmh"
        ));
    }

    #[test]
    fn unreferenced_derived_units_can_be_removed() {
        assert!(check_removable(&registry(), "mi").is_ok());
        assert!(check_removable(&registry(), "kmh").is_ok());
    }

    #[test]
    fn only_direct_references_block_removal() {
        // `x` reaches `y`'s expansion only through `z`; the guard reports
        // the direct referencer.
        let mut registry = UnitRegistry::new();
        registry.add("x", "5*m").unwrap();
        registry.add("z", "2*x").unwrap();
        registry.add("y", "3*z").unwrap();

        let err = check_removable(&registry, "x").unwrap_err();
        assert!(matches!(err, Error::InUse { by, .. } if by == "z"));
    }

    #[test]
    fn unknown_units_are_reported() {
        let err = check_removable(&registry(), "furlong").unwrap_err();
        assert!(matches!(err, Error::UnknownUnit(name) if name == "furlong"));
    }
}
