//! Flat-file load/save behavior.

use std::fs;
use std::path::PathBuf;

use mensura_units::{Error, UnitRegistry, BASE_UNITS};

/// Per-test scratch file under the system temp directory.
fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mensura-store-{}-{}", name, std::process::id()))
}

#[test]
fn missing_file_yields_the_seeded_registry() {
    let registry = UnitRegistry::load("/nonexistent/path/mensura-units").unwrap();
    assert_eq!(registry.names().count(), BASE_UNITS.len());
}

#[test]
fn save_then_load_round_trips_derived_units() {
    let path = scratch_file("round-trip");

    let mut registry = UnitRegistry::new();
    registry.add("km", "1000*m").unwrap();
    registry.add("h", "3600*s").unwrap();
    registry.save(&path).unwrap();

    let loaded = UnitRegistry::load(&path).unwrap();
    assert_eq!(loaded.get("km").unwrap().formula(), "1000*m");
    assert_eq!(loaded.get("h").unwrap().formula(), "3600*s");
    assert_eq!(loaded.names().count(), BASE_UNITS.len() + 2);

    fs::remove_file(&path).unwrap();
}

#[test]
fn base_units_are_not_persisted() {
    let path = scratch_file("base-units");

    let mut registry = UnitRegistry::new();
    registry.add("km", "1000*m").unwrap();
    registry.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "km=1000*m\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn lines_without_an_equals_sign_are_skipped() {
    let path = scratch_file("skip-lines");
    fs::write(&path, "not a definition\nkm=1000*m\n\n").unwrap();

    let registry = UnitRegistry::load(&path).unwrap();
    assert_eq!(registry.get("km").unwrap().formula(), "1000*m");
    assert_eq!(registry.names().count(), BASE_UNITS.len() + 1);

    fs::remove_file(&path).unwrap();
}

#[test]
fn definition_sides_are_trimmed() {
    let path = scratch_file("trim");
    fs::write(&path, "  km  =  1000*m  \n").unwrap();

    let registry = UnitRegistry::load(&path).unwrap();
    assert_eq!(registry.get("km").unwrap().formula(), "1000*m");

    fs::remove_file(&path).unwrap();
}

#[test]
fn redefining_a_seeded_unit_fails_the_load() {
    let path = scratch_file("collision");
    fs::write(&path, "m=1000*mm\n").unwrap();

    let err = UnitRegistry::load(&path).unwrap_err();
    assert!(matches!(err, Error::AlreadyDefined(name) if name == "m"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn save_replaces_previous_contents() {
    let path = scratch_file("replace");

    let mut registry = UnitRegistry::new();
    registry.add("km", "1000*m").unwrap();
    registry.add("mi", "1609.344*m").unwrap();
    registry.save(&path).unwrap();

    registry.remove("mi").unwrap();
    registry.save(&path).unwrap();

    let loaded = UnitRegistry::load(&path).unwrap();
    assert!(loaded.get("km").is_ok());
    assert!(loaded.get("mi").is_err());

    fs::remove_file(&path).unwrap();
}
