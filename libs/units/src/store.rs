//! Flat-file persistence for the unit registry.
//!
//! One definition per line, `name=formula`. Base units are reconstructed by
//! seeding on load and are never written out.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::registry::UnitRegistry;

impl UnitRegistry {
    /// Load a registry from `path`, starting from the seeded base units.
    ///
    /// A missing file yields just the seeded registry. Lines without an `=`
    /// are skipped; a line that re-defines an existing name fails the whole
    /// load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut registry = Self::new();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no registry file, starting from base units");
                return Ok(registry);
            }
            Err(err) => return Err(err.into()),
        };

        let mut loaded = 0usize;
        for line in contents.lines() {
            let Some((name, formula)) = line.split_once('=') else {
                continue;
            };
            registry.add(name.trim(), formula.trim())?;
            loaded += 1;
        }
        debug!(path = %path.display(), loaded, "loaded unit definitions");

        Ok(registry)
    }

    /// Write every derived definition to `path`, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let mut out = String::new();
        for unit in self.units() {
            if unit.is_base() {
                continue;
            }
            out.push_str(unit.name());
            out.push('=');
            out.push_str(unit.formula());
            out.push('\n');
        }
        fs::write(path, out)?;
        debug!(path = %path.display(), "saved unit definitions");

        Ok(())
    }
}
