//! Catalog persistence.
//!
//! The catalog is stored as human-readable JSON, keys sorted (the catalog
//! is a `BTreeMap`, so serialization order is the key order). Loading is
//! deliberately forgiving: a missing or undecodable file yields `Ok(None)`
//! so callers fall back to rebuilding from the live index page. Writes are
//! last-writer-wins; rebuilds are rare and idempotent, so no coordination
//! is attempted.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::catalog::Catalog;
use crate::error::Result;

/// Load a previously saved catalog, if a usable one exists at `path`.
pub fn load(path: &Path) -> Result<Option<Catalog>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    match serde_json::from_str::<Catalog>(&raw) {
        Ok(catalog) => Ok(Some(catalog)),
        Err(err) => {
            debug!("discarding undecodable catalog cache at {}: {err}", path.display());
            Ok(None)
        }
    }
}

/// Write the catalog to `path` as indented JSON.
pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
    let raw = serde_json::to_string_pretty(catalog)?;
    fs::write(path, raw)?;
    debug!("wrote catalog cache ({} champions) to {}", catalog.len(), path.display());
    Ok(())
}
