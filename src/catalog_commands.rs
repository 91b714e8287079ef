use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::codec;
use crate::models::Catalog;

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    Ok(Catalog::new(codec::parse_catalog(&text)))
}

/// Print each distinct subsystem once, in catalog order.
pub fn list_subsystems<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let catalog = load_catalog(path)?;
    for subsystem in catalog.subsystems() {
        writeln!(out, "{subsystem}")?;
    }
    Ok(())
}

/// Print the tag names of `subsystem`.
pub fn list_tags<W: Write>(path: &Path, subsystem: &str, out: &mut W) -> Result<()> {
    let catalog = load_catalog(path)?;
    let tags = catalog.tags_for(subsystem);
    if tags.is_empty() {
        bail!("Subsystem '{subsystem}' not found in {}", path.display());
    }
    for tag in tags {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("subsystems.csv");
        fs::write(
            &path,
            "Subsystem,TagName\nHydraulics,HYD-01\nPower,PWR-01\nHydraulics,HYD-02\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn lists_subsystems() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        list_subsystems(&catalog_file(&dir), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hydraulics\nPower\n");
    }

    #[test]
    fn lists_tags() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        list_tags(&catalog_file(&dir), "Hydraulics", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "HYD-01\nHYD-02\n");
    }

    #[test]
    fn unknown_subsystem_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        assert!(list_tags(&catalog_file(&dir), "Cooling", &mut out).is_err());
    }
}
