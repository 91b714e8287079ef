use serde::{Deserialize, Serialize};

/// Reference entry mapping a subsystem to one of its selectable tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub subsystem: String,
    pub tag_name: String,
}

/// Catalog of subsystems and their tags, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Distinct subsystems in the order they first appear.
    pub fn subsystems(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.subsystem.as_str()) {
                seen.push(entry.subsystem.as_str());
            }
        }
        seen
    }

    /// Tag names belonging to `subsystem`, in file order.
    pub fn tags_for(&self, subsystem: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.subsystem == subsystem)
            .map(|entry| entry.tag_name.as_str())
            .collect()
    }
}
