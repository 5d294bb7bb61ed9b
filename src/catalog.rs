use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One API row. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub description: String,
    pub auth: String,
    pub https: bool,
    pub cors: String,
    pub link: String,
}

impl Entry {
    /// Blank and `No` both mean open access.
    pub fn requires_auth(&self) -> bool {
        !(self.auth.is_empty() || self.auth.eq_ignore_ascii_case("no"))
    }
}

/// Category name → entries, both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<Entry>>,
}

pub struct CatalogStats {
    pub categories: usize,
    pub entries: usize,
    pub https: usize,
    pub auth_required: usize,
}

impl Catalog {
    /// Register a category with an empty list. A repeated name is emptied in place.
    pub(crate) fn declare(&mut self, name: &str) {
        match self.categories.get_mut(name) {
            Some(entries) => entries.clear(),
            None => {
                self.categories.insert(name.to_string(), Vec::new());
            }
        }
    }

    /// Appends to a declared category; entries for unknown categories are dropped.
    pub(crate) fn push(&mut self, category: &str, entry: Entry) {
        if let Some(entries) = self.categories.get_mut(category) {
            entries.push(entry);
        }
    }

    /// Entries of one category; empty when the category does not exist.
    pub fn entries(&self, category: &str) -> &[Entry] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Case-insensitive substring match on name or description.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.all()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn all(&self) -> impl Iterator<Item = &Entry> {
        self.categories.values().flatten()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            categories: self.len(),
            entries: self.all().count(),
            https: self.all().filter(|e| e.https).count(),
            auth_required: self.all().filter(|e| e.requires_auth()).count(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Could not write JSON to '{}'", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                anyhow::bail!(
                    "Catalog file '{}' was not found. Run 'parse' first.",
                    path.display()
                )
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Could not read '{}'", path.display()))
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("'{}' is not a valid catalog file", path.display()))
    }
}
