//! Name-keyed template catalogs.
//!
//! A [`Catalog`] maps template names to values and refuses duplicate
//! names at construction time. [`FeatureCatalog`] is the two-way
//! name ↔ id index over the feature templates known to vManage.

use std::collections::{btree_map, BTreeMap, HashMap};

use crate::error::{Result, TemplateError};

use super::model::FeatureTemplateRef;

/// Mapping from a unique template name to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for Catalog<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> Catalog<V> {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, failing with [`TemplateError::DuplicateTemplate`] on
    /// the first repeated name.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        let mut catalog = Self::new();
        for (name, value) in entries {
            catalog.insert(name, value)?;
        }
        Ok(catalog)
    }

    /// Add an entry. Names must be unique.
    pub fn insert(&mut self, name: String, value: V) -> Result<()> {
        match self.entries.entry(name) {
            btree_map::Entry::Occupied(entry) => Err(TemplateError::DuplicateTemplate {
                name: entry.key().clone(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_values()
    }
}

/// Two-way index between feature template names and ids.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    by_name: Catalog<String>,
    by_id: HashMap<String, String>,
}

impl FeatureCatalog {
    /// Index feature templates. Names must be unique.
    pub fn from_refs<I>(refs: I) -> Result<Self>
    where
        I: IntoIterator<Item = FeatureTemplateRef>,
    {
        let mut catalog = Self::default();
        for r in refs {
            catalog
                .by_name
                .insert(r.template_name.clone(), r.template_id.clone())?;
            catalog.by_id.insert(r.template_id, r.template_name);
        }
        Ok(catalog)
    }

    /// Id of the feature template called `name` (exact, case-sensitive).
    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Name of the feature template with `id`.
    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
