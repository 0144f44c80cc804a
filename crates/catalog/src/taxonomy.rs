//! ThreatTaxonomy - Threat categories keyed by identifier

use shared::{AdvisorError, Result, Severity, ThreatCategory, UnknownThreatCategoryError};
use std::collections::BTreeMap;

/// Immutable mapping of threat keys to category metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatTaxonomy {
    categories: BTreeMap<String, ThreatCategory>,
}

impl ThreatTaxonomy {
    /// Build a taxonomy, rejecting invalid records and duplicate keys
    pub fn new(categories: impl IntoIterator<Item = ThreatCategory>) -> Result<Self> {
        let mut map = BTreeMap::new();

        for category in categories {
            category.validate()?;
            if map.contains_key(&category.key) {
                return Err(AdvisorError::InvalidThreatCategory {
                    key: category.key.clone(),
                    reason: "duplicate key".to_string(),
                });
            }
            map.insert(category.key.clone(), category);
        }

        Ok(Self { categories: map })
    }

    /// Look up a category, failing with the list of known keys
    pub fn get(&self, key: &str) -> Result<&ThreatCategory> {
        self.categories.get(key).ok_or_else(|| {
            UnknownThreatCategoryError {
                key: key.to_string(),
                available: self.keys().map(str::to_string).collect(),
            }
            .into()
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories in key order
    pub fn iter(&self) -> impl Iterator<Item = &ThreatCategory> {
        self.categories.values()
    }

    /// Categories at or above a severity
    pub fn at_least(&self, severity: Severity) -> Vec<&ThreatCategory> {
        self.iter().filter(|c| c.severity >= severity).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
