//! Catalog: ordered, validated collection of cue definitions.

use std::collections::HashMap;

use navicue_core::errors::CatalogError;
use navicue_core::CueDefinition;

use crate::fingerprint;

/// Immutable cue catalog. Catalog order is the selector's tie-break order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cues: Vec<CueDefinition>,
    index: HashMap<String, usize>,
    fingerprint: String,
}

impl Catalog {
    /// Validate every definition and id uniqueness, then freeze the catalog.
    pub fn new(cues: Vec<CueDefinition>) -> Result<Self, CatalogError> {
        let index = Self::build_index(&cues).inspect_err(|e| {
            tracing::warn!(cues = cues.len(), error = %e, "catalog rejected");
        })?;
        let fingerprint = fingerprint::fingerprint(&cues);
        tracing::debug!(cues = cues.len(), fingerprint = %fingerprint, "catalog loaded");
        Ok(Self {
            cues,
            index,
            fingerprint,
        })
    }

    fn build_index(cues: &[CueDefinition]) -> Result<HashMap<String, usize>, CatalogError> {
        let mut index = HashMap::with_capacity(cues.len());
        for (position, cue) in cues.iter().enumerate() {
            cue.validate()?;
            if index.insert(cue.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId { id: cue.id.clone() });
            }
        }
        Ok(index)
    }

    /// Parse a JSON array of definitions and validate it.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let cues: Vec<CueDefinition> =
            serde_json::from_str(source).map_err(|e| {
                tracing::warn!(error = %e, "catalog document rejected");
                CatalogError::ParseFailed {
                    reason: e.to_string(),
                }
            })?;
        Self::new(cues)
    }

    /// Candidates in catalog order.
    ///
    /// With a tag filter, only cues sharing at least one tag are returned.
    /// No match yields an empty vector; callers handle "no candidates".
    pub fn get_candidates(&self, filter_tags: Option<&[String]>) -> Vec<&CueDefinition> {
        match filter_tags {
            None => self.cues.iter().collect(),
            Some(tags) => self
                .cues
                .iter()
                .filter(|cue| tags.iter().any(|t| cue.tags.contains(t)))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&CueDefinition> {
        self.index.get(id).map(|&i| &self.cues[i])
    }

    /// Catalog position of a cue id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CueDefinition> {
        self.cues.iter()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// blake3 content digest, computed once at construction.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
