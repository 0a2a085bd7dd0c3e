use std::collections::HashMap;
use std::io::Read;

use super::domain::{Scheme, SchemeId};

/// Errors raised while loading the scheme catalog.
///
/// The catalog is trusted startup configuration, so defects fail the load
/// instead of being papered over.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate scheme id {0}")]
    DuplicateId(SchemeId),
}

/// Read-only, insertion-ordered collection of scheme records, loaded once
/// at process start and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
    by_id: HashMap<SchemeId, usize>,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(schemes.len());
        for (index, scheme) in schemes.iter().enumerate() {
            if by_id.insert(scheme.id, index).is_some() {
                return Err(CatalogError::DuplicateId(scheme.id));
            }
        }
        Ok(Self { schemes, by_id })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_str(raw)?;
        Self::new(schemes)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_reader(reader)?;
        Self::new(schemes)
    }

    pub fn get(&self, id: SchemeId) -> Option<&Scheme> {
        self.by_id.get(&id).map(|index| &self.schemes[*index])
    }

    /// Schemes in catalog (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
