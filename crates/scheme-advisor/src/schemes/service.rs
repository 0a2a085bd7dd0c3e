use std::sync::Arc;

use tracing::warn;

use super::catalog::SchemeCatalog;
use super::domain::{ApplicantProfile, Identity, Scheme, SchemeId};
use super::eligibility::eligible_schemes;
use super::filter::{apply_facets, matches_search, FacetSelection};
use super::ranking::{rank, RankedScheme, RankingMode};
use super::repository::{saved_schemes_key, StateStore, StoreError, PROFILE_KEY};

/// Service composing the catalog, the eligibility engine, and the keyed
/// store behind the profile and saved-list features.
pub struct RecommendationService<S> {
    catalog: Arc<SchemeCatalog>,
    store: Arc<S>,
}

impl<S> RecommendationService<S>
where
    S: StateStore + 'static,
{
    pub fn new(catalog: Arc<SchemeCatalog>, store: Arc<S>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    /// Replace the active profile wholesale. A later submission supersedes,
    /// never merges.
    pub fn submit_profile(&self, profile: &ApplicantProfile) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(profile)?;
        self.store.put(PROFILE_KEY, raw)?;
        Ok(())
    }

    /// Snapshot read of the active profile. Malformed persisted JSON reads
    /// as absent, never as an error.
    pub fn active_profile(&self) -> Result<Option<ApplicantProfile>, ServiceError> {
        let Some(raw) = self.store.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(%err, "stored profile is malformed; treating as absent");
                Ok(None)
            }
        }
    }

    /// Scored top recommendations for the active profile.
    pub fn recommendations(&self) -> Result<Vec<RankedScheme>, ServiceError> {
        let profile = self.active_profile()?.ok_or(ServiceError::ProfileMissing)?;
        let eligible = eligible_schemes(&self.catalog, &profile);
        Ok(rank(eligible, RankingMode::Recommendation))
    }

    /// Eligible schemes narrowed by facets and search, in browse order.
    pub fn results(
        &self,
        facets: &FacetSelection,
        search: &str,
    ) -> Result<Vec<RankedScheme>, ServiceError> {
        let profile = self.active_profile()?.ok_or(ServiceError::ProfileMissing)?;
        let eligible = eligible_schemes(&self.catalog, &profile);
        let narrowed = apply_facets(eligible, facets, search);
        Ok(rank(narrowed, RankingMode::Browse))
    }

    /// Whole-catalog browse with optional text search; no profile involved.
    pub fn browse(&self, search: &str) -> Vec<Scheme> {
        let term = search.trim().to_lowercase();
        self.catalog
            .iter()
            .filter(|scheme| term.is_empty() || matches_search(scheme, &term))
            .cloned()
            .collect()
    }

    /// The signed-in user's saved collection. Malformed persisted JSON
    /// reads as empty.
    pub fn saved_schemes(&self, identity: &Identity) -> Result<Vec<Scheme>, ServiceError> {
        let key = self.saved_key(identity)?;
        Ok(self.load_saved(&key)?)
    }

    /// Append a denormalized copy of the scheme to the saved collection.
    /// Saving an already-saved scheme is a no-op.
    pub fn save_scheme(
        &self,
        identity: &Identity,
        id: SchemeId,
    ) -> Result<Vec<Scheme>, ServiceError> {
        let key = self.saved_key(identity)?;
        let scheme = self
            .catalog
            .get(id)
            .ok_or(ServiceError::UnknownScheme(id))?;
        let mut saved = self.load_saved(&key)?;
        if !saved.iter().any(|entry| entry.id == id) {
            saved.push(scheme.clone());
            self.store_saved(&key, &saved)?;
        }
        Ok(saved)
    }

    /// Remove the scheme from the saved collection; removing a scheme that
    /// is not saved is a no-op.
    pub fn unsave_scheme(
        &self,
        identity: &Identity,
        id: SchemeId,
    ) -> Result<Vec<Scheme>, ServiceError> {
        let key = self.saved_key(identity)?;
        let mut saved = self.load_saved(&key)?;
        let before = saved.len();
        saved.retain(|entry| entry.id != id);
        if saved.len() != before {
            self.store_saved(&key, &saved)?;
        }
        Ok(saved)
    }

    fn saved_key(&self, identity: &Identity) -> Result<String, ServiceError> {
        match (&identity.user_id, identity.is_signed_in) {
            (Some(user_id), true) => Ok(saved_schemes_key(user_id)),
            _ => Err(ServiceError::SignedOut),
        }
    }

    fn load_saved(&self, key: &str) -> Result<Vec<Scheme>, StoreError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(saved) => Ok(saved),
            Err(err) => {
                warn!(%err, key, "saved collection is malformed; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn store_saved(&self, key: &str, saved: &[Scheme]) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(saved)?;
        self.store.put(key, raw)?;
        Ok(())
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no applicant profile on record")]
    ProfileMissing,
    #[error("sign in required")]
    SignedOut,
    #[error("scheme {0} is not in the catalog")]
    UnknownScheme(SchemeId),
    #[error("could not encode persisted value: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
