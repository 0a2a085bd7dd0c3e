//! Scheme catalog, eligibility evaluation, facet filtering, ranking, and
//! the recommendation service facade.
//!
//! Evaluation is synchronous and pure over in-memory data: the catalog is
//! loaded once and shared read-only, the active profile is read as an
//! immutable snapshot per call, and result sets are recomputed in full on
//! every request.

pub mod buckets;
pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod filter;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use buckets::{AgeBand, Band, IncomeBand, InvalidValue};
pub use catalog::{CatalogError, SchemeCatalog};
pub use domain::{
    ApplicantProfile, BandPredicate, EligibilityRule, Identity, NumericField, Scheme, SchemeId,
    ValuePredicate,
};
pub use eligibility::{eligible_schemes, is_eligible};
pub use filter::{apply_facets, FacetSelection};
pub use ranking::{rank, RankedScheme, RankingMode, MAX_RECOMMENDATIONS};
pub use repository::{saved_schemes_key, StateStore, StoreError, PROFILE_KEY};
pub use router::scheme_router;
pub use service::{RecommendationService, ServiceError};
