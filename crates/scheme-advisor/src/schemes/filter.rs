use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{Scheme, ValuePredicate};

/// User-selected facet values narrowing a result set. An empty set for a
/// category means no restriction for that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSelection {
    pub occupation: BTreeSet<String>,
    pub caste: BTreeSet<String>,
    pub gender: BTreeSet<String>,
}

impl FacetSelection {
    pub fn is_empty(&self) -> bool {
        self.occupation.is_empty() && self.caste.is_empty() && self.gender.is_empty()
    }
}

/// Narrow `schemes` by the facet selection and free-text search term.
///
/// Within a category selected values combine with OR (a scheme's own
/// wildcard predicate always passes); across categories, and against the
/// search term, with AND. Empty selection plus empty term is the identity.
pub fn apply_facets<'a>(
    schemes: Vec<&'a Scheme>,
    facets: &FacetSelection,
    search: &str,
) -> Vec<&'a Scheme> {
    let term = search.trim().to_lowercase();
    schemes
        .into_iter()
        .filter(|scheme| matches_facets(scheme, facets))
        .filter(|scheme| term.is_empty() || matches_search(scheme, &term))
        .collect()
}

fn matches_facets(scheme: &Scheme, facets: &FacetSelection) -> bool {
    category_matches(&scheme.eligibility.occupation, &facets.occupation)
        && category_matches(&scheme.eligibility.caste, &facets.caste)
        && category_matches(&scheme.eligibility.gender, &facets.gender)
}

fn category_matches(predicate: &ValuePredicate, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.iter().any(|value| predicate.matches(value))
}

/// Case-insensitive substring match over name, description, and tags.
/// `term` must already be lowercased.
pub(crate) fn matches_search(scheme: &Scheme, term: &str) -> bool {
    scheme.name.to_lowercase().contains(term)
        || scheme.description.to_lowercase().contains(term)
        || scheme
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}
