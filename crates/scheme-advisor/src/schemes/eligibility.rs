//! Pure predicate matching. No I/O, no side effects: the evaluator reads a
//! profile snapshot and a catalog record and answers yes or no.

use super::buckets::Band;
use super::catalog::SchemeCatalog;
use super::domain::{ApplicantProfile, BandPredicate, NumericField, Scheme, ValuePredicate};

impl ValuePredicate {
    /// Case-sensitive membership test; wildcard matches everything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValuePredicate::Any => true,
            ValuePredicate::OneOf(allowed) => allowed.iter().any(|candidate| candidate == value),
        }
    }
}

impl<B: Band> BandPredicate<B> {
    /// A declared band matches only when the profile value classifies into
    /// it; a value that failed to parse matches nothing but wildcard.
    pub fn matches(&self, value: &NumericField) -> bool {
        match self {
            BandPredicate::Any => true,
            BandPredicate::Band(band) => value
                .value()
                .map(|raw| B::classify(raw) == *band)
                .unwrap_or(false),
        }
    }
}

/// A scheme is eligible for the profile iff every declared predicate
/// matches.
pub fn is_eligible(scheme: &Scheme, profile: &ApplicantProfile) -> bool {
    let rule = &scheme.eligibility;
    rule.occupation.matches(&profile.occupation)
        && rule.gender.matches(&profile.gender)
        && rule.caste.matches(&profile.caste)
        && rule.age.matches(&profile.age)
        && rule.income.matches(&profile.annual_income)
}

/// All eligible schemes, in catalog (insertion) order.
pub fn eligible_schemes<'a>(
    catalog: &'a SchemeCatalog,
    profile: &ApplicantProfile,
) -> Vec<&'a Scheme> {
    catalog
        .iter()
        .filter(|scheme| is_eligible(scheme, profile))
        .collect()
}
