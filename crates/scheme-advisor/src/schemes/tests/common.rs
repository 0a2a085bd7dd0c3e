use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::schemes::buckets::{AgeBand, IncomeBand};
use crate::schemes::catalog::SchemeCatalog;
use crate::schemes::domain::{
    ApplicantProfile, BandPredicate, EligibilityRule, NumericField, Scheme, SchemeId,
    ValuePredicate,
};
use crate::schemes::repository::{StateStore, StoreError};
use crate::schemes::router::scheme_router;
use crate::schemes::service::RecommendationService;

pub(super) fn one_of(values: &[&str]) -> ValuePredicate {
    ValuePredicate::OneOf(values.iter().map(|value| value.to_string()).collect())
}

pub(super) fn scheme(
    id: u32,
    name: &str,
    description: &str,
    tags: &[&str],
    eligibility: EligibilityRule,
) -> Scheme {
    Scheme {
        id: SchemeId(id),
        name: name.to_string(),
        description: description.to_string(),
        benefits: String::new(),
        apply_url: format!("https://schemes.example.gov.in/apply/{id}"),
        image_url: String::new(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        eligibility,
        application_deadline: None,
    }
}

/// Six-record fixture catalog exercising every predicate shape.
pub(super) fn catalog() -> SchemeCatalog {
    SchemeCatalog::new(vec![
        scheme(
            1,
            "Kisan Samman Grant",
            "Direct income support for small and marginal farmers.",
            &["Agriculture", "Farmer Welfare"],
            EligibilityRule {
                occupation: one_of(&["Farmer"]),
                income: BandPredicate::Band(IncomeBand::Below2_5L),
                ..EligibilityRule::default()
            },
        ),
        scheme(
            2,
            "Merit Scholarship",
            "Tuition assistance for students from low-income households.",
            &["Education", "Student"],
            EligibilityRule {
                occupation: one_of(&["Student"]),
                age: BandPredicate::Band(AgeBand::Below25),
                ..EligibilityRule::default()
            },
        ),
        scheme(
            3,
            "Startup Seed Capital",
            "Collateral-free seed funding for first-time founders.",
            &["Entrepreneurship", "Business"],
            EligibilityRule {
                occupation: one_of(&["Entrepreneur"]),
                age: BandPredicate::Band(AgeBand::From25To40),
                ..EligibilityRule::default()
            },
        ),
        scheme(
            4,
            "National Health Cover",
            "Cashless hospital cover for every enrolled household.",
            &["Health", "Insurance"],
            EligibilityRule::default(),
        ),
        scheme(
            5,
            "Women Enterprise Credit",
            "Subsidized working-capital loans for women-led businesses.",
            &["Entrepreneurship", "Women"],
            EligibilityRule {
                gender: one_of(&["Female"]),
                occupation: one_of(&["Entrepreneur", "Self-employed"]),
                ..EligibilityRule::default()
            },
        ),
        scheme(
            6,
            "Elder Pension",
            "Monthly pension for senior citizens without formal cover.",
            &["Pension", "Senior Citizens"],
            EligibilityRule {
                age: BandPredicate::Band(AgeBand::Above60),
                ..EligibilityRule::default()
            },
        ),
    ])
    .expect("fixture catalog is well formed")
}

pub(super) fn profile(
    occupation: &str,
    gender: &str,
    caste: &str,
    age: u64,
    income: u64,
) -> ApplicantProfile {
    ApplicantProfile {
        full_name: "Asha Devi".to_string(),
        age: NumericField::Value(age),
        gender: gender.to_string(),
        occupation: occupation.to_string(),
        annual_income: NumericField::Value(income),
        caste: caste.to_string(),
        marital_status: "Married".to_string(),
        education: "Graduate".to_string(),
        disability: "No".to_string(),
        state: "Bihar".to_string(),
    }
}

/// Eligible for Kisan Samman Grant (1) and National Health Cover (4).
pub(super) fn farmer_profile() -> ApplicantProfile {
    profile("Farmer", "Male", "General", 30, 200_000)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub(super) fn seed(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    pub(super) fn raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .values
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (RecommendationService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = RecommendationService::new(Arc::new(catalog()), store.clone());
    (service, store)
}

pub(super) fn router_with_service(service: RecommendationService<MemoryStore>) -> axum::Router {
    scheme_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
