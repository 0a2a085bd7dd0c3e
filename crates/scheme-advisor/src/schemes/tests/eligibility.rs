use super::common::*;
use crate::schemes::buckets::{AgeBand, IncomeBand};
use crate::schemes::domain::{
    BandPredicate, EligibilityRule, NumericField, Scheme, ValuePredicate,
};
use crate::schemes::eligibility::{eligible_schemes, is_eligible};

#[test]
fn wildcard_occupation_is_independent_of_profile_occupation() {
    let open = scheme(
        10,
        "Open Scheme",
        "No occupation restriction.",
        &[],
        EligibilityRule::default(),
    );

    for occupation in ["Farmer", "Student", "Entrepreneur", "Retired", "Other"] {
        let candidate = profile(occupation, "Male", "General", 30, 200_000);
        assert!(is_eligible(&open, &candidate), "failed for {occupation}");
    }
}

#[test]
fn set_predicates_match_case_sensitively() {
    let farmers_only = scheme(
        11,
        "Farmers Only",
        "Restricted by occupation.",
        &[],
        EligibilityRule {
            occupation: one_of(&["Farmer"]),
            ..EligibilityRule::default()
        },
    );

    assert!(is_eligible(
        &farmers_only,
        &profile("Farmer", "Male", "General", 30, 200_000)
    ));
    assert!(!is_eligible(
        &farmers_only,
        &profile("farmer", "Male", "General", 30, 200_000)
    ));
}

#[test]
fn age_twenty_five_sits_in_the_second_band() {
    let working_age = scheme(
        12,
        "Working Age",
        "Age banded.",
        &[],
        EligibilityRule {
            age: BandPredicate::Band(AgeBand::From25To40),
            ..EligibilityRule::default()
        },
    );
    let youth = scheme(
        13,
        "Youth",
        "Age banded.",
        &[],
        EligibilityRule {
            age: BandPredicate::Band(AgeBand::Below25),
            ..EligibilityRule::default()
        },
    );

    let candidate = profile("Farmer", "Male", "General", 25, 200_000);
    assert!(is_eligible(&working_age, &candidate));
    assert!(!is_eligible(&youth, &candidate));
}

#[test]
fn income_boundary_values_classify_upward() {
    let low_income = scheme(
        14,
        "Low Income",
        "Income banded.",
        &[],
        EligibilityRule {
            income: BandPredicate::Band(IncomeBand::Below2_5L),
            ..EligibilityRule::default()
        },
    );
    let middle_income = scheme(
        15,
        "Middle Income",
        "Income banded.",
        &[],
        EligibilityRule {
            income: BandPredicate::Band(IncomeBand::From2_5LTo5L),
            ..EligibilityRule::default()
        },
    );
    let upper_income = scheme(
        16,
        "Upper Income",
        "Income banded.",
        &[],
        EligibilityRule {
            income: BandPredicate::Band(IncomeBand::From5LTo10L),
            ..EligibilityRule::default()
        },
    );

    let at_two_and_half = profile("Farmer", "Male", "General", 30, 250_000);
    assert!(!is_eligible(&low_income, &at_two_and_half));
    assert!(is_eligible(&middle_income, &at_two_and_half));

    let at_ten_lakh = profile("Farmer", "Male", "General", 30, 1_000_000);
    assert!(is_eligible(&upper_income, &at_ten_lakh));
}

#[test]
fn invalid_numeric_value_fails_band_predicates_but_not_wildcard() {
    let banded = scheme(
        17,
        "Banded",
        "Income banded.",
        &[],
        EligibilityRule {
            income: BandPredicate::Band(IncomeBand::Below2_5L),
            ..EligibilityRule::default()
        },
    );
    let open = scheme(18, "Open", "Unrestricted.", &[], EligibilityRule::default());

    let mut candidate = profile("Farmer", "Male", "General", 30, 200_000);
    candidate.annual_income = NumericField::Invalid("two lakh".to_string());

    assert!(!is_eligible(&banded, &candidate));
    assert!(is_eligible(&open, &candidate));
}

#[test]
fn eligible_schemes_preserve_catalog_order() {
    let catalog = catalog();
    let eligible = eligible_schemes(&catalog, &farmer_profile());

    let ids: Vec<u32> = eligible.iter().map(|scheme| scheme.id.0).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn missing_eligibility_fields_default_to_wildcard() {
    let raw = r#"{
        "id": 40,
        "name": "Open Enrollment",
        "description": "No declared criteria.",
        "applyUrl": "https://schemes.example.gov.in/apply/40"
    }"#;

    let parsed: Scheme = serde_json::from_str(raw).expect("scheme parses");
    assert_eq!(parsed.eligibility, EligibilityRule::default());
    assert!(is_eligible(
        &parsed,
        &profile("Retired", "Other", "EWS", 70, 5_000_000)
    ));
}

#[test]
fn single_string_and_array_predicates_parse() {
    let raw = r#"{
        "id": 41,
        "name": "Mixed Forms",
        "description": "String and array predicates.",
        "applyUrl": "https://schemes.example.gov.in/apply/41",
        "eligibility": {
            "gender": "Female",
            "caste": ["SC/ST", "OBC"],
            "age": "25-40",
            "income": "Below 2.5L"
        }
    }"#;

    let parsed: Scheme = serde_json::from_str(raw).expect("scheme parses");
    assert_eq!(parsed.eligibility.gender, one_of(&["Female"]));
    assert_eq!(parsed.eligibility.caste, one_of(&["SC/ST", "OBC"]));
    assert_eq!(
        parsed.eligibility.age,
        BandPredicate::Band(AgeBand::From25To40)
    );
    assert_eq!(
        parsed.eligibility.income,
        BandPredicate::Band(IncomeBand::Below2_5L)
    );
}

#[test]
fn any_inside_an_array_collapses_to_wildcard() {
    let raw = r#"{
        "id": 42,
        "name": "Effectively Open",
        "description": "Array containing the wildcard.",
        "applyUrl": "https://schemes.example.gov.in/apply/42",
        "eligibility": { "occupation": ["Farmer", "Any"] }
    }"#;

    let parsed: Scheme = serde_json::from_str(raw).expect("scheme parses");
    assert_eq!(parsed.eligibility.occupation, ValuePredicate::Any);
}

#[test]
fn empty_predicate_sets_are_rejected() {
    let raw = r#"{
        "id": 43,
        "name": "Broken",
        "description": "Empty set predicate.",
        "applyUrl": "https://schemes.example.gov.in/apply/43",
        "eligibility": { "occupation": [] }
    }"#;

    assert!(serde_json::from_str::<Scheme>(raw).is_err());
}

#[test]
fn unknown_band_labels_are_rejected() {
    let raw = r#"{
        "id": 44,
        "name": "Broken Band",
        "description": "Band label outside the fixed set.",
        "applyUrl": "https://schemes.example.gov.in/apply/44",
        "eligibility": { "age": "18-25" }
    }"#;

    assert!(serde_json::from_str::<Scheme>(raw).is_err());
}

#[test]
fn profile_numeric_fields_accept_numbers_and_numeric_strings() {
    let raw = r#"{
        "fullName": "Ravi Kumar",
        "age": "32",
        "gender": "Male",
        "occupation": "Farmer",
        "annualIncome": 200000,
        "caste": "OBC",
        "maritalStatus": "Single",
        "education": "12th Pass",
        "disability": "No",
        "state": "Punjab"
    }"#;

    let parsed: crate::schemes::domain::ApplicantProfile =
        serde_json::from_str(raw).expect("profile parses");
    assert_eq!(parsed.age, NumericField::Value(32));
    assert_eq!(parsed.annual_income, NumericField::Value(200_000));

    let garbled = raw.replace("\"32\"", "\"thirty two\"");
    let parsed: crate::schemes::domain::ApplicantProfile =
        serde_json::from_str(&garbled).expect("profile still parses");
    assert_eq!(parsed.age, NumericField::Invalid("thirty two".to_string()));
}
