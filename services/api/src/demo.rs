use crate::infra::{catalog_from_path, default_catalog, InMemoryStateStore};
use clap::Args;
use scheme_advisor::error::AppError;
use scheme_advisor::schemes::{
    ApplicantProfile, FacetSelection, Identity, RecommendationService, SchemeCatalog,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional catalog JSON file; defaults to the embedded catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Skip the saved-list portion of the demo.
    #[arg(long)]
    pub(crate) skip_saved: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogValidateArgs {
    /// Catalog JSON file to validate
    #[arg(long)]
    pub(crate) path: PathBuf,
}

pub(crate) fn run_catalog_validate(args: CatalogValidateArgs) -> Result<(), AppError> {
    let catalog = catalog_from_path(&args.path)?;

    println!("Catalog OK: {} schemes", catalog.len());
    for scheme in catalog.iter() {
        let deadline = match scheme.application_deadline {
            Some(date) => format!("deadline {date}"),
            None => "no deadline".to_string(),
        };
        println!("- [{}] {} ({})", scheme.id, scheme.name, deadline);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog)?;
    println!(
        "Scheme advisor demo ({} schemes in the catalog)",
        catalog.len()
    );

    let store = Arc::new(InMemoryStateStore::default());
    let service = RecommendationService::new(Arc::new(catalog), store);

    let profile = demo_profile();
    println!(
        "\nIntake: {} | {} | age {} | annual income {}",
        profile.full_name, profile.occupation, profile.age, profile.annual_income
    );
    if let Err(err) = service.submit_profile(&profile) {
        println!("  Submission rejected: {err}");
        return Ok(());
    }

    let recommended = match service.recommendations() {
        Ok(recommended) => recommended,
        Err(err) => {
            println!("  Recommendations unavailable: {err}");
            return Ok(());
        }
    };
    println!("\nTop recommendations");
    for entry in &recommended {
        let score = entry
            .match_score
            .map(|score| format!("{score}% match"))
            .unwrap_or_else(|| "unscored".to_string());
        let deadline = match entry.scheme.application_deadline {
            Some(date) => format!(", apply by {date}"),
            None => String::new(),
        };
        println!("- {} ({score}{deadline})", entry.scheme.name);
        println!("  {}", entry.scheme.benefits);
    }

    let mut facets = FacetSelection::default();
    facets.occupation.insert("Farmer".to_string());
    match service.results(&facets, "") {
        Ok(results) => {
            println!("\nEligible schemes with the Farmer facet selected");
            for entry in &results {
                println!("- {}", entry.scheme.name);
            }
        }
        Err(err) => println!("  Facet filtering unavailable: {err}"),
    }

    if args.skip_saved {
        return Ok(());
    }

    let user = Identity::signed_in("demo-user");
    let Some(top) = recommended.first() else {
        println!("\nNothing to save: no recommendations for the demo profile");
        return Ok(());
    };

    println!("\nSaved-list walkthrough (user demo-user)");
    match service.save_scheme(&user, top.scheme.id) {
        Ok(saved) => println!("- Saved '{}' ({} saved total)", top.scheme.name, saved.len()),
        Err(err) => {
            println!("  Save failed: {err}");
            return Ok(());
        }
    }
    match service.unsave_scheme(&user, top.scheme.id) {
        Ok(saved) => println!("- Removed it again ({} saved total)", saved.len()),
        Err(err) => println!("  Unsave failed: {err}"),
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<SchemeCatalog, AppError> {
    match path {
        Some(path) => catalog_from_path(&path),
        None => default_catalog(),
    }
}

fn demo_profile() -> ApplicantProfile {
    ApplicantProfile {
        full_name: "Ravi Kumar".to_string(),
        age: 32u64.into(),
        gender: "Male".to_string(),
        occupation: "Farmer".to_string(),
        annual_income: 180_000u64.into(),
        caste: "OBC".to_string(),
        marital_status: "Married".to_string(),
        education: "10th Pass".to_string(),
        disability: "No".to_string(),
        state: "Punjab".to_string(),
    }
}
