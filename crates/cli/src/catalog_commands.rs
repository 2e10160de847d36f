use std::sync::Arc;

use {
    anyhow::{Result, bail},
    bacbot_catalog::{CatalogClient, Filiere, HttpCatalogSource, client::distinct_subjects_in},
    bacbot_config::BacbotConfig,
};

/// Print the distinct subjects the catalog holds for one filiere.
pub async fn list_subjects(config: &BacbotConfig, filiere: usize) -> Result<()> {
    let Some(filiere) = Filiere::from_index(filiere) else {
        bail!("filiere must be between 1 and {}", Filiere::ALL.len());
    };

    let source = HttpCatalogSource::new(&config.catalog)?;
    eprintln!("Fetching {} from {}\n", filiere, source.url());
    let client = CatalogClient::new(Arc::new(source));

    // Unlike the dialog path, a fetch failure is an error here.
    let records = client.fetch_all().await?;
    let subjects = distinct_subjects_in(&records, filiere.as_str());

    if subjects.is_empty() {
        println!("No subjects found.");
    } else {
        for (i, subject) in subjects.iter().enumerate() {
            println!("  {}. {subject}", i + 1);
        }
    }
    Ok(())
}
