//! Seed the catalog with a handful of sample records.
//!
//! Safe to run repeatedly: names that already exist are skipped.

use anyhow::Context;
use tracing::info;

use name_catalog::models::NewName;
use name_catalog::store;
use name_catalog::CatalogError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "name_catalog=info,seed=info".to_string()),
        )
        .init();
    dotenvy::dotenv().ok();

    let config = store::DatabaseConfig::default();
    let store = store::connect(&config)
        .await
        .context("failed to connect to the database")?;

    let samples = [
        NewName::new("Alice", "Noble", "Hebrew", "Chosen by the parents for family tradition"),
        NewName::new("Bruno", "Brown-haired", "Germanic", "Liked the sound of the name"),
        NewName::new("Clara", "Bright, clear", "Latin", "Positive meaning"),
        NewName::new("Daniel", "God is my judge", "Hebrew", "Tribute to a relative"),
    ];

    let mut inserted = 0;
    for sample in &samples {
        match store.insert(sample).await {
            Ok(record) => {
                inserted += 1;
                info!("Seeded '{}' as record {}", record.name, record.id);
            }
            Err(CatalogError::Duplicate { name }) => {
                info!("Skipping '{}': already registered", name);
            }
            Err(e) => return Err(e).context("seeding failed"),
        }
    }

    info!("Seeding complete: {} new record(s)", inserted);
    Ok(())
}
