//! Demo name seeding functionality
//!
//! Seeds the demo_names table with its initial entries at startup. Seeding
//! is idempotent: a table that already has rows is left alone.

use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::models::demo_name;
use crate::repositories::DemoRepository;

const SEED_NAMES: &[&str] = &["grace hopper", "alan turing", "ada lovelace"];

/// Seeds the demo_names table with its initial entries
pub async fn seed_demo_names(db: &DatabaseConnection) -> Result<()> {
    let existing = demo_name::Entity::find().count(db).await?;
    if existing > 0 {
        log::info!("demo_names already has {} rows, skipping seed", existing);
        return Ok(());
    }

    let repo = DemoRepository::new(db);
    for name in SEED_NAMES {
        repo.insert_name(name)
            .await
            .map_err(|e| anyhow::anyhow!("failed to seed demo name '{}': {}", name, e))?;
    }

    log::info!("Seeded {} demo names", SEED_NAMES.len());
    Ok(())
}
