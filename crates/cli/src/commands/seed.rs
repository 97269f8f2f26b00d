//! Seed the menu from a YAML file.
//!
//! ```yaml
//! categories:
//!   - name: espresso
//!     units: oz
//! products:
//!   - name: Latte
//!     description: Espresso with steamed milk
//!     size: "12"
//!     category: espresso
//!     price_cents: 450
//! ```
//!
//! Rows are inserted through the same store the server uses, one statement
//! per row. Seeding is additive: existing rows are left alone.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use coffee_shop_core::{NewCategory, NewProduct};
use coffee_shop_server::db::{self, PgStore, Store, StoreError};

use super::{CliError, database_url};

/// Contents of a menu file.
#[derive(Debug, Default, Deserialize)]
pub struct MenuSeed {
    #[serde(default)]
    pub categories: Vec<NewCategory>,
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

/// Rows written by a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
}

/// Seed the menu from `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, fails validation,
/// or a store insert fails.
pub async fn menu(file_path: &str, dry_run: bool) -> Result<(), CliError> {
    let path = Path::new(file_path);
    info!(path = %file_path, "Loading menu from file");

    let content = tokio::fs::read_to_string(path).await?;
    let seed: MenuSeed = serde_yaml::from_str(&content)?;

    info!(
        categories = seed.categories.len(),
        products = seed.products.len(),
        "Parsed menu"
    );

    let errors = validate(&seed);
    if !errors.is_empty() {
        error!("Menu validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CliError::Invalid(errors.len()));
    }

    for orphan in orphan_categories(&seed) {
        warn!(category = %orphan, "Products reference a category not defined in this file");
    }

    if dry_run {
        info!("Dry run: menu is valid, nothing written");
        return Ok(());
    }

    let pool = db::create_pool(&database_url()?).await?;
    let store = PgStore::new(pool);
    info!("Connected to database");

    let summary = seed_menu(&store, seed).await?;

    info!("Seeding complete!");
    info!("  Categories inserted: {}", summary.categories);
    info!("  Products inserted: {}", summary.products);

    Ok(())
}

/// Insert every category, then every product.
///
/// # Errors
///
/// Stops at and returns the first failed insert; rows inserted before it
/// remain.
pub async fn seed_menu(store: &dyn Store, seed: MenuSeed) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary::default();

    for category in seed.categories {
        store.create_category(category).await?;
        summary.categories += 1;
    }

    for product in seed.products {
        store.create_product(product).await?;
        summary.products += 1;
    }

    Ok(summary)
}

/// Problems that make a menu file unusable.
fn validate(seed: &MenuSeed) -> Vec<String> {
    let mut errors = Vec::new();

    for (i, category) in seed.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            errors.push(format!("category #{i} has an empty name"));
        }
    }

    for (i, product) in seed.products.iter().enumerate() {
        if product.name.trim().is_empty() {
            errors.push(format!("product #{i} has an empty name"));
        }
        if product.price_cents < 0 {
            errors.push(format!(
                "product '{}' has a negative price ({})",
                product.name, product.price_cents
            ));
        }
    }

    errors
}

/// Product categories that no category in the file declares.
fn orphan_categories(seed: &MenuSeed) -> Vec<String> {
    let mut orphans: Vec<String> = seed
        .products
        .iter()
        .map(|p| p.category.clone())
        .filter(|c| !seed.categories.iter().any(|cat| &cat.name == c))
        .collect();
    orphans.sort();
    orphans.dedup();
    orphans
}
