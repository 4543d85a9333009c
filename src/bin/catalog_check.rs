use anyhow::Context;

use bakeshop_api::{catalog::Catalog, config::AppConfig, dto::products::peso};

// Pre-deploy lint for the bundled catalog: fails with the same error the
// server would fail with at startup, otherwise prints a data summary.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let catalog = Catalog::from_path(&config.catalog_path).with_context(|| {
        format!(
            "catalog validation failed for {}",
            config.catalog_path.display()
        )
    })?;

    println!("Catalog OK: {}", config.catalog_path.display());
    let min_price = catalog
        .products()
        .iter()
        .map(|p| p.price)
        .min()
        .unwrap_or_default();
    println!(
        "  {} products across {} categories, prices {} to {}",
        catalog.len(),
        catalog.categories().len(),
        peso(min_price),
        peso(catalog.max_price()),
    );

    for category in catalog.categories() {
        let count = catalog
            .products()
            .iter()
            .filter(|p| &p.category == category)
            .count();
        println!("  {category}: {count}");
    }

    let missing_description: Vec<&str> = catalog
        .products()
        .iter()
        .filter(|p| p.description.is_none())
        .map(|p| p.name.as_str())
        .collect();
    if !missing_description.is_empty() {
        println!(
            "  placeholder description will be used for: {}",
            missing_description.join(", ")
        );
    }

    let missing_image: Vec<&str> = catalog
        .products()
        .iter()
        .filter(|p| p.image_uri.is_none())
        .map(|p| p.name.as_str())
        .collect();
    if !missing_image.is_empty() {
        println!(
            "  placeholder image will be used for: {}",
            missing_image.join(", ")
        );
    }

    Ok(())
}
