use std::time::Duration;

use bakeshop_api::catalog::Catalog;
use bakeshop_api::dto::cart::AddToCartRequest;
use bakeshop_api::mirror::{CART_MIRROR_KEY, CartMirror, MirrorDocument};
use bakeshop_api::models::{CartLine, Product};
use bakeshop_api::services::cart_service;
use bakeshop_api::state::AppState;
use rust_decimal::Decimal;

fn line(id: u32, name: &str, price: u32, quantity: u32) -> CartLine {
    CartLine {
        product: Product {
            id,
            name: name.to_string(),
            category: "Breads".to_string(),
            price: Decimal::from(price),
            description: None,
            image_uri: None,
        },
        quantity,
    }
}

#[tokio::test]
async fn persists_under_the_fixed_key_and_loads_back() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mirror = CartMirror::new(dir.path());
    assert!(mirror.load().await?.is_none());

    let lines = vec![line(1, "Ensaymada", 25, 2), line(2, "Pandesal", 10, 1)];
    mirror.persist(&lines).await?;

    assert_eq!(mirror.path(), dir.path().join("cart.json"));
    assert!(mirror.path().exists());

    let document = mirror.load().await?.expect("mirrored document");
    assert_eq!(document.key, CART_MIRROR_KEY);
    assert_eq!(document.items, lines);
    Ok(())
}

#[tokio::test]
async fn later_writes_replace_the_document() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mirror = CartMirror::new(dir.path());

    mirror.persist(&[line(1, "Ensaymada", 25, 1)]).await?;
    mirror.persist(&[line(2, "Pandesal", 10, 4)]).await?;

    let document = mirror.load().await?.expect("mirrored document");
    assert_eq!(document.items.len(), 1);
    assert_eq!(document.items[0].product.id, 2);
    assert_eq!(document.items[0].quantity, 4);
    Ok(())
}

#[tokio::test]
async fn an_empty_cart_is_still_mirrored() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mirror = CartMirror::new(dir.path());

    mirror.persist(&[]).await?;

    let document = mirror.load().await?.expect("mirrored document");
    assert!(document.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn cart_mutations_reach_the_mirror() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let data = r#"[
        {"id": 1, "name": "Ensaymada", "category": "Pastries", "price": 25},
        {"id": 2, "name": "Pandesal", "category": "Breads", "price": 10}
    ]"#;
    let catalog = Catalog::from_slice(data.as_bytes(), "inline")?;
    let state = AppState::new(catalog, Some(CartMirror::new(dir.path())));

    let request = AddToCartRequest {
        product_id: 1,
        quantity: Some(2),
    };
    cart_service::add_to_cart(&state, request).await?;

    let mirror = CartMirror::new(dir.path());
    let document = wait_for(&mirror, |d| d.items.len() == 1)
        .await
        .expect("add never reached the mirror");
    assert_eq!(document.key, CART_MIRROR_KEY);
    assert_eq!(document.items[0].product.id, 1);
    assert_eq!(document.items[0].quantity, 2);

    cart_service::clear_cart(&state).await?;
    wait_for(&mirror, |d| d.items.is_empty())
        .await
        .expect("clear never reached the mirror");
    Ok(())
}

// The mirror write is detached from the mutation that caused it; poll until
// the document shows up in the expected shape.
async fn wait_for(
    mirror: &CartMirror,
    ready: impl Fn(&MirrorDocument) -> bool,
) -> Option<MirrorDocument> {
    for _ in 0..100 {
        if let Ok(Some(document)) = mirror.load().await {
            if ready(&document) {
                return Some(document);
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}

#[tokio::test]
async fn write_failures_surface_as_errors_for_the_caller_to_log() -> anyhow::Result<()> {
    // a plain file where the mirror directory should be blocks the write
    let dir = tempfile::tempdir()?;
    let blocked = dir.path().join("blocked");
    tokio::fs::write(&blocked, b"").await?;

    let mirror = CartMirror::new(&blocked);
    assert!(mirror.persist(&[line(1, "Ensaymada", 25, 1)]).await.is_err());
    Ok(())
}
