use bakeshop_api::cart::CartStore;
use bakeshop_api::models::Product;
use rust_decimal::Decimal;

fn product(id: u32, name: &str, price: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: "Pastries".to_string(),
        price: Decimal::from(price),
        description: None,
        image_uri: None,
    }
}

#[test]
fn total_and_count_are_recomputed_from_contents() {
    let cart = CartStore::new();
    assert_eq!(cart.total(), Decimal::ZERO);
    assert_eq!(cart.count(), 0);

    cart.add(&product(1, "Ensaymada", 25), 1);
    cart.add(&product(2, "Pandesal", 10), 3);
    assert_eq!(cart.total(), Decimal::from(55));
    assert_eq!(cart.count(), 4);
    assert_eq!(cart.len(), 2);

    assert!(cart.remove(2));
    assert_eq!(cart.total(), Decimal::from(25));
    assert_eq!(cart.count(), 1);
}

#[test]
fn duplicate_add_increments_the_existing_line() {
    let cart = CartStore::new();
    let ensaymada = product(1, "Ensaymada", 25);

    cart.add(&ensaymada, 1);
    let line = cart.add(&ensaymada, 2);

    assert_eq!(line.quantity, 3);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), Decimal::from(75));
}

#[test]
fn remove_of_absent_id_is_a_no_op() {
    let cart = CartStore::new();
    cart.add(&product(1, "Ensaymada", 25), 1);

    let before = cart.items();
    assert!(!cart.remove(99));
    assert_eq!(cart.items(), before);
}

#[test]
fn clear_empties_unconditionally() {
    let cart = CartStore::new();
    assert_eq!(cart.clear(), 0);

    cart.add(&product(1, "Ensaymada", 25), 2);
    cart.add(&product(2, "Pandesal", 10), 1);
    assert_eq!(cart.clear(), 2);

    assert!(cart.is_empty());
    assert!(cart.items().is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
    assert_eq!(cart.count(), 0);
}

#[test]
fn lines_keep_insertion_order() {
    let cart = CartStore::new();
    cart.add(&product(3, "Monay", 12), 1);
    cart.add(&product(1, "Ensaymada", 25), 1);
    cart.add(&product(2, "Pandesal", 10), 1);

    let order: Vec<u32> = cart.items().iter().map(|l| l.product.id).collect();
    assert_eq!(order, [3, 1, 2]);

    // incrementing a line must not move it
    cart.add(&product(1, "Ensaymada", 25), 1);
    let order: Vec<u32> = cart.items().iter().map(|l| l.product.id).collect();
    assert_eq!(order, [3, 1, 2]);
}

#[test]
fn unit_count_saturates_instead_of_overflowing() {
    let cart = CartStore::new();
    cart.add(&product(1, "Ensaymada", 25), u32::MAX);
    cart.add(&product(2, "Pandesal", 10), u32::MAX);

    // two huge lines must clamp, not wrap or panic
    assert_eq!(cart.count(), u32::MAX);

    // a single line clamps the same way
    let line = cart.add(&product(1, "Ensaymada", 25), 1);
    assert_eq!(line.quantity, u32::MAX);
    assert_eq!(cart.count(), u32::MAX);
}

#[test]
fn clones_share_the_same_cart() {
    let cart = CartStore::new();
    let other_screen = cart.clone();

    cart.add(&product(1, "Ensaymada", 25), 1);
    assert_eq!(other_screen.total(), Decimal::from(25));

    other_screen.clear();
    assert!(cart.is_empty());
}

#[test]
fn fractional_prices_total_exactly() {
    let cart = CartStore::new();
    let mut spanish_bread = product(4, "Spanish Bread", 0);
    spanish_bread.price = Decimal::new(125, 1); // 12.5

    cart.add(&spanish_bread, 3);
    assert_eq!(cart.total(), Decimal::new(375, 1)); // 37.5, no float drift
}
