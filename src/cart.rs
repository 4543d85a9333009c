use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::models::{CartLine, Product};

/// One shared cart for the whole app session: every clone observes the same
/// lines, and every read is a fresh projection, never a cached snapshot.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Arc<Mutex<Vec<CartLine>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations cannot leave the Vec torn; recover the data from a poisoned
    // lock rather than panicking.
    fn lock(&self) -> MutexGuard<'_, Vec<CartLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A product already in the cart gets its line incremented, not duplicated.
    pub fn add(&self, product: &Product, quantity: u32) -> CartLine {
        let mut lines = self.lock();
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return line.clone();
        }
        let line = CartLine {
            product: product.clone(),
            quantity,
        };
        lines.push(line.clone());
        line
    }

    /// Removing a product that is not in the cart is a no-op, returning `false`.
    pub fn remove(&self, product_id: u32) -> bool {
        let mut lines = self.lock();
        let before = lines.len();
        lines.retain(|l| l.product.id != product_id);
        lines.len() != before
    }

    pub fn clear(&self) -> usize {
        let mut lines = self.lock();
        let dropped = lines.len();
        lines.clear();
        dropped
    }

    pub fn items(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    pub fn total(&self) -> Decimal {
        self.lock().iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines; saturates instead of overflowing.
    pub fn count(&self) -> u32 {
        self.lock()
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
