use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::mirror::CartMirror;

/// The one cart store lives here, so every handler observes the same cart.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart: CartStore,
    pub mirror: Option<Arc<CartMirror>>,
}

impl AppState {
    pub fn new(catalog: Catalog, mirror: Option<CartMirror>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: CartStore::new(),
            mirror: mirror.map(Arc::new),
        }
    }
}
