//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::store::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::OrderService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog provider, live carts, and the order service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn Catalog>,
    carts: CartStore,
    orders: OrderService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The order history is seeded from the catalog so the account pages
    /// have data before the first checkout.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Arc<dyn Catalog>) -> Self {
        let orders = OrderService::new(config.submit_latency, catalog.past_orders());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts: CartStore::new(),
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog provider.
    #[must_use]
    pub fn catalog(&self) -> &dyn Catalog {
        self.inner.catalog.as_ref()
    }

    /// Get a reference to the live cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    #[test]
    fn test_state_seeds_order_history_from_catalog() {
        let state = AppState::new(StorefrontConfig::default(), Arc::new(MockCatalog::new()));
        assert_eq!(state.orders().history().len(), 3);
        assert!(state.carts().is_empty());
    }
}
