use axum::routing::{get, patch};
use axum::Router;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::store::PriceStore;

use super::{docs, handlers};

/// Handler state: the one price board, behind a single lock.
pub type SharedStore = Arc<Mutex<PriceStore>>;

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/prices",
            get(handlers::list_prices).post(handlers::create_price),
        )
        .route(
            "/prices/:name",
            patch(handlers::update_price)
                .put(handlers::replace_price)
                .delete(handlers::delete_price),
        )
        .route("/docs", get(docs::api_docs))
        .with_state(store)
}
