//! JSON REST boundary for the Rolo contact store.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolo_core::store::ContactStore`]. Auth, TLS, and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolo_api::router(store.clone()))
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use rolo_core::store::ContactStore;

pub use error::ApiError;

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  rolo_core::Error: From<S::Error>,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}
