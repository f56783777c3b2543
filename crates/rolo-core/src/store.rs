//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-memory`).
//! Boundary layers (`rolo-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::contact::Contact;

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ContactStore::search`].
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
  /// Case-insensitive substring matched against every text field.
  /// `None` or blank returns the full set.
  pub text: Option<String>,
}

impl ContactQuery {
  /// A query matching `text` as a free-text filter.
  pub fn text(text: impl Into<String>) -> Self {
    Self {
      text: Some(text.into()),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact store backend.
///
/// Writes validate the candidate against the store's current contents and
/// commit atomically with that check; a rejected candidate leaves the store
/// untouched and its violations travel back inside the error.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate `candidate` and append it to the store.
  ///
  /// The candidate must carry a fresh, non-nil id (from [`Contact::new`]).
  /// Insertion order is preserved and defines the listing order.
  fn add(
    &self,
    candidate: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id.
  ///
  /// `Ok(None)` is the authoritative not-found answer; the nil sentinel id
  /// never matches a stored record.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Contacts matching `query`, in insertion order.
  fn search<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Validate `candidate` and replace the stored record with the same id
  /// wholesale (full overwrite, not a field merge).
  ///
  /// Validation failure is reported before the not-found case.
  fn update(
    &self,
    candidate: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Remove the record with `id`, preserving the order of the remainder.
  ///
  /// Returns `false` (store unchanged) if no record matches.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
