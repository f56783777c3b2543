//! Contact — the sole entity managed by the store.
//!
//! A contact is four free-form text fields behind a UUID. The store owns the
//! canonical copy of every stored record; callers hold detached candidates
//! that become authoritative only once a write succeeds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single contact record.
///
/// The id is assigned at construction and never changes afterwards.
/// [`Uuid::nil`] is reserved as the "no such contact" sentinel: [`Contact::new`]
/// never produces it and the store refuses to insert it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub phone:      String,
  pub email:      String,
}

impl Contact {
  /// A fresh candidate with a newly assigned id and empty fields.
  pub fn new() -> Self {
    Self {
      id: Uuid::new_v4(),
      ..Self::empty()
    }
  }

  /// The sentinel contact: nil id, empty fields.
  ///
  /// Used as a blank form model and as the "no record" placeholder. It must
  /// never be inserted into a store.
  pub fn empty() -> Self {
    Self {
      id:         Uuid::nil(),
      first_name: String::new(),
      last_name:  String::new(),
      phone:      String::new(),
      email:      String::new(),
    }
  }

  /// `true` iff this is the nil-id sentinel rather than a real record.
  pub fn is_sentinel(&self) -> bool {
    self.id.is_nil()
  }
}

impl Default for Contact {
  fn default() -> Self {
    Self::empty()
  }
}
