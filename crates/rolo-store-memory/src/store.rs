//! [`MemoryStore`] — the `Vec`-backed implementation of [`ContactStore`].

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use rolo_core::{
  Error, Result,
  contact::Contact,
  store::{ContactQuery, ContactStore},
  validate::{ValidationRule, validate},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A volatile contact store held entirely in process memory.
///
/// Cloning is cheap — clones share the same backing collection. Readers take
/// the shared lock and may run concurrently; writers serialize on the
/// exclusive lock, which covers each operation's read-validate-write sequence
/// as one critical section. The lock is never held across an await point.
#[derive(Clone)]
pub struct MemoryStore {
  contacts: Arc<RwLock<Vec<Contact>>>,
  rules:    Arc<Vec<ValidationRule>>,
}

impl MemoryStore {
  /// An empty store with the canonical rule set.
  pub fn new() -> Self {
    Self::with_rules(ValidationRule::default_rules())
  }

  /// An empty store validating writes with a caller-chosen rule set.
  pub fn with_rules(rules: Vec<ValidationRule>) -> Self {
    Self {
      contacts: Arc::new(RwLock::new(Vec::new())),
      rules:    Arc::new(rules),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

// ─── Trait implementation ────────────────────────────────────────────────────

impl ContactStore for MemoryStore {
  type Error = Error;

  async fn add(&self, candidate: Contact) -> Result<Contact> {
    if candidate.is_sentinel() {
      return Err(Error::SentinelContact);
    }

    let mut contacts = self.contacts.write();

    let violations = validate(&candidate, &contacts, &self.rules);
    if !violations.is_empty() {
      return Err(Error::Invalid(violations));
    }

    if contacts.iter().any(|c| c.id == candidate.id) {
      return Err(Error::IdTaken(candidate.id));
    }

    contacts.push(candidate.clone());
    Ok(candidate)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
    let contacts = self.contacts.read();
    Ok(contacts.iter().find(|c| c.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<Contact>> {
    Ok(self.contacts.read().clone())
  }

  async fn search(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let contacts = self.contacts.read();

    let needle = match query.text.as_deref().map(str::trim) {
      Some(text) if !text.is_empty() => text.to_lowercase(),
      _ => return Ok(contacts.clone()),
    };

    Ok(
      contacts
        .iter()
        .filter(|c| matches_needle(c, &needle))
        .cloned()
        .collect(),
    )
  }

  async fn update(&self, candidate: Contact) -> Result<Contact> {
    let mut contacts = self.contacts.write();

    // Validation is reported ahead of the not-found case; the uniqueness rule
    // excludes the candidate's own id, so an unchanged re-submission passes.
    let violations = validate(&candidate, &contacts, &self.rules);
    if !violations.is_empty() {
      return Err(Error::Invalid(violations));
    }

    match contacts.iter_mut().find(|c| c.id == candidate.id) {
      Some(slot) => {
        *slot = candidate.clone();
        Ok(candidate)
      }
      None => Err(Error::ContactNotFound(candidate.id)),
    }
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let mut contacts = self.contacts.write();
    match contacts.iter().position(|c| c.id == id) {
      Some(index) => {
        contacts.remove(index);
        Ok(true)
      }
      None => Ok(false),
    }
  }
}

/// Case-insensitive substring match over every text field.
fn matches_needle(contact: &Contact, needle: &str) -> bool {
  [
    &contact.first_name,
    &contact.last_name,
    &contact.phone,
    &contact.email,
  ]
  .into_iter()
  .any(|field| field.to_lowercase().contains(needle))
}
