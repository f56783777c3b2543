//! Candidate validation — a pluggable set of rules evaluated against the
//! candidate and the store's current contents.
//!
//! Each rule yields zero or one [`Violation`]; every violation produced is
//! merged into one [`Violations`] collection before the accept/reject
//! decision, so a candidate can fail several rules at once.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::contact::Contact;

// ─── Fields ──────────────────────────────────────────────────────────────────

/// The contact field a violation is attached to.
///
/// Serializes as the variant name (`"Email"`, `"FirstName"`, …), which is also
/// the key used in rendered error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
  FirstName,
  LastName,
  Phone,
  Email,
}

impl Field {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::FirstName => "FirstName",
      Self::LastName => "LastName",
      Self::Phone => "Phone",
      Self::Email => "Email",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Violations ──────────────────────────────────────────────────────────────

/// A single field/message pair produced by a failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field:   Field,
  pub message: String,
}

/// The merged outcome of evaluating every rule against one candidate.
///
/// Serializes as an object mapping field name to message — the error map the
/// boundary layer renders back to the submitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn push(&mut self, violation: Violation) {
    self.0.push(violation);
  }

  /// The message attached to `field`, if any rule flagged it.
  pub fn message_for(&self, field: Field) -> Option<&str> {
    self
      .0
      .iter()
      .find(|v| v.field == field)
      .map(|v| v.message.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &Violation> {
    self.0.iter()
  }
}

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, violation) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", violation.field, violation.message)?;
    }
    Ok(())
  }
}

impl Serialize for Violations {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for violation in &self.0 {
      map.serialize_entry(violation.field.as_str(), &violation.message)?;
    }
    map.end()
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// A single validation policy, evaluated against the candidate and the store's
/// current contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
  /// No two stored contacts may share a normalized email. The candidate's own
  /// record (matched by id) is excluded, so re-submitting an existing contact
  /// does not trip over its own stored address.
  UniqueEmail,

  /// The first name may be at most this many characters.
  FirstNameMaxLen(usize),
}

impl ValidationRule {
  /// The canonical rule set: email uniqueness only.
  pub fn default_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::UniqueEmail]
  }

  /// Evaluate this rule, yielding at most one violation.
  pub fn check(
    &self,
    candidate: &Contact,
    existing: &[Contact],
  ) -> Option<Violation> {
    match self {
      Self::UniqueEmail => {
        let email = normalize_email(&candidate.email);
        let taken = existing
          .iter()
          .any(|c| c.id != candidate.id && normalize_email(&c.email) == email);
        taken.then(|| Violation {
          field:   Field::Email,
          message: "Email must be unique".to_string(),
        })
      }
      Self::FirstNameMaxLen(max) => {
        (candidate.first_name.chars().count() > *max).then(|| Violation {
          field:   Field::FirstName,
          message: format!("First name must be {max} characters or less"),
        })
      }
    }
  }
}

/// Evaluate `rules` in order against `candidate`, merging every violation.
pub fn validate(
  candidate: &Contact,
  existing: &[Contact],
  rules: &[ValidationRule],
) -> Violations {
  let mut violations = Violations::default();
  for rule in rules {
    if let Some(violation) = rule.check(candidate, existing) {
      violations.push(violation);
    }
  }
  violations
}

/// Emails compare trimmed and ASCII-lowercased; at most one stored contact may
/// hold a given normalized value.
pub fn normalize_email(raw: &str) -> String {
  raw.trim().to_ascii_lowercase()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn contact(first: &str, email: &str) -> Contact {
    Contact {
      first_name: first.to_string(),
      email: email.to_string(),
      ..Contact::new()
    }
  }

  #[test]
  fn unique_email_flags_taken_address() {
    let stored = contact("Alice", "alice@example.com");
    let candidate = contact("Bob", "alice@example.com");

    let violations = validate(
      &candidate,
      std::slice::from_ref(&stored),
      &ValidationRule::default_rules(),
    );

    assert_eq!(violations.len(), 1);
    assert_eq!(
      violations.message_for(Field::Email),
      Some("Email must be unique")
    );
  }

  #[test]
  fn unique_email_excludes_the_candidate_itself() {
    let stored = contact("Alice", "alice@example.com");

    let violations = validate(
      &stored,
      std::slice::from_ref(&stored),
      &ValidationRule::default_rules(),
    );

    assert!(violations.is_empty());
  }

  #[test]
  fn emails_are_compared_normalized() {
    let stored = contact("Alice", "Alice@Example.COM");
    let candidate = contact("Bob", "  alice@example.com ");

    let violations = validate(
      &candidate,
      std::slice::from_ref(&stored),
      &ValidationRule::default_rules(),
    );

    assert_eq!(
      violations.message_for(Field::Email),
      Some("Email must be unique")
    );
  }

  #[test]
  fn first_name_length_rule() {
    let candidate = contact("Bartholomew", "b@example.com");

    let violations =
      validate(&candidate, &[], &[ValidationRule::FirstNameMaxLen(8)]);

    assert_eq!(
      violations.message_for(Field::FirstName),
      Some("First name must be 8 characters or less")
    );

    let short = contact("Bart", "b@example.com");
    assert!(
      validate(&short, &[], &[ValidationRule::FirstNameMaxLen(8)]).is_empty()
    );
  }

  #[test]
  fn rules_merge_all_violations() {
    let stored = contact("Alice", "alice@example.com");
    let candidate = contact("Bartholomew", "alice@example.com");

    let rules =
      vec![ValidationRule::UniqueEmail, ValidationRule::FirstNameMaxLen(8)];
    let violations = validate(&candidate, std::slice::from_ref(&stored), &rules);

    assert_eq!(violations.len(), 2);
    assert!(violations.message_for(Field::Email).is_some());
    assert!(violations.message_for(Field::FirstName).is_some());
  }
}
