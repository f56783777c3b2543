//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path            | Notes                                    |
//! |----------|-----------------|------------------------------------------|
//! | `GET`    | `/contacts`     | Optional `?q=` substring search          |
//! | `POST`   | `/contacts`     | Body: [`ContactPayload`]; returns 201    |
//! | `GET`    | `/contacts/:id` | 404 if not found                         |
//! | `PUT`    | `/contacts/:id` | Full overwrite; body: [`ContactPayload`] |
//! | `DELETE` | `/contacts/:id` | 204 on removal, 404 if absent            |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rolo_core::{
  contact::Contact,
  store::{ContactQuery, ContactStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Payload ─────────────────────────────────────────────────────────────────

/// Field values accepted by create and update. Absent fields are treated as
/// empty, mirroring blank form inputs.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ContactPayload {
  pub first_name: String,
  pub last_name:  String,
  pub phone:      String,
  pub email:      String,
}

impl ContactPayload {
  /// Build the candidate: `base` supplies the identity, the payload supplies
  /// every field value.
  fn into_candidate(self, base: Contact) -> Contact {
    Contact {
      first_name: self.first_name,
      last_name:  self.last_name,
      phone:      self.phone,
      email:      self.email,
      ..base
    }
  }
}

// ─── List / search ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Free-text filter; blank or absent returns every contact.
  pub q: Option<String>,
}

/// `GET /contacts[?q=<text>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  rolo_core::Error: From<S::Error>,
{
  let query = ContactQuery { text: params.q };
  let contacts = store.search(&query).await.map_err(ApiError::from_store)?;
  Ok(Json(contacts))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + the stored contact.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  rolo_core::Error: From<S::Error>,
{
  let candidate = payload.into_candidate(Contact::new());
  let stored = store.add(candidate).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  rolo_core::Error: From<S::Error>,
{
  let contact = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — full overwrite of every field value.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  rolo_core::Error: From<S::Error>,
{
  let candidate = payload.into_candidate(Contact {
    id,
    ..Contact::empty()
  });
  let updated = store
    .update(candidate)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(updated))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
  rolo_core::Error: From<S::Error>,
{
  let removed = store.delete(id).await.map_err(ApiError::from_store)?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("contact {id} not found")))
  }
}
