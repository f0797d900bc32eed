//! Body extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use folio_core::normalize::clean_json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON body extractor that turns empty-string fields into `null` before
/// deserializing into `T`.
///
/// Admin forms send `""` for inputs left blank; with this extractor those
/// land in the database as `NULL` and, on update DTOs, clear the column.
///
/// ```ignore
/// pub async fn update(CleanJson(input): CleanJson<UpdateEducation>) { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CleanJson<T>(pub T);

impl<S, T> FromRequest<S> for CleanJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        serde_json::from_value(clean_json(value))
            .map(CleanJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
    }
}
