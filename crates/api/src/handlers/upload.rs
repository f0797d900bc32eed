//! Handler for `POST /uploads`.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::upload::{object_key, validate_upload, UploadFolder, DEFAULT_FOLDER};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// Content type assumed when the multipart part carries none.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Response of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored object.
    pub url: String,
}

struct UploadedFile {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a required `file` field and an optional
/// `folder` field (default `certificates`). The folder policy is checked
/// before anything is sent to the object store.
pub async fn upload(
    State(state): State<AppState>,
    _owner: OwnerSession,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file: Option<UploadedFile> = None;
    let mut folder_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "folder" => {
                let text = field.text().await.map_err(multipart_error)?;
                folder_name = Some(text.trim().to_string()).filter(|s| !s.is_empty());
            }
            _ => {} // ignore unknown fields
        }
    }

    let file =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let folder = match folder_name {
        Some(name) => UploadFolder::from_name(&name)?,
        None => DEFAULT_FOLDER,
    };

    validate_upload(folder, &file.content_type, file.bytes.len())?;

    let key = object_key(folder, &file.filename);
    let size = file.bytes.len();
    state.store.put(&key, file.bytes, &file.content_type).await?;

    let url = state.store.public_url(&key);
    tracing::info!(%key, size, folder = folder.name(), "File uploaded");
    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
