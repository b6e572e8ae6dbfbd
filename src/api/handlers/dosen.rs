// Copyright 2025 The SIAKAD Project Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Handlers for the dosen (lecturer) resource.
//!
//! Key is `id_dosen` (string). Create runs the empty-field validation, then
//! the duplicate pre-check, then `insert_dosen`; a unique-constraint
//! violation from the insert itself maps to the same 409 so the pre-check
//! race cannot produce a duplicate row.

use axum::extract::{Extension, Path};
use axum::response::Json;
use log::info;
use std::sync::Arc;

use crate::api::error::{error_codes, ApiError, ErrorResponse};
use crate::api::models::{CreateDosenRequest, Dosen, UpdateDosenRequest};
use crate::api::responses::MessageResponse;
use crate::db::{AcademicStore, StoreError};

const CTX_FETCH: &str = "Terjadi kesalahan dalam mengambil data dosen.";
const CTX_INSERT: &str = "Terjadi kesalahan dalam menyimpan data dosen.";
const CTX_UPDATE: &str = "Terjadi kesalahan dalam memperbarui data dosen.";
const CTX_DELETE: &str = "Terjadi kesalahan dalam menghapus data dosen.";

fn not_found() -> ApiError {
    ApiError::NotFound {
        code: error_codes::DOSEN_NOT_FOUND,
        message: "Data dosen tidak ditemukan".to_string(),
    }
}

/// List all lecturers
#[utoipa::path(
    get,
    path = "/dosen",
    responses(
        (status = 200, description = "All lecturer rows", body = [Dosen]),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Dosen"
)]
pub async fn list_dosen(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
) -> Result<Json<Vec<Dosen>>, ApiError> {
    let rows = store
        .list_dosen()
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    Ok(Json(rows))
}

/// Get a lecturer by id
#[utoipa::path(
    get,
    path = "/dosen/{id_dosen}",
    params(("id_dosen" = String, Path, description = "Lecturer ID")),
    responses(
        (status = 200, description = "Lecturer found", body = Dosen),
        (status = 404, description = "Lecturer not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Dosen"
)]
pub async fn get_dosen(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(id_dosen): Path<String>,
) -> Result<Json<Dosen>, ApiError> {
    let row = store
        .get_dosen(&id_dosen)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    row.map(Json).ok_or_else(not_found)
}

/// Create a lecturer
#[utoipa::path(
    post,
    path = "/dosen",
    request_body = CreateDosenRequest,
    responses(
        (status = 200, description = "Lecturer stored", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 409, description = "Duplicate id_dosen", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Dosen"
)]
pub async fn create_dosen(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Json(request): Json<CreateDosenRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let duplicate = || {
        ApiError::Conflict(format!(
            "ID Dosen {} sudah ada dalam database.",
            request.id_dosen
        ))
    };

    if store
        .dosen_exists(&request.id_dosen)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?
    {
        return Err(duplicate());
    }

    match store.insert_dosen(&request).await {
        Ok(()) => {
            info!("Dosen '{}' created", request.id_dosen);
            Ok(Json(MessageResponse::new(
                "Data dosen disimpan dengan sukses",
            )))
        }
        Err(StoreError::DuplicateKey(_)) => Err(duplicate()),
        Err(e) => Err(ApiError::database(CTX_INSERT, e)),
    }
}

/// Update a lecturer by id
#[utoipa::path(
    put,
    path = "/dosen/{id_dosen}",
    params(("id_dosen" = String, Path, description = "Lecturer ID")),
    request_body = UpdateDosenRequest,
    responses(
        (status = 200, description = "Lecturer updated", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 404, description = "Lecturer not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Dosen"
)]
pub async fn update_dosen(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(id_dosen): Path<String>,
    Json(request): Json<UpdateDosenRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store
        .dosen_exists(&id_dosen)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?
    {
        return Err(ApiError::NotFound {
            code: error_codes::DOSEN_NOT_FOUND,
            message: format!("Data dosen dengan id_dosen {id_dosen} tidak ditemukan."),
        });
    }

    request.validate().map_err(ApiError::Validation)?;

    store
        .update_dosen(&id_dosen, &request.nama_dosen)
        .await
        .map_err(|e| ApiError::database(CTX_UPDATE, e))?;

    Ok(Json(MessageResponse::new(format!(
        "Data dosen dengan id dosen {id_dosen} telah diperbarui dengan nama {}",
        request.nama_dosen
    ))))
}

/// Delete a lecturer by id
#[utoipa::path(
    delete,
    path = "/dosen/{id_dosen}",
    params(("id_dosen" = String, Path, description = "Lecturer ID")),
    responses(
        (status = 200, description = "Lecturer deleted", body = MessageResponse),
        (status = 404, description = "Lecturer not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Dosen"
)]
pub async fn delete_dosen(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(id_dosen): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = store
        .delete_dosen(&id_dosen)
        .await
        .map_err(|e| ApiError::database(CTX_DELETE, e))?;

    if affected == 0 {
        return Err(not_found());
    }

    info!("Dosen '{id_dosen}' deleted");
    Ok(Json(MessageResponse::new(format!(
        "Dosen dengan id dosen {id_dosen} dihapus dari database"
    ))))
}
