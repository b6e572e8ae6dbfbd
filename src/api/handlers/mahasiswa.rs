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

//! Handlers for the mahasiswa (student) resource. Key is `nim` (integer);
//! a non-numeric path segment is rejected by the extractor before the
//! handler runs.

use axum::extract::{Extension, Path};
use axum::response::Json;
use log::info;
use std::sync::Arc;

use crate::api::error::{error_codes, ApiError, ErrorResponse};
use crate::api::models::{CreateMahasiswaRequest, Mahasiswa, UpdateMahasiswaRequest};
use crate::api::responses::MessageResponse;
use crate::db::{AcademicStore, StoreError};

const CTX_FETCH: &str = "Terjadi kesalahan dalam mengambil data mahasiswa.";
const CTX_CHECK: &str = "Terjadi kesalahan dalam memeriksa data mahasiswa.";
const CTX_INSERT: &str = "Terjadi kesalahan dalam menyimpan data mahasiswa.";
const CTX_UPDATE: &str = "Terjadi kesalahan dalam memperbarui data mahasiswa.";
const CTX_DELETE: &str = "Terjadi kesalahan dalam menghapus data mahasiswa.";

fn not_found() -> ApiError {
    ApiError::NotFound {
        code: error_codes::MAHASISWA_NOT_FOUND,
        message: "Data mahasiswa tidak ditemukan".to_string(),
    }
}

/// List all students
#[utoipa::path(
    get,
    path = "/mahasiswa",
    responses(
        (status = 200, description = "All student rows", body = [Mahasiswa]),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Mahasiswa"
)]
pub async fn list_mahasiswa(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
) -> Result<Json<Vec<Mahasiswa>>, ApiError> {
    let rows = store
        .list_mahasiswa()
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    Ok(Json(rows))
}

/// Get a student by nim
#[utoipa::path(
    get,
    path = "/mahasiswa/{nim}",
    params(("nim" = i64, Path, description = "Student identification number")),
    responses(
        (status = 200, description = "Student found", body = Mahasiswa),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Mahasiswa"
)]
pub async fn get_mahasiswa(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(nim): Path<i64>,
) -> Result<Json<Mahasiswa>, ApiError> {
    let row = store
        .get_mahasiswa(nim)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    row.map(Json).ok_or_else(not_found)
}

/// Create a student
#[utoipa::path(
    post,
    path = "/mahasiswa",
    request_body = CreateMahasiswaRequest,
    responses(
        (status = 200, description = "Student stored", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 409, description = "Duplicate nim", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Mahasiswa"
)]
pub async fn create_mahasiswa(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Json(request): Json<CreateMahasiswaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let duplicate =
        || ApiError::Conflict(format!("NIM {} sudah ada dalam database.", request.nim));

    if store
        .mahasiswa_exists(request.nim)
        .await
        .map_err(|e| ApiError::database(CTX_CHECK, e))?
    {
        return Err(duplicate());
    }

    match store.insert_mahasiswa(&request).await {
        Ok(()) => {
            info!("Mahasiswa '{}' created", request.nim);
            Ok(Json(MessageResponse::new(
                "Data mahasiswa disimpan dengan sukses",
            )))
        }
        Err(StoreError::DuplicateKey(_)) => Err(duplicate()),
        Err(e) => Err(ApiError::database(CTX_INSERT, e)),
    }
}

/// Update a student by nim
#[utoipa::path(
    put,
    path = "/mahasiswa/{nim}",
    params(("nim" = i64, Path, description = "Student identification number")),
    request_body = UpdateMahasiswaRequest,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Mahasiswa"
)]
pub async fn update_mahasiswa(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(nim): Path<i64>,
    Json(request): Json<UpdateMahasiswaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store
        .mahasiswa_exists(nim)
        .await
        .map_err(|e| ApiError::database(CTX_CHECK, e))?
    {
        return Err(ApiError::NotFound {
            code: error_codes::MAHASISWA_NOT_FOUND,
            message: format!("Data mahasiswa dengan nim {nim} tidak ditemukan."),
        });
    }

    request.validate().map_err(ApiError::Validation)?;

    store
        .update_mahasiswa(nim, &request.nama, &request.prodi)
        .await
        .map_err(|e| ApiError::database(CTX_UPDATE, e))?;

    Ok(Json(MessageResponse::new(format!(
        "Data mahasiswa dengan nim {nim} telah diperbarui dengan nama {} dan prodi {}",
        request.nama, request.prodi
    ))))
}

/// Delete a student by nim
#[utoipa::path(
    delete,
    path = "/mahasiswa/{nim}",
    params(("nim" = i64, Path, description = "Student identification number")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Mahasiswa"
)]
pub async fn delete_mahasiswa(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(nim): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = store
        .delete_mahasiswa(nim)
        .await
        .map_err(|e| ApiError::database(CTX_DELETE, e))?;

    if affected == 0 {
        return Err(not_found());
    }

    info!("Mahasiswa '{nim}' deleted");
    Ok(Json(MessageResponse::new(format!(
        "Mahasiswa dengan nim {nim} dihapus dari database"
    ))))
}
