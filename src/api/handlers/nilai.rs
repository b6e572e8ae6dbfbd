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

//! Handlers for the nilai_mahasiswa (grade) resource.
//!
//! Reads are keyed by `nim` and return every grade the student has; update
//! and delete address a single row by its auto-generated `id_nilai`. Create
//! performs no duplicate pre-check since a student may hold many grades.

use axum::extract::{Extension, Path};
use axum::response::Json;
use log::info;
use std::sync::Arc;

use crate::api::error::{error_codes, ApiError, ErrorResponse};
use crate::api::models::{CreateNilaiRequest, Nilai, UpdateNilaiRequest};
use crate::api::responses::MessageResponse;
use crate::db::AcademicStore;

const CTX_FETCH: &str = "Terjadi kesalahan dalam mengambil data nilai mahasiswa.";
const CTX_CHECK: &str = "Terjadi kesalahan dalam memeriksa data nilai mahasiswa.";
const CTX_INSERT: &str = "Terjadi kesalahan dalam menyimpan data nilai mahasiswa.";
const CTX_UPDATE: &str = "Terjadi kesalahan dalam memperbarui data nilai mahasiswa.";
const CTX_DELETE: &str = "Terjadi kesalahan dalam menghapus data nilai mahasiswa.";

/// List all grade rows
#[utoipa::path(
    get,
    path = "/nilai_mahasiswa",
    responses(
        (status = 200, description = "All grade rows", body = [Nilai]),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Nilai"
)]
pub async fn list_nilai(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
) -> Result<Json<Vec<Nilai>>, ApiError> {
    let rows = store
        .list_nilai()
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    Ok(Json(rows))
}

/// Get a student's grades by nim
#[utoipa::path(
    get,
    path = "/nilai_mahasiswa/{nim}",
    params(("nim" = i64, Path, description = "Student identification number")),
    responses(
        (status = 200, description = "Grades found", body = [Nilai]),
        (status = 404, description = "No grades for that nim", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Nilai"
)]
pub async fn get_nilai_by_nim(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(nim): Path<i64>,
) -> Result<Json<Vec<Nilai>>, ApiError> {
    let rows = store
        .get_nilai_by_nim(nim)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;

    if rows.is_empty() {
        return Err(ApiError::NotFound {
            code: error_codes::NILAI_NOT_FOUND,
            message: "Nim mahasiswa tidak ditemukan".to_string(),
        });
    }
    Ok(Json(rows))
}

/// Record a grade
#[utoipa::path(
    post,
    path = "/nilai_mahasiswa",
    request_body = CreateNilaiRequest,
    responses(
        (status = 200, description = "Grade stored", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Nilai"
)]
pub async fn create_nilai(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Json(request): Json<CreateNilaiRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let affected = store
        .insert_nilai(&request)
        .await
        .map_err(|e| ApiError::database(CTX_INSERT, e))?;
    if affected == 0 {
        return Err(ApiError::Internal(
            "Gagal menyimpan nilai mahasiswa".to_string(),
        ));
    }

    info!("Nilai for nim '{}' created", request.nim);
    Ok(Json(MessageResponse::new(format!(
        "Nilai mahasiswa dengan nim {} berhasil disimpan",
        request.nim
    ))))
}

/// Update a grade by id_nilai
#[utoipa::path(
    put,
    path = "/nilai_mahasiswa/{id_nilai}",
    params(("id_nilai" = i64, Path, description = "Grade row ID")),
    request_body = UpdateNilaiRequest,
    responses(
        (status = 200, description = "Grade updated", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Nilai"
)]
pub async fn update_nilai(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(id_nilai): Path<i64>,
    Json(request): Json<UpdateNilaiRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store
        .nilai_exists(id_nilai)
        .await
        .map_err(|e| ApiError::database(CTX_CHECK, e))?
    {
        return Err(ApiError::NotFound {
            code: error_codes::NILAI_NOT_FOUND,
            message: format!("Data nilai mahasiswa dengan id_nilai {id_nilai} tidak ditemukan."),
        });
    }

    request.validate().map_err(ApiError::Validation)?;

    store
        .update_nilai(id_nilai, &request.nilai)
        .await
        .map_err(|e| ApiError::database(CTX_UPDATE, e))?;

    Ok(Json(MessageResponse::new(format!(
        "Nilai mahasiswa dengan id_nilai {id_nilai} telah diupdate"
    ))))
}

/// Delete a grade by id_nilai
#[utoipa::path(
    delete,
    path = "/nilai_mahasiswa/{id_nilai}",
    params(("id_nilai" = i64, Path, description = "Grade row ID")),
    responses(
        (status = 200, description = "Grade deleted", body = MessageResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Nilai"
)]
pub async fn delete_nilai(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(id_nilai): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = store
        .delete_nilai(id_nilai)
        .await
        .map_err(|e| ApiError::database(CTX_DELETE, e))?;

    if affected == 0 {
        return Err(ApiError::NotFound {
            code: error_codes::NILAI_NOT_FOUND,
            message: format!("Data nilai mahasiswa dengan id_nilai {id_nilai} tidak ditemukan"),
        });
    }

    info!("Nilai '{id_nilai}' deleted");
    Ok(Json(MessageResponse::new(format!(
        "Nilai mahasiswa dengan id_nilai {id_nilai} dihapus dari database"
    ))))
}
