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

//! Handlers for the matkul (course) resource. Key is `kode_matkul`; rows
//! reference a lecturer through `id_dosen`, which only the database's
//! foreign key enforces.

use axum::extract::{Extension, Path};
use axum::response::Json;
use log::info;
use std::sync::Arc;

use crate::api::error::{error_codes, ApiError, ErrorResponse};
use crate::api::models::{CreateMatkulRequest, Matkul, UpdateMatkulRequest};
use crate::api::responses::MessageResponse;
use crate::db::{AcademicStore, StoreError};

const CTX_FETCH: &str = "Terjadi kesalahan dalam mengambil data mata kuliah.";
const CTX_CHECK: &str = "Terjadi kesalahan dalam memeriksa data mata kuliah.";
const CTX_INSERT: &str = "Terjadi kesalahan dalam menyimpan data mata kuliah.";
const CTX_UPDATE: &str = "Terjadi kesalahan dalam memperbarui data mata kuliah.";
const CTX_DELETE: &str = "Terjadi kesalahan dalam menghapus data mata kuliah.";

/// List all courses
#[utoipa::path(
    get,
    path = "/matkul",
    responses(
        (status = 200, description = "All course rows", body = [Matkul]),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Matkul"
)]
pub async fn list_matkul(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
) -> Result<Json<Vec<Matkul>>, ApiError> {
    let rows = store
        .list_matkul()
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    Ok(Json(rows))
}

/// Get a course by code
#[utoipa::path(
    get,
    path = "/matkul/{kode_matkul}",
    params(("kode_matkul" = String, Path, description = "Course code")),
    responses(
        (status = 200, description = "Course found", body = Matkul),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Matkul"
)]
pub async fn get_matkul(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(kode_matkul): Path<String>,
) -> Result<Json<Matkul>, ApiError> {
    let row = store
        .get_matkul(&kode_matkul)
        .await
        .map_err(|e| ApiError::database(CTX_FETCH, e))?;
    row.map(Json).ok_or_else(|| ApiError::NotFound {
        code: error_codes::MATKUL_NOT_FOUND,
        message: "Mata kuliah tidak ditemukan".to_string(),
    })
}

/// Create a course
#[utoipa::path(
    post,
    path = "/matkul",
    request_body = CreateMatkulRequest,
    responses(
        (status = 200, description = "Course stored", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 409, description = "Duplicate kode_matkul", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Matkul"
)]
pub async fn create_matkul(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Json(request): Json<CreateMatkulRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    let duplicate = || {
        ApiError::Conflict(format!(
            "ID Mata Kuliah {} sudah ada dalam database.",
            request.kode_matkul
        ))
    };

    if store
        .matkul_exists(&request.kode_matkul)
        .await
        .map_err(|e| ApiError::database(CTX_CHECK, e))?
    {
        return Err(duplicate());
    }

    match store.insert_matkul(&request).await {
        Ok(0) => Err(ApiError::Internal("Gagal menyimpan mata kuliah".to_string())),
        Ok(_) => {
            info!("Matkul '{}' created", request.kode_matkul);
            Ok(Json(MessageResponse::new(format!(
                "Mata kuliah disimpan dengan kode_matkul {}",
                request.kode_matkul
            ))))
        }
        Err(StoreError::DuplicateKey(_)) => Err(duplicate()),
        Err(e) => Err(ApiError::database(CTX_INSERT, e)),
    }
}

/// Update a course by code
#[utoipa::path(
    put,
    path = "/matkul/{kode_matkul}",
    params(("kode_matkul" = String, Path, description = "Course code")),
    request_body = UpdateMatkulRequest,
    responses(
        (status = 200, description = "Course updated", body = MessageResponse),
        (status = 400, description = "Empty required field", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Matkul"
)]
pub async fn update_matkul(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(kode_matkul): Path<String>,
    Json(request): Json<UpdateMatkulRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store
        .matkul_exists(&kode_matkul)
        .await
        .map_err(|e| ApiError::database(CTX_CHECK, e))?
    {
        return Err(ApiError::NotFound {
            code: error_codes::MATKUL_NOT_FOUND,
            message: format!("Data matkul dengan kode_matkul {kode_matkul} tidak ditemukan."),
        });
    }

    request.validate().map_err(ApiError::Validation)?;

    store
        .update_matkul(
            &kode_matkul,
            &request.id_dosen,
            &request.nama_matkul,
            request.sks,
        )
        .await
        .map_err(|e| ApiError::database(CTX_UPDATE, e))?;

    Ok(Json(MessageResponse::new(format!(
        "Mata kuliah dengan kode_matkul {kode_matkul} telah diupdate"
    ))))
}

/// Delete a course by code
#[utoipa::path(
    delete,
    path = "/matkul/{kode_matkul}",
    params(("kode_matkul" = String, Path, description = "Course code")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    ),
    tag = "Matkul"
)]
pub async fn delete_matkul(
    Extension(store): Extension<Arc<dyn AcademicStore>>,
    Path(kode_matkul): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = store
        .delete_matkul(&kode_matkul)
        .await
        .map_err(|e| ApiError::database(CTX_DELETE, e))?;

    if affected == 0 {
        return Err(ApiError::NotFound {
            code: error_codes::MATKUL_NOT_FOUND,
            message: "Data mata kuliah tidak ditemukan".to_string(),
        });
    }

    info!("Matkul '{kode_matkul}' deleted");
    Ok(Json(MessageResponse::new(format!(
        "Mata kuliah dengan kode {kode_matkul} dihapus dari database"
    ))))
}
