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

//! Router assembly. The store is injected as an `Extension` so tests can
//! swap in an in-memory implementation.

use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::api::handlers::{self, dosen, mahasiswa, matkul, nilai};
use crate::db::AcademicStore;

/// Build the application router over the given store.
pub fn build_router(store: Arc<dyn AcademicStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dosen", get(dosen::list_dosen).post(dosen::create_dosen))
        .route(
            "/dosen/:id_dosen",
            get(dosen::get_dosen)
                .put(dosen::update_dosen)
                .delete(dosen::delete_dosen),
        )
        .route(
            "/mahasiswa",
            get(mahasiswa::list_mahasiswa).post(mahasiswa::create_mahasiswa),
        )
        .route(
            "/mahasiswa/:nim",
            get(mahasiswa::get_mahasiswa)
                .put(mahasiswa::update_mahasiswa)
                .delete(mahasiswa::delete_mahasiswa),
        )
        .route(
            "/matkul",
            get(matkul::list_matkul).post(matkul::create_matkul),
        )
        .route(
            "/matkul/:kode_matkul",
            get(matkul::get_matkul)
                .put(matkul::update_matkul)
                .delete(matkul::delete_matkul),
        )
        .route(
            "/nilai_mahasiswa",
            get(nilai::list_nilai).post(nilai::create_nilai),
        )
        // GET reads by nim, PUT and DELETE address a row by id_nilai; they
        // share one path segment so the registration uses a neutral name.
        .route(
            "/nilai_mahasiswa/:id",
            get(nilai::get_nilai_by_nim)
                .put(nilai::update_nilai)
                .delete(nilai::delete_nilai),
        )
        .layer(Extension(store))
}
