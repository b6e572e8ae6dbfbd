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

//! OpenAPI document served at `/openapi.json` and browsable through the
//! Swagger UI at `/docs`.

use utoipa::OpenApi;

use crate::api::error::ErrorResponse;
use crate::api::handlers;
use crate::api::models::{
    CreateDosenRequest, CreateMahasiswaRequest, CreateMatkulRequest, CreateNilaiRequest, Dosen,
    Mahasiswa, Matkul, Nilai, UpdateDosenRequest, UpdateMahasiswaRequest, UpdateMatkulRequest,
    UpdateNilaiRequest,
};
use crate::api::responses::{HealthResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIAKAD Server API",
        version = "0.1.0",
        description = "REST gateway over the academic database. Lecturers, students, courses, and grades, each backed by stored procedures.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    paths(
        handlers::health_check,
        handlers::dosen::list_dosen,
        handlers::dosen::get_dosen,
        handlers::dosen::create_dosen,
        handlers::dosen::update_dosen,
        handlers::dosen::delete_dosen,
        handlers::mahasiswa::list_mahasiswa,
        handlers::mahasiswa::get_mahasiswa,
        handlers::mahasiswa::create_mahasiswa,
        handlers::mahasiswa::update_mahasiswa,
        handlers::mahasiswa::delete_mahasiswa,
        handlers::matkul::list_matkul,
        handlers::matkul::get_matkul,
        handlers::matkul::create_matkul,
        handlers::matkul::update_matkul,
        handlers::matkul::delete_matkul,
        handlers::nilai::list_nilai,
        handlers::nilai::get_nilai_by_nim,
        handlers::nilai::create_nilai,
        handlers::nilai::update_nilai,
        handlers::nilai::delete_nilai,
    ),
    components(schemas(
        Dosen,
        Mahasiswa,
        Matkul,
        Nilai,
        CreateDosenRequest,
        UpdateDosenRequest,
        CreateMahasiswaRequest,
        UpdateMahasiswaRequest,
        CreateMatkulRequest,
        UpdateMatkulRequest,
        CreateNilaiRequest,
        UpdateNilaiRequest,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Server health"),
        (name = "Dosen", description = "Lecturer management"),
        (name = "Mahasiswa", description = "Student management"),
        (name = "Matkul", description = "Course management"),
        (name = "Nilai", description = "Grade management"),
    )
)]
pub struct ApiDoc;
