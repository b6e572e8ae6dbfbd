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

//! Row models and request DTOs for the four academic entities.
//!
//! Row structs mirror the result sets of the `select_*` stored procedures.
//! Request DTOs use `#[serde(default)]` throughout so an omitted field is
//! indistinguishable from an empty one; `validate()` then rejects both with
//! the entity's required-field message. Integer keys treat zero as absent.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lecturer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Dosen {
    pub id_dosen: String,
    pub nama_dosen: String,
}

/// Student row. `nim` is the integer student identification number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mahasiswa {
    pub nim: i64,
    pub nama: String,
    pub prodi: String,
}

/// Course row. `sks` is the credit-hour count; `id_dosen` references the
/// teaching lecturer (enforced by the database, not here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Matkul {
    pub kode_matkul: String,
    pub id_dosen: String,
    pub nama_matkul: String,
    pub sks: i32,
}

/// Grade row. `id_nilai` is generated by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Nilai {
    pub id_nilai: i64,
    pub nim: i64,
    pub kode_matkul: String,
    pub nilai: String,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDosenRequest {
    #[serde(default)]
    pub id_dosen: String,
    #[serde(default)]
    pub nama_dosen: String,
}

impl CreateDosenRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.id_dosen) || is_blank(&self.nama_dosen) {
            return Err("Data id_dosen dan nama_dosen tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDosenRequest {
    #[serde(default)]
    pub nama_dosen: String,
}

impl UpdateDosenRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.nama_dosen) {
            return Err("Data nama_dosen tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMahasiswaRequest {
    #[serde(default)]
    pub nim: i64,
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub prodi: String,
}

impl CreateMahasiswaRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nim <= 0 || is_blank(&self.nama) || is_blank(&self.prodi) {
            return Err("Data nim, nama, dan prodi tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMahasiswaRequest {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub prodi: String,
}

impl UpdateMahasiswaRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.nama) || is_blank(&self.prodi) {
            return Err("Data nama dan prodi tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMatkulRequest {
    #[serde(default)]
    pub kode_matkul: String,
    #[serde(default)]
    pub id_dosen: String,
    #[serde(default)]
    pub nama_matkul: String,
    #[serde(default)]
    pub sks: i32,
}

impl CreateMatkulRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.kode_matkul)
            || is_blank(&self.id_dosen)
            || is_blank(&self.nama_matkul)
            || self.sks <= 0
        {
            return Err(
                "Data kode_matkul, id_dosen, nama_matkul, dan sks tidak boleh kosong.".to_string(),
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMatkulRequest {
    #[serde(default)]
    pub id_dosen: String,
    #[serde(default)]
    pub nama_matkul: String,
    #[serde(default)]
    pub sks: i32,
}

impl UpdateMatkulRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.id_dosen) || is_blank(&self.nama_matkul) || self.sks <= 0 {
            return Err("Data id_dosen, nama_matkul, dan sks tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateNilaiRequest {
    #[serde(default)]
    pub nim: i64,
    #[serde(default)]
    pub kode_matkul: String,
    #[serde(default)]
    pub nilai: String,
}

impl CreateNilaiRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nim <= 0 || is_blank(&self.kode_matkul) || is_blank(&self.nilai) {
            return Err("Data nim, kode_matkul, dan nilai tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateNilaiRequest {
    #[serde(default)]
    pub nilai: String,
}

impl UpdateNilaiRequest {
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.nilai) {
            return Err("Data nilai tidak boleh kosong.".to_string());
        }
        Ok(())
    }
}
