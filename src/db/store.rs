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

//! The data-access seam between HTTP handlers and the database.
//!
//! Handlers depend on [`AcademicStore`] only; the production implementation
//! ([`super::MySqlStore`]) maps every method onto a stored procedure call or
//! an existence COUNT query. Tests substitute an in-memory implementation.

use async_trait::async_trait;

use crate::api::models::{
    CreateDosenRequest, CreateMahasiswaRequest, CreateMatkulRequest, CreateNilaiRequest, Dosen,
    Mahasiswa, Matkul, Nilai,
};

/// Errors surfaced by store implementations.
///
/// `DuplicateKey` is produced when the database rejects an insert on a unique
/// constraint, which closes the race left open by the existence pre-check.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// CRUD operations over the four academic entities.
///
/// Insert methods return the affected-row count reported by the procedure;
/// delete methods do the same, with zero meaning the key did not exist.
#[async_trait]
pub trait AcademicStore: Send + Sync {
    // Dosen (lecturer)
    async fn list_dosen(&self) -> Result<Vec<Dosen>, StoreError>;
    async fn get_dosen(&self, id_dosen: &str) -> Result<Option<Dosen>, StoreError>;
    async fn dosen_exists(&self, id_dosen: &str) -> Result<bool, StoreError>;
    async fn insert_dosen(&self, dosen: &CreateDosenRequest) -> Result<(), StoreError>;
    async fn update_dosen(&self, id_dosen: &str, nama_dosen: &str) -> Result<(), StoreError>;
    async fn delete_dosen(&self, id_dosen: &str) -> Result<u64, StoreError>;

    // Mahasiswa (student)
    async fn list_mahasiswa(&self) -> Result<Vec<Mahasiswa>, StoreError>;
    async fn get_mahasiswa(&self, nim: i64) -> Result<Option<Mahasiswa>, StoreError>;
    async fn mahasiswa_exists(&self, nim: i64) -> Result<bool, StoreError>;
    async fn insert_mahasiswa(&self, mahasiswa: &CreateMahasiswaRequest) -> Result<(), StoreError>;
    async fn update_mahasiswa(&self, nim: i64, nama: &str, prodi: &str)
        -> Result<(), StoreError>;
    async fn delete_mahasiswa(&self, nim: i64) -> Result<u64, StoreError>;

    // Matkul (course)
    async fn list_matkul(&self) -> Result<Vec<Matkul>, StoreError>;
    async fn get_matkul(&self, kode_matkul: &str) -> Result<Option<Matkul>, StoreError>;
    async fn matkul_exists(&self, kode_matkul: &str) -> Result<bool, StoreError>;
    async fn insert_matkul(&self, matkul: &CreateMatkulRequest) -> Result<u64, StoreError>;
    async fn update_matkul(
        &self,
        kode_matkul: &str,
        id_dosen: &str,
        nama_matkul: &str,
        sks: i32,
    ) -> Result<(), StoreError>;
    async fn delete_matkul(&self, kode_matkul: &str) -> Result<u64, StoreError>;

    // Nilai mahasiswa (grade)
    async fn list_nilai(&self) -> Result<Vec<Nilai>, StoreError>;
    async fn get_nilai_by_nim(&self, nim: i64) -> Result<Vec<Nilai>, StoreError>;
    async fn nilai_exists(&self, id_nilai: i64) -> Result<bool, StoreError>;
    async fn insert_nilai(&self, nilai: &CreateNilaiRequest) -> Result<u64, StoreError>;
    async fn update_nilai(&self, id_nilai: i64, nilai: &str) -> Result<(), StoreError>;
    async fn delete_nilai(&self, id_nilai: i64) -> Result<u64, StoreError>;
}
