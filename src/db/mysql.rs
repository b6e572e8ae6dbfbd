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

//! [`AcademicStore`] backed by a MySQL pool.
//!
//! Every operation maps onto one of the database's stored procedures with
//! positional binds. Existence checks are plain COUNT queries against the
//! entity tables; all other access goes through `CALL`.

use async_trait::async_trait;
use log::debug;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use super::store::{AcademicStore, StoreError};
use crate::api::models::{
    CreateDosenRequest, CreateMahasiswaRequest, CreateMatkulRequest, CreateNilaiRequest, Dosen,
    Mahasiswa, Matkul, Nilai,
};
use crate::config::DatabaseSettings;

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect a bounded pool using the configured settings.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .connect(&settings.url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

/// Translate a unique-constraint violation into `DuplicateKey` so handlers
/// can answer 409 even when two creates race past the existence pre-check.
fn map_insert_error(err: sqlx::Error, key: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateKey(key.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl AcademicStore for MySqlStore {
    async fn list_dosen(&self) -> Result<Vec<Dosen>, StoreError> {
        let rows = sqlx::query_as::<_, Dosen>("CALL select_dosen()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_dosen(&self, id_dosen: &str) -> Result<Option<Dosen>, StoreError> {
        let rows = sqlx::query_as::<_, Dosen>("CALL select_dosen_by_id(?)")
            .bind(id_dosen)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn dosen_exists(&self, id_dosen: &str) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dosen WHERE id_dosen = ?")
            .bind(id_dosen)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert_dosen(&self, dosen: &CreateDosenRequest) -> Result<(), StoreError> {
        sqlx::query("CALL insert_dosen(?, ?)")
            .bind(&dosen.id_dosen)
            .bind(&dosen.nama_dosen)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, &dosen.id_dosen))?;
        debug!("Inserted dosen '{}'", dosen.id_dosen);
        Ok(())
    }

    async fn update_dosen(&self, id_dosen: &str, nama_dosen: &str) -> Result<(), StoreError> {
        sqlx::query("CALL update_dosen(?, ?)")
            .bind(id_dosen)
            .bind(nama_dosen)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_dosen(&self, id_dosen: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL delete_dosen(?)")
            .bind(id_dosen)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_mahasiswa(&self) -> Result<Vec<Mahasiswa>, StoreError> {
        let rows = sqlx::query_as::<_, Mahasiswa>("CALL select_mahasiswa()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_mahasiswa(&self, nim: i64) -> Result<Option<Mahasiswa>, StoreError> {
        let rows = sqlx::query_as::<_, Mahasiswa>("CALL select_mahasiswa_by_nim(?)")
            .bind(nim)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn mahasiswa_exists(&self, nim: i64) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mahasiswa WHERE nim = ?")
            .bind(nim)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert_mahasiswa(&self, mahasiswa: &CreateMahasiswaRequest) -> Result<(), StoreError> {
        sqlx::query("CALL insert_mahasiswa(?, ?, ?)")
            .bind(mahasiswa.nim)
            .bind(&mahasiswa.nama)
            .bind(&mahasiswa.prodi)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, &mahasiswa.nim.to_string()))?;
        debug!("Inserted mahasiswa '{}'", mahasiswa.nim);
        Ok(())
    }

    async fn update_mahasiswa(
        &self,
        nim: i64,
        nama: &str,
        prodi: &str,
    ) -> Result<(), StoreError> {
        sqlx::query("CALL update_mahasiswa(?, ?, ?)")
            .bind(nim)
            .bind(nama)
            .bind(prodi)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_mahasiswa(&self, nim: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL delete_mahasiswa(?)")
            .bind(nim)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_matkul(&self) -> Result<Vec<Matkul>, StoreError> {
        let rows = sqlx::query_as::<_, Matkul>("CALL select_matkul()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_matkul(&self, kode_matkul: &str) -> Result<Option<Matkul>, StoreError> {
        let rows = sqlx::query_as::<_, Matkul>("CALL select_matkul_by_kode_matkul(?)")
            .bind(kode_matkul)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn matkul_exists(&self, kode_matkul: &str) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matkul WHERE kode_matkul = ?")
            .bind(kode_matkul)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert_matkul(&self, matkul: &CreateMatkulRequest) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL insert_matkul(?, ?, ?, ?)")
            .bind(&matkul.kode_matkul)
            .bind(&matkul.id_dosen)
            .bind(&matkul.nama_matkul)
            .bind(matkul.sks)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, &matkul.kode_matkul))?;
        Ok(result.rows_affected())
    }

    async fn update_matkul(
        &self,
        kode_matkul: &str,
        id_dosen: &str,
        nama_matkul: &str,
        sks: i32,
    ) -> Result<(), StoreError> {
        sqlx::query("CALL update_matkul(?, ?, ?, ?)")
            .bind(kode_matkul)
            .bind(id_dosen)
            .bind(nama_matkul)
            .bind(sks)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_matkul(&self, kode_matkul: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL delete_matkul(?)")
            .bind(kode_matkul)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_nilai(&self) -> Result<Vec<Nilai>, StoreError> {
        let rows = sqlx::query_as::<_, Nilai>("CALL select_nilai_mahasiswa()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_nilai_by_nim(&self, nim: i64) -> Result<Vec<Nilai>, StoreError> {
        let rows = sqlx::query_as::<_, Nilai>("CALL select_nilai_mahasiswa_by_nim(?)")
            .bind(nim)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn nilai_exists(&self, id_nilai: i64) -> Result<bool, StoreError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM nilai_mahasiswa WHERE id_nilai = ?")
                .bind(id_nilai)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    async fn insert_nilai(&self, nilai: &CreateNilaiRequest) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL insert_nilai(?, ?, ?)")
            .bind(nilai.nim)
            .bind(&nilai.kode_matkul)
            .bind(&nilai.nilai)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_nilai(&self, id_nilai: i64, nilai: &str) -> Result<(), StoreError> {
        sqlx::query("CALL update_nilai_mahasiswa(?, ?)")
            .bind(id_nilai)
            .bind(nilai)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_nilai(&self, id_nilai: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("CALL delete_nilai_mahasiswa(?)")
            .bind(id_nilai)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
