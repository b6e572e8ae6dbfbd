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

//! In-memory [`AcademicStore`] used by the integration tests.
//!
//! Behaves like the stored procedures: inserts on an existing key report a
//! duplicate, deletes return the affected-row count, and `id_nilai` values
//! are assigned from an auto-increment counter. `poison()` makes every call
//! fail so the 500 paths can be exercised.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use siakad_server::api::models::{
    CreateDosenRequest, CreateMahasiswaRequest, CreateMatkulRequest, CreateNilaiRequest, Dosen,
    Mahasiswa, Matkul, Nilai,
};
use siakad_server::db::{AcademicStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    dosen: RwLock<BTreeMap<String, Dosen>>,
    mahasiswa: RwLock<BTreeMap<i64, Mahasiswa>>,
    matkul: RwLock<BTreeMap<String, Matkul>>,
    nilai: RwLock<BTreeMap<i64, Nilai>>,
    next_id_nilai: RwLock<i64>,
    poisoned: AtomicBool,
    zero_affected_inserts: AtomicBool,
    exists_always_misses: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id_nilai: RwLock::new(1),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with a driver error.
    #[allow(dead_code)]
    pub fn poison(&self) {
        self.poisoned.store(true, Ordering::SeqCst);
    }

    /// Make count-returning inserts succeed but report zero affected rows,
    /// like a procedure whose insert silently did nothing.
    #[allow(dead_code)]
    pub fn report_zero_affected(&self) {
        self.zero_affected_inserts.store(true, Ordering::SeqCst);
    }

    /// Make every existence check answer false even for seeded rows, so a
    /// create can pass the pre-check and still hit the key constraint at
    /// insert time.
    #[allow(dead_code)]
    pub fn report_missing_on_exists(&self) {
        self.exists_always_misses.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.poisoned.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn exists_misses(&self) -> bool {
        self.exists_always_misses.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub async fn seed_dosen(&self, id_dosen: &str, nama_dosen: &str) {
        self.dosen.write().await.insert(
            id_dosen.to_string(),
            Dosen {
                id_dosen: id_dosen.to_string(),
                nama_dosen: nama_dosen.to_string(),
            },
        );
    }

    #[allow(dead_code)]
    pub async fn seed_mahasiswa(&self, nim: i64, nama: &str, prodi: &str) {
        self.mahasiswa.write().await.insert(
            nim,
            Mahasiswa {
                nim,
                nama: nama.to_string(),
                prodi: prodi.to_string(),
            },
        );
    }

    #[allow(dead_code)]
    pub async fn seed_matkul(&self, kode_matkul: &str, id_dosen: &str, nama_matkul: &str, sks: i32) {
        self.matkul.write().await.insert(
            kode_matkul.to_string(),
            Matkul {
                kode_matkul: kode_matkul.to_string(),
                id_dosen: id_dosen.to_string(),
                nama_matkul: nama_matkul.to_string(),
                sks,
            },
        );
    }

    /// Seed a grade row, returning its assigned id.
    #[allow(dead_code)]
    pub async fn seed_nilai(&self, nim: i64, kode_matkul: &str, nilai: &str) -> i64 {
        let mut next = self.next_id_nilai.write().await;
        let id_nilai = *next;
        *next += 1;
        self.nilai.write().await.insert(
            id_nilai,
            Nilai {
                id_nilai,
                nim,
                kode_matkul: kode_matkul.to_string(),
                nilai: nilai.to_string(),
            },
        );
        id_nilai
    }
}

#[async_trait]
impl AcademicStore for MemoryStore {
    async fn list_dosen(&self) -> Result<Vec<Dosen>, StoreError> {
        self.check()?;
        Ok(self.dosen.read().await.values().cloned().collect())
    }

    async fn get_dosen(&self, id_dosen: &str) -> Result<Option<Dosen>, StoreError> {
        self.check()?;
        Ok(self.dosen.read().await.get(id_dosen).cloned())
    }

    async fn dosen_exists(&self, id_dosen: &str) -> Result<bool, StoreError> {
        self.check()?;
        Ok(!self.exists_misses() && self.dosen.read().await.contains_key(id_dosen))
    }

    async fn insert_dosen(&self, dosen: &CreateDosenRequest) -> Result<(), StoreError> {
        self.check()?;
        let mut map = self.dosen.write().await;
        if map.contains_key(&dosen.id_dosen) {
            return Err(StoreError::DuplicateKey(dosen.id_dosen.clone()));
        }
        map.insert(
            dosen.id_dosen.clone(),
            Dosen {
                id_dosen: dosen.id_dosen.clone(),
                nama_dosen: dosen.nama_dosen.clone(),
            },
        );
        Ok(())
    }

    async fn update_dosen(&self, id_dosen: &str, nama_dosen: &str) -> Result<(), StoreError> {
        self.check()?;
        if let Some(row) = self.dosen.write().await.get_mut(id_dosen) {
            row.nama_dosen = nama_dosen.to_string();
        }
        Ok(())
    }

    async fn delete_dosen(&self, id_dosen: &str) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.dosen.write().await.remove(id_dosen).map_or(0, |_| 1))
    }

    async fn list_mahasiswa(&self) -> Result<Vec<Mahasiswa>, StoreError> {
        self.check()?;
        Ok(self.mahasiswa.read().await.values().cloned().collect())
    }

    async fn get_mahasiswa(&self, nim: i64) -> Result<Option<Mahasiswa>, StoreError> {
        self.check()?;
        Ok(self.mahasiswa.read().await.get(&nim).cloned())
    }

    async fn mahasiswa_exists(&self, nim: i64) -> Result<bool, StoreError> {
        self.check()?;
        Ok(!self.exists_misses() && self.mahasiswa.read().await.contains_key(&nim))
    }

    async fn insert_mahasiswa(&self, mahasiswa: &CreateMahasiswaRequest) -> Result<(), StoreError> {
        self.check()?;
        let mut map = self.mahasiswa.write().await;
        if map.contains_key(&mahasiswa.nim) {
            return Err(StoreError::DuplicateKey(mahasiswa.nim.to_string()));
        }
        map.insert(
            mahasiswa.nim,
            Mahasiswa {
                nim: mahasiswa.nim,
                nama: mahasiswa.nama.clone(),
                prodi: mahasiswa.prodi.clone(),
            },
        );
        Ok(())
    }

    async fn update_mahasiswa(&self, nim: i64, nama: &str, prodi: &str) -> Result<(), StoreError> {
        self.check()?;
        if let Some(row) = self.mahasiswa.write().await.get_mut(&nim) {
            row.nama = nama.to_string();
            row.prodi = prodi.to_string();
        }
        Ok(())
    }

    async fn delete_mahasiswa(&self, nim: i64) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.mahasiswa.write().await.remove(&nim).map_or(0, |_| 1))
    }

    async fn list_matkul(&self) -> Result<Vec<Matkul>, StoreError> {
        self.check()?;
        Ok(self.matkul.read().await.values().cloned().collect())
    }

    async fn get_matkul(&self, kode_matkul: &str) -> Result<Option<Matkul>, StoreError> {
        self.check()?;
        Ok(self.matkul.read().await.get(kode_matkul).cloned())
    }

    async fn matkul_exists(&self, kode_matkul: &str) -> Result<bool, StoreError> {
        self.check()?;
        Ok(!self.exists_misses() && self.matkul.read().await.contains_key(kode_matkul))
    }

    async fn insert_matkul(&self, matkul: &CreateMatkulRequest) -> Result<u64, StoreError> {
        self.check()?;
        let mut map = self.matkul.write().await;
        if map.contains_key(&matkul.kode_matkul) {
            return Err(StoreError::DuplicateKey(matkul.kode_matkul.clone()));
        }
        if self.zero_affected_inserts.load(Ordering::SeqCst) {
            return Ok(0);
        }
        map.insert(
            matkul.kode_matkul.clone(),
            Matkul {
                kode_matkul: matkul.kode_matkul.clone(),
                id_dosen: matkul.id_dosen.clone(),
                nama_matkul: matkul.nama_matkul.clone(),
                sks: matkul.sks,
            },
        );
        Ok(1)
    }

    async fn update_matkul(
        &self,
        kode_matkul: &str,
        id_dosen: &str,
        nama_matkul: &str,
        sks: i32,
    ) -> Result<(), StoreError> {
        self.check()?;
        if let Some(row) = self.matkul.write().await.get_mut(kode_matkul) {
            row.id_dosen = id_dosen.to_string();
            row.nama_matkul = nama_matkul.to_string();
            row.sks = sks;
        }
        Ok(())
    }

    async fn delete_matkul(&self, kode_matkul: &str) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.matkul.write().await.remove(kode_matkul).map_or(0, |_| 1))
    }

    async fn list_nilai(&self) -> Result<Vec<Nilai>, StoreError> {
        self.check()?;
        Ok(self.nilai.read().await.values().cloned().collect())
    }

    async fn get_nilai_by_nim(&self, nim: i64) -> Result<Vec<Nilai>, StoreError> {
        self.check()?;
        Ok(self
            .nilai
            .read()
            .await
            .values()
            .filter(|n| n.nim == nim)
            .cloned()
            .collect())
    }

    async fn nilai_exists(&self, id_nilai: i64) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.nilai.read().await.contains_key(&id_nilai))
    }

    async fn insert_nilai(&self, nilai: &CreateNilaiRequest) -> Result<u64, StoreError> {
        self.check()?;
        if self.zero_affected_inserts.load(Ordering::SeqCst) {
            return Ok(0);
        }
        let mut next = self.next_id_nilai.write().await;
        let id_nilai = *next;
        *next += 1;
        self.nilai.write().await.insert(
            id_nilai,
            Nilai {
                id_nilai,
                nim: nilai.nim,
                kode_matkul: nilai.kode_matkul.clone(),
                nilai: nilai.nilai.clone(),
            },
        );
        Ok(1)
    }

    async fn update_nilai(&self, id_nilai: i64, nilai: &str) -> Result<(), StoreError> {
        self.check()?;
        if let Some(row) = self.nilai.write().await.get_mut(&id_nilai) {
            row.nilai = nilai.to_string();
        }
        Ok(())
    }

    async fn delete_nilai(&self, id_nilai: i64) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.nilai.write().await.remove(&id_nilai).map_or(0, |_| 1))
    }
}
