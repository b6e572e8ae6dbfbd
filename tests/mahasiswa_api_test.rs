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

//! Mahasiswa (student) endpoint tests.

mod test_support;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use siakad_server::AcademicStore;
use test_support::{body_json, empty_request, json_request, test_router};

#[tokio::test]
async fn test_list_mahasiswa() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;

    let response = router
        .oneshot(empty_request(Method::GET, "/mahasiswa"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([{"nim": 12345, "nama": "Budi", "prodi": "Informatika"}])
    );
}

#[tokio::test]
async fn test_get_mahasiswa_found() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;

    let response = router
        .oneshot(empty_request(Method::GET, "/mahasiswa/12345"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nama"], "Budi");
}

#[tokio::test]
async fn test_get_mahasiswa_missing_is_404() {
    let (router, _store) = test_router();
    let response = router
        .oneshot(empty_request(Method::GET, "/mahasiswa/99999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MAHASISWA_NOT_FOUND");
    assert_eq!(body["message"], "Data mahasiswa tidak ditemukan");
}

#[tokio::test]
async fn test_get_mahasiswa_non_numeric_nim_is_client_error() {
    // The typed Path extractor rejects the segment before the handler runs.
    let (router, _store) = test_router();
    let response = router
        .oneshot(empty_request(Method::GET, "/mahasiswa/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_mahasiswa() {
    let (router, store) = test_router();
    let response = router
        .oneshot(json_request(
            Method::POST,
            "/mahasiswa",
            json!({"nim": 12345, "nama": "Budi", "prodi": "Informatika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Data mahasiswa disimpan dengan sukses"
    );
    assert!(store.get_mahasiswa(12345).await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_mahasiswa_zero_nim_is_400() {
    let (router, _store) = test_router();
    let response = router
        .oneshot(json_request(
            Method::POST,
            "/mahasiswa",
            json!({"nim": 0, "nama": "Budi", "prodi": "Informatika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Data nim, nama, dan prodi tidak boleh kosong."
    );
}

#[tokio::test]
async fn test_create_mahasiswa_duplicate_is_409() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/mahasiswa",
            json!({"nim": 12345, "nama": "Siti", "prodi": "Matematika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        "NIM 12345 sudah ada dalam database."
    );
}

#[tokio::test]
async fn test_create_mahasiswa_insert_time_duplicate_is_409() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;
    store.report_missing_on_exists();

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/mahasiswa",
            json!({"nim": 12345, "nama": "Siti", "prodi": "Matematika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        "NIM 12345 sudah ada dalam database."
    );

    let stored = store.get_mahasiswa(12345).await.unwrap().unwrap();
    assert_eq!(stored.nama, "Budi");
}

#[tokio::test]
async fn test_update_mahasiswa() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;

    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/mahasiswa/12345",
            json!({"nama": "Siti", "prodi": "Matematika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Data mahasiswa dengan nim 12345 telah diperbarui dengan nama Siti dan prodi Matematika"
    );

    let stored = store.get_mahasiswa(12345).await.unwrap().unwrap();
    assert_eq!(stored.prodi, "Matematika");
}

#[tokio::test]
async fn test_update_mahasiswa_missing_is_404() {
    let (router, _store) = test_router();
    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/mahasiswa/99999",
            json!({"nama": "Siti", "prodi": "Matematika"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Data mahasiswa dengan nim 99999 tidak ditemukan."
    );
}

#[tokio::test]
async fn test_delete_mahasiswa() {
    let (router, store) = test_router();
    store.seed_mahasiswa(12345, "Budi", "Informatika").await;

    let response = router
        .oneshot(empty_request(Method::DELETE, "/mahasiswa/12345"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Mahasiswa dengan nim 12345 dihapus dari database"
    );
    assert!(store.get_mahasiswa(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_mahasiswa_missing_is_404() {
    let (router, _store) = test_router();
    let response = router
        .oneshot(empty_request(Method::DELETE, "/mahasiswa/99999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
