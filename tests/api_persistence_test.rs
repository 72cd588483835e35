// Copyright 2025 The Drasi Authors.
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

//! Integration tests for the file-backed store
//! Tests that API mutations survive reopening the store

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::http::{Method, StatusCode};
use company_api::{load_config_file, save_config_file, CompanyServer, ServerConfig, StoreConfig};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use test_support::send;

fn file_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        base_url: Some("http://files.test".to_string()),
        store: StoreConfig::File {
            path: dir.path().join("data"),
            database: "companies".to_string(),
        },
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_mutations_survive_server_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = file_config(&temp_dir);

    let id = {
        let server = CompanyServer::new(&config).await.unwrap();
        let app = server.router();

        let created = send(
            &app,
            Method::POST,
            "/companys",
            Some(json!({"title": "Acme", "description": "Anvils", "review": "Sturdy"})),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);
        let id = created.json()["item"]["id"].as_str().unwrap().to_string();

        let updated = send(
            &app,
            Method::PUT,
            &format!("/companys/{id}"),
            Some(json!({"title": "Acme Corp"})),
        )
        .await;
        assert_eq!(updated.status, StatusCode::OK);
        server.store().close().await.unwrap();
        id
    };

    assert!(temp_dir.path().join("data/companies.json").exists());

    let server = CompanyServer::new(&config).await.unwrap();
    let fetched = send(&server.router(), Method::GET, &format!("/companys/{id}"), None).await;

    assert_eq!(fetched.status, StatusCode::OK);
    let json = fetched.json();
    let body = &json["item"];
    assert_eq!(body["title"], "Acme Corp");
    assert_eq!(body["review"], "Sturdy");
    assert_eq!(
        body["_links"]["self"]["href"],
        format!("http://files.test/companys/{id}")
    );
}

#[tokio::test]
async fn test_seed_persists_exact_count() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = file_config(&temp_dir);

    let server = CompanyServer::new(&config).await.unwrap();
    let response = send(
        &server.router(),
        Method::POST,
        "/companys/seed",
        Some(json!({"amount": 4})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let reopened = CompanyServer::new(&config).await.unwrap();
    let listed = send(&reopened.router(), Method::GET, "/companys", None).await;
    assert_eq!(listed.json()["pagination"]["totalItems"], 4);
}

#[tokio::test]
async fn test_corrupt_store_file_fails_startup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = file_config(&temp_dir);
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(temp_dir.path().join("data/companies.json"), "{not json").unwrap();

    assert!(CompanyServer::new(&config).await.is_err());
}

#[tokio::test]
async fn test_saved_config_round_trips_through_loader() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("server.yaml");
    let config = file_config(&temp_dir);

    save_config_file(&config, &config_path).expect("Failed to save config");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("kind: file"), "{content}");
    assert!(content.contains("baseUrl"), "{content}");

    let loaded = load_config_file(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
}
