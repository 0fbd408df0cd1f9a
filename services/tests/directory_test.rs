//! Integration tests for tags, staff profiles and the faculty directory.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use campus_services::faculty::{DepartmentLabel, FacultyCard};
use campus_utils::Language;
use campus_utils::profile::MiniProfile;
use common::{MockSqlStorage, create_test_app};
use serde_json::Value;

fn profile(profile_id: i32, name: &str) -> MiniProfile {
    MiniProfile {
        profile_id,
        name: name.to_owned(),
        job_title: "Secretary".to_owned(),
        email: "office@example.edu".to_owned(),
        photo_url: None,
    }
}

#[tokio::test]
async fn test_mini_profile_by_language_id() {
    let storage = MockSqlStorage {
        profiles: vec![
            (Language::ZhTw, profile(1, "林小姐")),
            (Language::EnUs, profile(1, "Ms. Lin")),
        ],
        ..MockSqlStorage::new()
    };
    let server = TestServer::new(create_test_app(storage)).unwrap();

    let response = server
        .get("/api/staff/miniProfile")
        .add_query_param("profileId", "1")
        .add_query_param("languageId", "1")
        .await;
    response.assert_status_ok();

    let body: MiniProfile = response.json();
    assert_eq!(body.name, "Ms. Lin");
}

#[tokio::test]
async fn test_mini_profile_defaults_to_configured_language() {
    let storage = MockSqlStorage {
        profiles: vec![(Language::ZhTw, profile(1, "林小姐"))],
        ..MockSqlStorage::new()
    };
    let server = TestServer::new(create_test_app(storage)).unwrap();

    let response = server
        .get("/api/staff/miniProfile")
        .add_query_param("profileId", "1")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "林小姐");
    assert_eq!(body["jobTitle"], "Secretary");
}

#[tokio::test]
async fn test_mini_profile_missing_is_not_found() {
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();

    let response = server
        .get("/api/staff/miniProfile")
        .add_query_param("profileId", "42")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mini_profile_rejects_unknown_language_id() {
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();

    let response = server
        .get("/api/staff/miniProfile")
        .add_query_param("profileId", "1")
        .add_query_param("languageId", "7")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mini_profile_requires_profile_id() {
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();

    let response = server
        .get("/api/staff/miniProfile")
        .add_query_param("languageId", "1")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_tags_are_localized() {
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();

    let zh: Value = server.get("/api/tags").await.json();
    assert_eq!(zh[0]["name"], "活動");

    let en: Value = server
        .get("/api/tags")
        .add_query_param("language", "en-US")
        .await
        .json();
    assert_eq!(en[0]["name"], "event");
}

#[tokio::test]
async fn test_faculty_list() {
    let storage = MockSqlStorage {
        faculty: vec![FacultyCard {
            faculty_id: 3,
            name: "Wang".to_owned(),
            email: "wang@example.edu".to_owned(),
            research_group: "ab".to_owned(),
            departments: vec![DepartmentLabel {
                code: "CS".to_owned(),
                name: "Computer Science".to_owned(),
            }],
        }],
        ..MockSqlStorage::new()
    };
    let server = TestServer::new(create_test_app(storage)).unwrap();

    let response = server.get("/api/faculty").await;
    response.assert_status_ok();

    let cards: Vec<FacultyCard> = response.json();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].research_group, "ab");
    assert_eq!(cards[0].departments[0].code, "CS");
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();

    let response = server.get("/api/departments").expect_failure().await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "Failed to list departments");
}
