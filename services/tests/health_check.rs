mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{MockSqlStorage, create_test_app};

#[tokio::test]
async fn test_health_check_integration() {
    // Case 1: Connected
    let server = TestServer::new(create_test_app(MockSqlStorage::new())).unwrap();
    let response = server.get("/api/is-health").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("OK");

    // Case 2: Disconnected
    let server = TestServer::new(create_test_app(MockSqlStorage::disconnected())).unwrap();
    let response = server.get("/api/is-health").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}
