use crate::helpers::{Mocks, TestApp};
use hyper::StatusCode;

#[tokio::test]
async fn it_should_return_pong() {
    let app = TestApp::start(Mocks::default()).await;

    let response = app.client.get("/ping").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("pong").and_then(|v| v.as_str()),
        Some("hello from CultuLa API!")
    );
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let app = TestApp::start(Mocks::default()).await;

    let response = app.client.get("/ping").await.unwrap();

    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_handle_concurrent_pings() {
    let app = TestApp::start(Mocks::default()).await;

    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = app.client.clone();
        futures.push(async move { client.get("/ping").await });
    }

    for result in futures::future::join_all(futures).await {
        result.unwrap().assert_status(StatusCode::OK);
    }
}
