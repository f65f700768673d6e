use crate::helpers::mocks::MockTranscriber;
use crate::helpers::{Mocks, TestApp};
use hyper::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn it_should_transcribe_an_uploaded_file() {
    let app = TestApp::start(Mocks {
        transcriber: Arc::new(MockTranscriber::transcribing("こんにちは")),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post_multipart("/listen", "audio", "clip.mp3", "audio/mpeg", &[1u8; 64])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("text").and_then(|v| v.as_str()),
        Some("こんにちは")
    );

    // filename and payload reached the provider
    assert_eq!(
        app.mocks.transcriber.calls.lock().as_slice(),
        &[("clip.mp3".to_string(), 64)]
    );
}

#[tokio::test]
async fn it_should_reject_a_missing_audio_field() {
    let app = TestApp::start(Mocks::default()).await;

    let response = app
        .client
        .post_multipart("/listen", "file", "clip.mp3", "audio/mpeg", &[1u8; 64])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_detail_contains("audio");

    assert!(app.mocks.transcriber.calls.lock().is_empty());
}

#[tokio::test]
async fn it_should_reject_an_empty_audio_file() {
    let app = TestApp::start(Mocks::default()).await;

    let response = app
        .client
        .post_multipart("/listen", "audio", "clip.mp3", "audio/mpeg", &[])
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_surface_provider_failures_as_500() {
    let app = TestApp::start(Mocks {
        transcriber: Arc::new(MockTranscriber::failing("unsupported container")),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post_multipart("/listen", "audio", "clip.xyz", "audio/mpeg", &[1u8; 64])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("unsupported container");
}
