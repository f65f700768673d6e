use crate::helpers::mocks::{MockVideoGenerator, SubmitBehavior};
use crate::helpers::{Mocks, TestApp};
use cultula_backend::domain::avatar::TalkResponse;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn talk_body() -> serde_json::Value {
    json!({ "text": "こんにちは", "image_url": "https://x/img.png" })
}

#[tokio::test]
async fn it_should_return_the_video_url_after_polling() {
    let app = TestApp::start(Mocks {
        generator: Some(Arc::new(MockVideoGenerator::ready_on(3))),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TalkResponse = response.json().unwrap();
    assert_eq!(body.video_url, "https://cdn/out.mp4");
    assert_eq!(body.status, "done");
    assert_eq!(body.id, "job1");

    // the job was ready on the third poll, so exactly three fetches happened
    let generator = app.mocks.generator.as_ref().unwrap();
    assert_eq!(generator.fetches.lock().len(), 3);
}

#[tokio::test]
async fn it_should_chain_stage_outputs_through_the_pipeline() {
    let app = TestApp::start(Mocks::default()).await;

    app.client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    // synthesized bytes were published, and the published URL (not anything
    // else) went into the job submission
    assert_eq!(app.mocks.publisher.calls.lock()[0].0, 100);

    let generator = app.mocks.generator.as_ref().unwrap();
    assert_eq!(
        generator.submits.lock().as_slice(),
        &[(
            "https://x/img.png".to_string(),
            "https://cdn/abc.mp3".to_string(),
            720
        )]
    );
}

#[tokio::test]
async fn it_should_pass_the_requested_resolution_to_the_provider() {
    let app = TestApp::start(Mocks::default()).await;

    app.client
        .post(
            "/avatar/talk_from_tts",
            &json!({
                "text": "こんにちは",
                "image_url": "https://x/img.png",
                "resolution": "1080p"
            }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let generator = app.mocks.generator.as_ref().unwrap();
    assert_eq!(generator.submits.lock()[0].2, 1080);
}

#[tokio::test]
async fn it_should_fail_fast_without_video_credentials() {
    let app = TestApp::start(Mocks {
        generator: None,
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("credentials");

    // no provider was reached
    assert!(app.mocks.synthesizer.calls.lock().is_empty());
    assert!(app.mocks.publisher.calls.lock().is_empty());
}

#[tokio::test]
async fn it_should_map_a_rejected_submission_to_400() {
    let app = TestApp::start(Mocks {
        generator: Some(Arc::new(MockVideoGenerator::with_submit_behavior(
            SubmitBehavior::Reject("face not detected"),
        ))),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_detail_contains("face not detected");
}

#[tokio::test]
async fn it_should_map_a_missing_job_id_to_500() {
    let app = TestApp::start(Mocks {
        generator: Some(Arc::new(MockVideoGenerator::with_submit_behavior(
            SubmitBehavior::MissingId,
        ))),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("job id");
}

#[tokio::test]
async fn it_should_time_out_with_504_when_no_result_appears() {
    let app = TestApp::start(Mocks {
        generator: Some(Arc::new(MockVideoGenerator::never_ready())),
        ..Mocks::default()
    })
    .await;

    let response = app
        .client
        .post("/avatar/talk_from_tts", &talk_body())
        .await
        .unwrap();

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);

    // the poll budget is exactly 60 attempts
    let generator = app.mocks.generator.as_ref().unwrap();
    assert_eq!(generator.fetches.lock().len(), 60);
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let app = TestApp::start(Mocks::default()).await;

    let response = app
        .client
        .post(
            "/avatar/talk_from_tts",
            &json!({ "text": "", "image_url": "https://x/img.png" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(app.mocks.synthesizer.calls.lock().is_empty());
}
