//! End-to-end session flows against a mocked model service.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use vc_cli::bootstrap::{wire_dependencies, AppRuntime, UiPorts};
use vc_cli::commands::upload_path;
use vc_core::image::{EncodedImage, MimeType, UploadError, ValidationError};
use vc_core::ports::{NotifierPort, SessionEventPort};
use vc_core::session::{Notification, SessionPhase, SessionState};
use vc_infra::GeminiConfig;

const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

#[derive(Default)]
struct Recorder {
    notifications: Mutex<Vec<Notification>>,
    states: Mutex<Vec<SessionState>>,
}

impl Recorder {
    fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

#[async_trait]
impl NotifierPort for Recorder {
    async fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[async_trait]
impl SessionEventPort for Recorder {
    async fn emit_session_state_changed(&self, state: SessionState) {
        self.states.lock().unwrap().push(state);
    }
}

fn runtime_for(server: &ServerGuard) -> (AppRuntime, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let deps = wire_dependencies(
        GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url: server.url(),
        },
        UiPorts {
            notifier: recorder.clone(),
            session_events: recorder.clone(),
        },
    )
    .unwrap();
    (AppRuntime::new(deps), recorder)
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn model_answer(description: &str, score: f64) -> String {
    let text = json!({ "description": description, "confidenceScore": score }).to_string();
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
        .to_string()
}

fn payload_matcher(content: &[u8]) -> Matcher {
    let image = EncodedImage::from_bytes(&MimeType::image_jpeg(), content);
    Matcher::Regex(format!(
        r#""inline_data":\{{"mime_type":"image/jpeg","data":"{}"\}}"#,
        regex_escape(image.payload())
    ))
}

/// `+` is the only base64 character with a meaning in regex.
fn regex_escape(text: &str) -> String {
    text.replace('+', r"\+")
}

#[tokio::test]
async fn jpeg_upload_is_classified_and_recorded() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let content = vec![0xAB; 2_000];
    let path = write_file(dir.path(), "cat.jpg", &content);
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(payload_matcher(&content))
        .with_status(200)
        .with_body(model_answer("a tabby cat", 0.93))
        .expect(1)
        .create_async()
        .await;
    let (runtime, recorder) = runtime_for(&server);

    let state = upload_path(&runtime, &path).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state.phase, SessionPhase::Success);
    let image = state.current_image.clone().unwrap();
    assert!(image.as_str().starts_with("data:image/jpeg;base64,"));
    assert_eq!(image.decoded_len(), 2_000);
    assert_eq!(state.current_result.as_ref().unwrap().description(), "a tabby cat");
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].image, image);
    assert_eq!(recorder.titles(), vec!["Classification Successful"]);
    let phases: Vec<_> = recorder.states.lock().unwrap().iter().map(|s| s.phase).collect();
    assert_eq!(phases, vec![SessionPhase::Loading, SessionPhase::Success]);
}

#[tokio::test]
async fn oversized_png_never_reaches_the_model() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "huge.png", &vec![0u8; 6 * 1024 * 1024]);
    let mock = server.mock("POST", ENDPOINT).expect(0).create_async().await;
    let (runtime, recorder) = runtime_for(&server);

    let err = upload_path(&runtime, &path).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        UploadError::Validation(ValidationError::TooLarge { .. })
    ));
    assert_eq!(err.to_string(), "File size exceeds the limit of 5MB.");
    assert_eq!(runtime.session().get_state().await, SessionState::default());
    assert_eq!(recorder.titles(), vec!["Upload Error"]);
}

#[tokio::test]
async fn text_file_is_rejected_as_invalid_type() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.txt", &[b'a'; 1_024]);
    let mock = server.mock("POST", ENDPOINT).expect(0).create_async().await;
    let (runtime, _recorder) = runtime_for(&server);

    let err = upload_path(&runtime, &path).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err.to_string(),
        "Invalid file type. Please upload an image (JPEG, PNG, GIF, WEBP, etc.)."
    );
    assert!(runtime.session().get_state().await.current_image.is_none());
}

#[tokio::test]
async fn service_failure_keeps_history_and_sets_error() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(dir.path(), "first.jpg", b"first image");
    let second = write_file(dir.path(), "second.jpg", b"second image");
    let _ok = server
        .mock("POST", ENDPOINT)
        .match_body(payload_matcher(b"first image"))
        .with_status(200)
        .with_body(model_answer("a dog", 0.6))
        .create_async()
        .await;
    let _failing = server
        .mock("POST", ENDPOINT)
        .match_body(payload_matcher(b"second image"))
        .with_status(500)
        .with_body(json!({ "error": { "code": 500, "message": "Internal error" } }).to_string())
        .create_async()
        .await;
    let (runtime, recorder) = runtime_for(&server);

    upload_path(&runtime, &first).await.unwrap();
    let state = upload_path(&runtime, &second).await.unwrap();

    assert_eq!(state.phase, SessionPhase::Failure);
    assert!(state.current_result.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("model service returned 500: Internal error")
    );
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].result.description(), "a dog");
    assert_eq!(
        recorder.titles(),
        vec!["Classification Successful", "Classification Failed"]
    );
}

#[tokio::test]
async fn missing_path_is_reported_as_read_error() {
    let server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let (runtime, recorder) = runtime_for(&server);

    let err = upload_path(&runtime, &dir.path().join("gone.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Error reading the image file.");
    assert_eq!(recorder.titles(), vec!["Upload Error"]);
}

#[tokio::test]
async fn describe_returns_caption_without_touching_session() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "beach.jpg", b"beach");
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(
            json!({ "candidates": [{ "content": { "parts": [{ "text": "{\"description\":\"Waves roll onto a quiet beach at dusk.\"}" }] } }] })
                .to_string(),
        )
        .create_async()
        .await;
    let (runtime, recorder) = runtime_for(&server);
    let file = vc_infra::probe_upload(&path).await.unwrap();

    let caption = runtime
        .usecases()
        .describe_image()
        .execute(&file)
        .await
        .unwrap();

    assert_eq!(caption.description(), "Waves roll onto a quiet beach at dusk.");
    assert_eq!(runtime.session().get_state().await, SessionState::default());
    assert!(recorder.states.lock().unwrap().is_empty());
}
