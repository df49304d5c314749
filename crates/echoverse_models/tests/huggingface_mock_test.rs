use echoverse_core::{Credential, HttpSettings, SynthesisSettings, Voice};
use echoverse_error::NarrationErrorKind;
use echoverse_interface::Synthesizer;
use echoverse_models::{HuggingFaceSynthesizer, MAX_INPUT_CHARS};
use echoverse_storage::{AudioStore, SessionAudioStore};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEMALE_PATH: &str = "/espnet/kan-bayashi_ljspeech_vits";
const MALE_PATH: &str = "/facebook/mms-tts-eng";

fn synthesizer_for(server_uri: &str, store: SessionAudioStore) -> HuggingFaceSynthesizer {
    let synthesis = SynthesisSettings {
        base_url: server_uri.to_string(),
    };
    let http = HttpSettings {
        request_timeout_secs: 5,
    };
    HuggingFaceSynthesizer::new(&synthesis, &http, Arc::new(store)).expect("client builds")
}

/// Address of a port nothing listens on.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn token() -> Credential {
    Credential::new("hf_test_token")
}

#[tokio::test]
async fn test_synthesize_stores_audio_and_returns_handle() {
    let server = MockServer::start().await;
    let audio = vec![0x66, 0x4c, 0x61, 0x43, 1, 2, 3, 4];
    Mock::given(method("POST"))
        .and(path(FEMALE_PATH))
        .and(header("authorization", "Bearer hf_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(audio.clone(), "audio/flac"))
        .expect(1)
        .mount(&server)
        .await;

    let store = SessionAudioStore::new();
    let synthesizer = synthesizer_for(&server.uri(), store.clone());

    let handle = synthesizer
        .synthesize("Hello there.", Voice::Female, &token())
        .await
        .expect("synthesis succeeds");

    assert_eq!(handle.mime_type(), "audio/flac");
    assert_eq!(*handle.size_bytes(), audio.len());
    assert!(store.contains(&handle).await);
    let stored = store.retrieve(&handle).await.expect("stored bytes");
    assert_eq!(&*stored, audio.as_slice());
}

#[tokio::test]
async fn test_male_voice_uses_male_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MALE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1, 2, 3], "audio/wav"))
        .expect(1)
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());
    synthesizer
        .synthesize("Hello.", Voice::Male, &token())
        .await
        .expect("synthesis succeeds");
}

#[tokio::test]
async fn test_each_synthesis_yields_fresh_handle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![9, 9, 9], "audio/flac"))
        .mount(&server)
        .await;

    let store = SessionAudioStore::new();
    let synthesizer = synthesizer_for(&server.uri(), store.clone());
    let first = synthesizer
        .synthesize("Same text", Voice::Female, &token())
        .await
        .expect("first");
    let second = synthesizer
        .synthesize("Same text", Voice::Female, &token())
        .await
        .expect("second");

    assert_ne!(first, second);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_input_is_truncated_to_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1], "audio/flac"))
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());

    let at_limit = "a".repeat(MAX_INPUT_CHARS);
    let over_limit = "b".repeat(MAX_INPUT_CHARS + 1);
    synthesizer
        .synthesize(&at_limit, Voice::Female, &token())
        .await
        .expect("at limit");
    synthesizer
        .synthesize(&over_limit, Voice::Female, &token())
        .await
        .expect("over limit");

    let requests = server.received_requests().await.expect("recording enabled");
    let sent: Vec<String> = requests
        .iter()
        .map(|request| {
            let body: Value = request.body_json().expect("json body");
            body["inputs"].as_str().expect("inputs").to_string()
        })
        .collect();

    assert_eq!(sent[0], at_limit);
    assert_eq!(sent[1].chars().count(), MAX_INPUT_CHARS);
    assert!(sent[1].chars().all(|c| c == 'b'));
}

#[tokio::test]
async fn test_blank_credential_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1], "audio/flac"))
        .expect(0)
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());
    let err = synthesizer
        .synthesize("Hello", Voice::Female, &Credential::new("   "))
        .await
        .expect_err("blank credential must fail");

    assert_eq!(
        err.kind(),
        &NarrationErrorKind::Validation("missing credential".to_string())
    );
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials in Authorization header" })),
        )
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());
    let err = synthesizer
        .synthesize("Hello", Voice::Female, &token())
        .await
        .expect_err("401 must fail");

    assert_eq!(
        err.kind(),
        &NarrationErrorKind::Auth("invalid or unauthorized credential".to_string())
    );
}

#[tokio::test]
async fn test_loading_model_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model facebook/mms-tts-eng is currently loading",
            "estimated_time": 20.0
        })))
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());
    let err = synthesizer
        .synthesize("Hello", Voice::Male, &token())
        .await
        .expect_err("loading must fail");

    assert!(matches!(err.kind(), NarrationErrorKind::Retryable(_)));
    assert!(err.user_message().contains("Male voice model is currently loading"));
    assert!(err.user_message().contains("try again in a moment"));
}

#[tokio::test]
async fn test_other_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let synthesizer = synthesizer_for(&server.uri(), SessionAudioStore::new());
    let err = synthesizer
        .synthesize("Hello", Voice::Female, &token())
        .await
        .expect_err("500 must fail");

    assert_eq!(
        err.kind(),
        &NarrationErrorKind::Upstream("HTTP 500".to_string())
    );
}

#[tokio::test]
async fn test_non_audio_payload_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generated_text": "oops" })))
        .mount(&server)
        .await;

    let store = SessionAudioStore::new();
    let synthesizer = synthesizer_for(&server.uri(), store.clone());
    let err = synthesizer
        .synthesize("Hello", Voice::Female, &token())
        .await
        .expect_err("json payload must fail");

    assert_eq!(
        err.kind(),
        &NarrationErrorKind::Upstream("invalid audio payload".to_string())
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let synthesizer = synthesizer_for(&closed_port_uri(), SessionAudioStore::new());
    let err = synthesizer
        .synthesize("Hello", Voice::Female, &token())
        .await
        .expect_err("closed port must fail");

    assert!(matches!(err.kind(), NarrationErrorKind::Network(_)));
    assert!(err.kind().is_retryable());
}

#[test]
fn test_voice_model_table() {
    assert_eq!(
        HuggingFaceSynthesizer::model_for(Voice::Female),
        "espnet/kan-bayashi_ljspeech_vits"
    );
    assert_eq!(
        HuggingFaceSynthesizer::model_for(Voice::Male),
        "facebook/mms-tts-eng"
    );
}
