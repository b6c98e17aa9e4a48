//! Exercises the OpenRouter client against a local stub of the chat-completions endpoint.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use dairo_core::agent::{AgentProvider, CompletionAgent};
use dairo_core::config::{ModelSettings, OpenRouterSecret, SecretConfig};
use dairo_core::secret::SecretService;
use dairo_interaction::{OpenRouterAgentProvider, OpenRouterApiAgent};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct RecordedRequest {
    authorization: Option<String>,
    title: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn chat_completions(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    stub.seen.lock().unwrap().push(RecordedRequest {
        authorization: header("authorization"),
        title: header("x-title"),
        body,
    });
    (stub.status, Json(stub.reply.clone()))
}

/// Starts a stub server and returns its API root plus the captured requests.
async fn spawn_stub(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Vec<RecordedRequest>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        reply,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/api/v1/chat/completions", post(chat_completions))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/v1", addr), seen)
}

fn completion(content: &str) -> Value {
    json!({
        "id": "gen-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
}

#[tokio::test]
async fn test_complete_returns_first_choice_and_sends_expected_request() {
    let (base_url, seen) = spawn_stub(StatusCode::OK, completion("You are a physicist...")).await;
    let agent = OpenRouterApiAgent::new("sk-or-test", "deepseek/deepseek-chat-v3-0324:free")
        .with_base_url(&base_url);

    let reply = agent.complete("Explain relativity").await.unwrap();

    assert_eq!(reply, "You are a physicist...");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer sk-or-test"));
    assert_eq!(request.title.as_deref(), Some("Dairo"));
    assert_eq!(
        request.body,
        json!({
            "model": "deepseek/deepseek-chat-v3-0324:free",
            "messages": [{ "role": "user", "content": "Explain relativity" }]
        })
    );
}

#[tokio::test]
async fn test_max_tokens_is_forwarded() {
    let (base_url, seen) = spawn_stub(StatusCode::OK, completion("ok")).await;
    let agent = OpenRouterApiAgent::new("k", "m")
        .with_base_url(&base_url)
        .with_max_tokens(Some(256));

    agent.complete("hi").await.unwrap();

    assert_eq!(seen.lock().unwrap()[0].body["max_tokens"], json!(256));
}

#[tokio::test]
async fn test_error_status_is_relayed() {
    let (base_url, _) = spawn_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Rate limit exceeded", "code": 429 } }),
    )
    .await;
    let agent = OpenRouterApiAgent::new("k", "m").with_base_url(&base_url);

    let err = agent.complete("hi").await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(err.upstream_status_code(), Some(429));
    assert_eq!(err.to_string(), "OpenRouter API error: Too Many Requests");
}

#[tokio::test]
async fn test_missing_content_yields_empty_reply() {
    let (base_url, _) = spawn_stub(StatusCode::OK, json!({ "choices": [] })).await;
    let agent = OpenRouterApiAgent::new("k", "m").with_base_url(&base_url);

    assert_eq!(agent.complete("hi").await.unwrap(), "");
}

#[tokio::test]
async fn test_connection_failure_is_upstream_without_status() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let agent = OpenRouterApiAgent::new("k", "m").with_base_url(&format!("http://{}/v1", addr));
    let err = agent.complete("hi").await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(err.upstream_status_code(), None);
}

struct FixedSecrets(SecretConfig);

#[async_trait::async_trait]
impl SecretService for FixedSecrets {
    async fn load_secrets(&self) -> dairo_core::Result<SecretConfig> {
        Ok(self.0.clone())
    }
}

fn settings(base_url: &str) -> ModelSettings {
    ModelSettings {
        name: "configured/model".to_string(),
        base_url: base_url.to_string(),
        ..ModelSettings::default()
    }
}

#[tokio::test]
async fn test_provider_without_credential_is_config_error() {
    let provider = OpenRouterAgentProvider::new(
        Arc::new(FixedSecrets(SecretConfig::default())),
        settings("http://127.0.0.1:1/v1"),
    )
    .unwrap();

    let err = provider.agent().await.err().unwrap();

    assert!(err.is_config());
    assert_eq!(err.to_string(), "OpenRouter API key not configured.");
}

#[tokio::test]
async fn test_provider_builds_agent_from_settings_and_credential() {
    let (base_url, seen) = spawn_stub(StatusCode::OK, completion("done")).await;
    let secrets = SecretConfig {
        openrouter: Some(OpenRouterSecret {
            api_key: "sk-or-provider".to_string(),
            model_name: None,
        }),
    };
    let provider =
        OpenRouterAgentProvider::new(Arc::new(FixedSecrets(secrets)), settings(&base_url)).unwrap();

    let agent = provider.agent().await.unwrap();
    assert_eq!(agent.model(), "configured/model");
    assert_eq!(agent.complete("hi").await.unwrap(), "done");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer sk-or-provider"));
    assert_eq!(seen[0].body["model"], json!("configured/model"));
}

#[tokio::test]
async fn test_secret_model_name_overrides_settings() {
    let secrets = SecretConfig {
        openrouter: Some(OpenRouterSecret {
            api_key: "k".to_string(),
            model_name: Some("openai/gpt-4o".to_string()),
        }),
    };
    let provider = OpenRouterAgentProvider::new(
        Arc::new(FixedSecrets(secrets)),
        settings("http://127.0.0.1:1/v1"),
    )
    .unwrap();

    assert_eq!(provider.agent().await.unwrap().model(), "openai/gpt-4o");
}

#[tokio::test]
async fn test_blank_secret_model_name_keeps_configured_model() {
    let (base_url, seen) = spawn_stub(StatusCode::OK, completion("done")).await;
    let secrets = SecretConfig {
        openrouter: Some(OpenRouterSecret {
            api_key: "k".to_string(),
            model_name: Some("  ".to_string()),
        }),
    };
    let provider =
        OpenRouterAgentProvider::new(Arc::new(FixedSecrets(secrets)), settings(&base_url)).unwrap();

    let agent = provider.agent().await.unwrap();
    assert_eq!(agent.model(), "configured/model");
    agent.complete("hi").await.unwrap();

    assert_eq!(seen.lock().unwrap()[0].body["model"], json!("configured/model"));
}

async fn slow_completion() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(completion("too late"))
}

#[tokio::test]
async fn test_provider_agents_share_the_configured_client() {
    let app = Router::new().route("/v1/chat/completions", post(slow_completion));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let secrets = SecretConfig {
        openrouter: Some(OpenRouterSecret {
            api_key: "k".to_string(),
            model_name: None,
        }),
    };
    let settings = ModelSettings {
        timeout_secs: 1,
        ..settings(&format!("http://{}/v1", addr))
    };
    let provider = OpenRouterAgentProvider::new(Arc::new(FixedSecrets(secrets)), settings).unwrap();

    // Only the provider's client carries the one second timeout
    let started = Instant::now();
    let err = provider.agent().await.unwrap().complete("hi").await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(err.upstream_status_code(), None);
    assert!(started.elapsed() < Duration::from_secs(4));
}
