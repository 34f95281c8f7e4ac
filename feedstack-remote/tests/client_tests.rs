use feedstack_remote::{ApiClient, RemoteConfig, RemoteError};
use feedstack_types::{OwnerId, Post, PostId};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        base_url: server.uri(),
        ..Default::default()
    }
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn remote_config_default() {
    let cfg = RemoteConfig::default();
    assert_eq!(cfg.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn remote_config_serde_roundtrip() {
    let cfg = RemoteConfig {
        base_url: "http://localhost:8080".to_string(),
        timeout_secs: 5,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let deserialized: RemoteConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.base_url, "http://localhost:8080");
    assert_eq!(deserialized.timeout_secs, 5);
}

// ── Construction ────────────────────────────────────────────────

#[test]
fn client_builds_with_defaults() {
    assert!(ApiClient::with_defaults().is_ok());
}

#[test]
fn client_rejects_invalid_base_url() {
    let config = RemoteConfig {
        base_url: "not a url".to_string(),
        timeout_secs: 30,
    };
    let result = ApiClient::new(config);
    assert!(matches!(result, Err(RemoteError::InvalidConfig(_))));
}

// ── fetch_posts ─────────────────────────────────────────────────

#[tokio::test]
async fn fetch_posts_returns_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "userId": 1, "title": "first", "body": "ignored"},
            {"id": 2, "userId": 2, "title": "second", "body": "ignored"}
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    let posts = client.fetch_posts().await.unwrap();

    assert_eq!(
        posts,
        vec![
            Post::new(PostId::new(1), "first", OwnerId::new(1)),
            Post::new(PostId::new(2), "second", OwnerId::new(2)),
        ]
    );
}

#[tokio::test]
async fn fetch_posts_empty_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    assert!(client.fetch_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_posts_server_error_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    let err = client.fetch_posts().await.unwrap_err();

    assert!(matches!(err, RemoteError::Status { status: 500, .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn fetch_posts_decode_error_on_wrong_shape() {
    let server = MockServer::start().await;

    // An object where a list is expected
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"oops": true})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, RemoteError::Decode(_)));
}

#[tokio::test]
async fn fetch_posts_network_error_when_unreachable() {
    // Port 1 is reserved; nothing accepts connections there.
    let client = ApiClient::new(RemoteConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
    })
    .unwrap();

    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, RemoteError::Network(_)));
}

#[tokio::test]
async fn fetch_posts_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(RemoteConfig {
        base_url: server.uri(),
        timeout_secs: 1,
    })
    .unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, RemoteError::Network(_)));
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(RemoteConfig {
        base_url: format!("{}/", server.uri()),
        timeout_secs: 30,
    })
    .unwrap();
    assert!(client.fetch_posts().await.unwrap().is_empty());
}

// ── fetch_post ──────────────────────────────────────────────────

#[tokio::test]
async fn fetch_post_returns_single_post() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2, "userId": 7, "title": "qui est esse", "body": "ignored"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    let post = client.fetch_post(PostId::new(2)).await.unwrap();

    assert_eq!(post, Post::new(PostId::new(2), "qui est esse", OwnerId::new(7)));
}

#[tokio::test]
async fn fetch_post_not_found_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(mock_config(&server)).unwrap();
    let err = client.fetch_post(PostId::new(99)).await.unwrap_err();

    assert!(matches!(err, RemoteError::Status { status: 404, .. }));
    assert!(err.to_string().contains("404"));
}
