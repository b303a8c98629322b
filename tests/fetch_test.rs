//! HTTP取得テスト
//!
//! モックサーバーに対して `/api/explore` の応答パターンを検証

use disease_explorer::error::ExplorerError;
use disease_explorer::fetcher::{load_explorer, HttpSource};
use disease_explorer::terminal::Spinner;
use disease_explorer_common::{DiseaseSource, ExplorerConfig, FetchError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn source_for(server: &MockServer) -> HttpSource {
    let config = ExplorerConfig::default()
        .with_api_base_url(&server.uri())
        .expect("mock server uri");
    HttpSource::new(config.explore_url())
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/explore"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// `{success, data}` 形式
#[tokio::test]
async fn test_fetch_wrapped_response() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "data": [
                {"crop_name": "Wheat", "disease_name": "Rust", "disease_id": 1},
                {"crop_name": "Corn", "disease_name": "Blight", "disease_id": 2}
            ]
        })),
    )
    .await;

    let records = source_for(&server).await.fetch_diseases().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].disease_id, Some(1));
    assert_eq!(records[1].crop_name.as_deref(), Some("Corn"));
}

/// 配列そのもの
#[tokio::test]
async fn test_fetch_bare_array() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([{"crop_name": "Rice"}])),
    )
    .await;

    let records = source_for(&server).await.fetch_diseases().await.unwrap();
    assert_eq!(records.len(), 1);
}

/// HTTP 500 はボディに関係なくサーバーエラー
#[tokio::test]
async fn test_fetch_server_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"success": true, "data": []})),
    )
    .await;

    let error = source_for(&server).await.fetch_diseases().await.unwrap_err();
    assert_eq!(error, FetchError::Server(500));
    assert_eq!(error.to_string(), "Server Error: 500");
}

#[tokio::test]
async fn test_fetch_not_found() {
    let server = MockServer::start().await;

    let error = source_for(&server).await.fetch_diseases().await.unwrap_err();
    assert_eq!(error, FetchError::Server(404));
}

/// 形の合わない応答
#[tokio::test]
async fn test_fetch_unsuccessful_body() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"error": "Query execution failed"})),
    )
    .await;

    let error = source_for(&server).await.fetch_diseases().await.unwrap_err();
    assert_eq!(error, FetchError::unsuccessful());
}

/// JSONでないボディ
#[tokio::test]
async fn test_fetch_non_json_body() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let error = source_for(&server).await.fetch_diseases().await.unwrap_err();
    assert!(matches!(error, FetchError::InvalidResponse(_)));
}

/// 接続できないサーバー
#[tokio::test]
async fn test_fetch_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let source = HttpSource::new(format!("http://127.0.0.1:{}/api/explore", port));
    let error = source.fetch_diseases().await.unwrap_err();
    assert!(matches!(error, FetchError::Network(_)));
}

/// CLI用の読み込み: 成功時は描画済み
#[tokio::test]
async fn test_load_explorer_renders_records() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"crop_name": "Wheat", "disease_name": "Rust"}
        ])),
    )
    .await;

    let config = ExplorerConfig::default().with_api_base_url(&server.uri()).unwrap();
    let explorer = load_explorer(config, Spinner::hidden()).await.unwrap();

    assert_eq!(explorer.state().all().len(), 1);
    assert_eq!(explorer.surface().screen().rendered_cards().len(), 1);
    assert!(explorer.surface().error_message().is_none());
}

/// CLI用の読み込み: 失敗は終了せずにエラーとして返る
#[tokio::test]
async fn test_load_explorer_propagates_fetch_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let config = ExplorerConfig::default().with_api_base_url(&server.uri()).unwrap();
    let Err(err) = load_explorer(config, Spinner::hidden()).await else {
        panic!("fetch failure should be returned as an error");
    };

    assert!(matches!(err, ExplorerError::Fetch(FetchError::Server(500))));
    assert!(err.to_string().contains("Server Error: 500"));
}
