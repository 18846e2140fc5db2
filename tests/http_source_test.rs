use poe2_data_updater::common::error::UpdaterError;
use poe2_data_updater::{DataSource, ReqwestSource};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Client that ignores any proxy settings in the environment
fn local_source() -> ReqwestSource {
    ReqwestSource::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

/// Serve a single canned HTTP response on an ephemeral port, returning its base URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_json_decodes_body_in_order() {
    let base = serve_once("200 OK", r#"{"b": {"id": "second-key"}, "a": {"id": "first-key"}}"#).await;

    let value = local_source()
        .fetch_json(&format!("{}/mods.json", base))
        .await
        .unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(value["a"], json!({ "id": "first-key" }));
}

#[tokio::test]
async fn test_fetch_json_rejects_error_status() {
    let base = serve_once("404 Not Found", r#"{"error": "missing"}"#).await;
    let url = format!("{}/base_items.json", base);

    let err = local_source().fetch_json(&url).await.unwrap_err();
    match err {
        UpdaterError::Status { url: failed, status } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_json_rejects_malformed_body() {
    let base = serve_once("200 OK", "<html>not json</html>").await;

    let err = local_source()
        .fetch_json(&format!("{}/mods.json", base))
        .await
        .unwrap_err();
    assert!(matches!(err, UpdaterError::Json(_)));
}

#[tokio::test]
async fn test_fetch_json_transport_failure() {
    // Bind then drop to get a port nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = local_source()
        .fetch_json(&format!("http://{}/mods.json", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, UpdaterError::Http(_)));
}
