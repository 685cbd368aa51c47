// SPDX-License-Identifier: MPL-2.0
//! Gallery API client against a local mock server.

use iced_gallery::config::ApiConfig;
use iced_gallery::error::GalleryError;
use iced_gallery::gallery::client::download_bytes;
use iced_gallery::gallery::{FetchKind, GallerySource, HttpGallerySource, PaginationFetcher};
use iced_gallery::network::NetworkMonitor;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: Some(format!("{}/images", server.uri())),
        api_key: Some("secret".to_string()),
        event_id: Some("evt-42".to_string()),
        request_timeout_secs: Some(5),
    }
}

fn source(server: &MockServer) -> HttpGallerySource {
    HttpGallerySource::new(&api(server), NetworkMonitor::new()).expect("client")
}

fn entries(range: std::ops::Range<usize>) -> serde_json::Value {
    let list: Vec<_> = range
        .map(|n| {
            json!({
                "id": n + 1,
                "high_url": format!("https://img.test/full/{n}.jpg"),
                "med_url": format!("https://img.test/med/{n}.jpg"),
                "name": format!("Photo {n}"),
                "width": 800,
                "height": 600,
            })
        })
        .collect();
    json!({ "data": { "image_list": list } })
}

#[tokio::test]
async fn page_request_carries_event_and_paging_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images"))
        .and(query_param("event_id", "evt-42"))
        .and(query_param("key", "secret"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .and(query_param("order_by", "2"))
        .and(query_param("order_asc", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(0..3)))
        .expect(1)
        .mount(&server)
        .await;

    let page = source(&server).fetch_page(2, 10).await.expect("page");

    assert_eq!(page.records.len(), 3);
    assert_eq!(page.source_len, 3);
    let first = &page.records[0];
    assert!(first.id.starts_with("1_0_"));
    assert_eq!(first.url, "https://img.test/full/0.jpg");
    assert_eq!(first.thumbnail_url.as_deref(), Some("https://img.test/med/0.jpg"));
    assert_eq!(first.title.as_deref(), Some("Photo 0"));
    assert_eq!((first.width, first.height), (Some(800), Some(600)));
}

#[tokio::test]
async fn entries_without_url_are_dropped_but_counted() {
    let server = MockServer::start().await;
    let body = json!({
        "data": { "image_list": [
            { "id": 1, "img_url": "https://img.test/a.jpg" },
            { "id": 2, "name": "no picture" },
        ]}
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let page = source(&server).fetch_page(0, 40).await.expect("page");
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.source_len, 2);
}

#[tokio::test]
async fn missing_image_list_is_an_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let page = source(&server).fetch_page(0, 40).await.expect("page");
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn server_errors_map_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(0, 40).await.unwrap_err();
    assert_eq!(err, GalleryError::HttpStatus(503));
    assert_eq!(err.i18n_key(), "error-gallery-server-unavailable");
}

#[tokio::test]
async fn unauthorized_is_reported_as_such() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(0, 40).await.unwrap_err();
    assert_eq!(err.i18n_key(), "error-gallery-unauthorized");
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(0, 40).await.unwrap_err();
    assert!(matches!(err, GalleryError::MalformedResponse(_)));
}

#[tokio::test]
async fn image_list_of_wrong_type_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "image_list": "x" } })),
        )
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(0, 40).await.unwrap_err();
    assert!(matches!(err, GalleryError::MalformedResponse(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(entries(0..1))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client");
    let source = HttpGallerySource::with_client(client, &api(&server), NetworkMonitor::new());

    let err = source.fetch_page(0, 40).await.unwrap_err();
    assert_eq!(err, GalleryError::Timeout);
    assert!(err.is_transient());
}

#[tokio::test]
async fn fetcher_pages_through_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(0..4)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(4..6)))
        .mount(&server)
        .await;

    let source = source(&server);
    let mut fetcher = PaginationFetcher::with_page_size(4);

    assert!(fetcher.load(FetchKind::Initial, &source).await);
    assert_eq!(fetcher.records().len(), 4);
    assert!(fetcher.has_next_page());

    assert!(fetcher.load(FetchKind::More, &source).await);
    assert_eq!(fetcher.records().len(), 6);
    assert!(!fetcher.has_next_page());

    // A short page ends the list.
    assert!(!fetcher.load(FetchKind::More, &source).await);
}

#[tokio::test]
async fn image_bytes_are_downloaded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/full/1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/full/2.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let network = NetworkMonitor::new();

    let bytes = download_bytes(&client, &network, &format!("{}/full/1.jpg", server.uri()))
        .await
        .expect("bytes");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);

    let missing = download_bytes(&client, &network, &format!("{}/full/2.jpg", server.uri())).await;
    assert_eq!(missing, Err(GalleryError::HttpStatus(404)));
}
