//! Tests for the search client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use std::time::Duration;
use tunebox_search::{SearchClient, SearchConfig, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SearchClient {
    SearchClient::new(SearchConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(SearchClient::new(SearchConfig::new("http://localhost:8080")).is_ok());
        assert!(SearchClient::new(SearchConfig::new("https://music.example.com")).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        match SearchClient::new(SearchConfig::new("")) {
            Err(SearchError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        assert!(matches!(
            SearchClient::new(SearchConfig::new("localhost:8080")),
            Err(SearchError::InvalidUrl(_))
        ));
    }
}

// =============================================================================
// Search Tests
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn test_search_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("term", "daft punk"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "trackName": "One More Time",
                    "artistName": "Daft Punk",
                    "previewUrl": "https://audio.example.com/omt.m4a"
                },
                {
                    "trackName": "Digital Love",
                    "artistName": "Daft Punk",
                    "previewUrl": "https://audio.example.com/dl.m4a"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server).search("daft punk").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_line(), "One More Time - Daft Punk");

        let track = results[1].clone().into_track();
        assert_eq!(track.name, "Digital Love");
        assert_eq!(track.source.as_src(), "https://audio.example.com/dl.m4a");
    }

    #[tokio::test]
    async fn test_malformed_hits_do_not_spoil_the_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "trackName": "No Preview",
                    "artistName": "Someone",
                    "previewUrl": null
                },
                {
                    "trackName": null,
                    "artistName": null,
                    "previewUrl": "https://audio.example.com/anon.m4a"
                },
                {
                    "trackName": "Around the World"
                }
            ])))
            .mount(&server)
            .await;

        let results = client_for(&server).search("mixed").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_line(), "Unknown Track - Unknown Artist");
        assert_eq!(results[0].preview_url, "https://audio.example.com/anon.m4a");
    }

    #[tokio::test]
    async fn test_special_characters_are_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("term", "AC/DC & friends"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server).search("AC/DC & friends").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_blank_term_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let results = client_for(&server).search("   ").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&server)
            .await;

        match client_for(&server).search("anything").await {
            Err(SearchError::Status { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).search("anything").await;
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = SearchClient::new(
            SearchConfig::new(server.uri()).with_timeout(Duration::from_millis(100)),
        )
        .unwrap();

        assert!(matches!(
            client.search("slow").await,
            Err(SearchError::Request(_))
        ));
    }
}
