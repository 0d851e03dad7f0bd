//! HTTP-level behavior of the discovery client against a mock backend.

use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;

use reelseer_discovery::{
    DiscoveryClient, DiscoveryConfig, NoSession, SearchState, SharedSession,
};
use reelseer_model::{MediaKind, PosterSize};

fn client_for(server: &mockito::ServerGuard) -> DiscoveryClient {
    let config = DiscoveryConfig {
        base_url: format!("{}/jellyseerr", server.url()),
        ..DiscoveryConfig::default()
    };
    DiscoveryClient::new(config, Arc::new(NoSession))
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn check_status_reports_connected() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/jellyseerr/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"connected": true}"#)
        .create_async()
        .await;

    let status = client_for(&server).check_status().await;

    mock.assert_async().await;
    assert!(status.connected);
    assert_eq!(status.error, None);
}

#[tokio::test]
async fn check_status_absorbs_http_failure() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/jellyseerr/status")
        .with_status(503)
        .create_async()
        .await;

    let status = client_for(&server).check_status().await;

    assert!(!status.connected);
    assert_eq!(status.error.as_deref(), Some("HTTP 503: Service Unavailable"));
}

#[tokio::test]
async fn search_sends_query_params_without_token_when_anonymous() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/jellyseerr/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "dune messiah".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .match_header("x-emby-token", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [
                    {"id": 1, "title": "Dune Messiah", "mediaType": "movie",
                     "posterPath": "/dm.jpg", "voteAverage": 7.3},
                ],
                "page": 1,
                "totalPages": 1,
                "totalResults": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = client_for(&server).search("dune messiah", 1).await;

    mock.assert_async().await;
    let page = page.expect("successful search yields a page");
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].display_title(), "Dune Messiah");
}

#[tokio::test]
async fn search_resolves_none_on_http_500() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/jellyseerr/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    assert_eq!(client_for(&server).search("anything", 1).await, None);
}

#[tokio::test]
async fn search_resolves_none_on_malformed_body() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/jellyseerr/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    assert_eq!(client_for(&server).search("anything", 1).await, None);
}

#[tokio::test]
async fn request_media_posts_wire_body() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/jellyseerr/request")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"mediaType": "movie", "mediaId": 603})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let outcome = client_for(&server)
        .request_media(MediaKind::Movie, 603)
        .await;

    mock.assert_async().await;
    assert!(outcome.success);
    assert_eq!(outcome.error, None);
}

#[tokio::test]
async fn request_media_folds_http_failure_into_outcome() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/jellyseerr/request")
        .with_status(500)
        .create_async()
        .await;

    let outcome = client_for(&server).request_media(MediaKind::Tv, 1399).await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.error.as_deref(),
        Some("HTTP 500: Internal Server Error")
    );
}

#[tokio::test]
async fn session_token_is_read_fresh_per_call() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    let session = SharedSession::with_token("secret-1");
    let config = DiscoveryConfig {
        base_url: format!("{}/jellyseerr", server.url()),
        ..DiscoveryConfig::default()
    };
    let client = DiscoveryClient::new(config, Arc::new(session.clone()));

    let with_token = server
        .mock("GET", "/jellyseerr/status")
        .match_header("x-emby-token", "secret-1")
        .with_status(200)
        .with_body(r#"{"connected": true}"#)
        .create_async()
        .await;
    assert!(client.check_status().await.connected);
    with_token.assert_async().await;

    // Logging out between calls must drop the header on the next one.
    session.clear();
    let without_token = server
        .mock("GET", "/jellyseerr/status")
        .match_header("x-emby-token", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"connected": true}"#)
        .create_async()
        .await;
    assert!(client.check_status().await.connected);
    without_token.assert_async().await;
}

#[tokio::test]
async fn search_state_over_live_client_bounds_results_to_twelve() {
    init_logs();
    let mut server = mockito::Server::new_async().await;
    let results: Vec<_> = (0..20)
        .map(|id| {
            json!({"id": id, "title": format!("Movie {id}"), "mediaType": "movie",
                   "voteAverage": 6.0})
        })
        .collect();
    server
        .mock("GET", "/jellyseerr/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"results": results, "page": 1, "totalPages": 2, "totalResults": 20})
                .to_string(),
        )
        .create_async()
        .await;

    let state = SearchState::new(Arc::new(client_for(&server)));
    state.set_query("movie", true).await;

    let session = state.snapshot();
    assert_eq!(session.results.len(), 12);
    assert!(!session.loading);
    assert_eq!(session.error, None);
}

#[test]
fn poster_url_matches_cdn_convention() {
    let config = DiscoveryConfig::default();
    let client = DiscoveryClient::new(config, Arc::new(NoSession));
    assert_eq!(
        client.poster_url(Some("/abc.jpg"), PosterSize::default()),
        Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string())
    );
    assert_eq!(client.poster_url(None, PosterSize::default()), None);
}
