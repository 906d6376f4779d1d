mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use common::{titles, NotifierCall, RecordingNotifier};
use moviegrid::catalog::{FetchError, HttpMovieSource, MovieSource};
use moviegrid::config::SourceConfig;
use moviegrid::ui::browser::{LoadStatus, MovieBrowser};

fn source_for(mock: &MockCatalog, timeout_seconds: u64) -> HttpMovieSource {
    HttpMovieSource::new(&SourceConfig {
        url: mock.url(),
        request_timeout_seconds: timeout_seconds,
    })
    .expect("client builds")
}

const THREE_MOVIES: &str = r#"[
    {"title": "Inception", "director": "Christopher Nolan", "genre": "Sci-Fi", "rating": "8.8",
     "release_date": "2010-07-16", "duration": 148, "tags": ["dreams", "heist"],
     "cast": ["Leonardo DiCaprio", "Elliot Page"]},
    {"title": "The Matrix", "genre": "Action", "rating": 8.7, "tags": ["cult"]},
    {"title": "Heat"}
]"#;

#[tokio::test]
async fn successful_fetch_fills_first_page() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::json(THREE_MOVIES)).await;

    let mut browser = MovieBrowser::new();
    let mut notifier = RecordingNotifier::default();
    browser.initialize(&source_for(&mock, 5), &mut notifier).await;

    let state = browser.state();
    assert_eq!(state.load, LoadStatus::Loaded);
    assert_eq!(state.visible_movies.len(), 3);
    assert_eq!(state.current_page, 1);
    assert_eq!(titles(&state.all_movies), ["Inception", "The Matrix", "Heat"]);
    assert_eq!(
        notifier.calls,
        [NotifierCall::ShowLoading, NotifierCall::HideLoading]
    );
    assert_eq!(mock.requested_paths().await, ["/movies.json"]);
}

#[tokio::test]
async fn server_error_notifies_once_and_leaves_grid_empty() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::status(500)).await;

    let mut browser = MovieBrowser::new();
    let mut notifier = RecordingNotifier::default();
    browser.initialize(&source_for(&mock, 5), &mut notifier).await;

    assert_eq!(
        notifier.errors(),
        ["Failed to fetch: HTTP status failed 500"]
    );
    assert_eq!(notifier.calls[1], NotifierCall::HideLoading);
    assert!(browser.grid().is_empty());
    assert!(browser.pagination().is_empty());
    assert!(matches!(browser.state().load, LoadStatus::Failed { .. }));
    assert_eq!(mock.requested_paths().await.len(), 1, "no retry");
}

#[tokio::test]
async fn malformed_body_is_a_fetch_failure() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::json("<html>not json</html>")).await;

    let result = source_for(&mock, 5).fetch().await;
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn keyed_object_body_is_accepted() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"m1": {"title": "Alien"}, "m2": null, "m3": {"title": "Aliens"}}"#,
    ))
    .await;

    let movies = source_for(&mock, 5).fetch().await.expect("fetch succeeds");
    assert_eq!(titles(&movies), ["Alien", "Aliens"]);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::json("[]").with_delay(2_500)).await;

    let result = source_for(&mock, 1).fetch().await;
    assert!(matches!(result, Err(FetchError::Timeout { seconds: 1 })));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    let source = HttpMovieSource::new(&SourceConfig {
        url: "http://127.0.0.1:1/movies.json".to_string(),
        request_timeout_seconds: 5,
    })
    .unwrap();

    let mut browser = MovieBrowser::new();
    let mut notifier = RecordingNotifier::default();
    browser.initialize(&source, &mut notifier).await;

    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to fetch: "));
    assert!(browser.state().all_movies.is_empty());
}
