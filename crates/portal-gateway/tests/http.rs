use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use clap::Parser;
use portal_core::{Namespace, PathMapping};
use portal_gateway::handlers::{home_page, HOME_PAGE};
use portal_gateway::{startup, App, AppState, Cli};
use portal_redirector::FallbackChain;
use portal_storage::{InMemoryRepository, Repository};
use tempfile::TempDir;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn demo_app() -> Router {
    let cli = Cli::try_parse_from(["portal", "--storage", "in-memory", "--seed-demo"]).unwrap();
    App::router(startup::build_state(&cli).await.unwrap())
}

#[tokio::test]
async fn registered_paths_redirect_with_found() {
    let app = demo_app().await;

    let response = get(&app, "/golang").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://github.com/hauntarl/golang");

    let response = get(&app, "/yaml").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "https://pkg.go.dev/gopkg.in/yaml.v2?tab=doc"
    );

    let response = get(&app, "/json_intro").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://blog.golang.org/json");
}

#[tokio::test]
async fn unregistered_paths_get_the_home_page() {
    let app = demo_app().await;

    let response = get(&app, "/missing").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, HOME_PAGE);

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_is_reserved() {
    let app = demo_app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn files_override_demo_data_on_disk() {
    let dir = TempDir::new().unwrap();
    let yaml = dir.path().join("urls.yaml");
    let json = dir.path().join("urls.json");
    fs::write(
        &yaml,
        "- path: /golang\n  url: https://go.dev\n- path: /shared\n  url: https://from-yaml.example\n",
    )
    .unwrap();
    fs::write(
        &json,
        r#"[{"path": "/shared", "url": "https://from-json.example"}]"#,
    )
    .unwrap();

    let db_path = dir.path().join("urlshort.db");
    let cli = Cli::try_parse_from([
        "portal",
        "--seed-demo",
        "--db-path",
        db_path.to_str().unwrap(),
        "--yaml",
        yaml.to_str().unwrap(),
        "--json",
        json.to_str().unwrap(),
    ])
    .unwrap();
    let app = App::router(startup::build_state(&cli).await.unwrap());

    let response = get(&app, "/golang").await;
    assert_eq!(location(&response), "https://go.dev");

    let response = get(&app, "/shared").await;
    assert_eq!(location(&response), "https://from-json.example");

    let response = get(&app, "/gophercises").await;
    assert_eq!(
        location(&response),
        "https://courses.calhoun.io/courses/cor_gophercises"
    );
}

#[tokio::test]
async fn missing_input_file_aborts_startup() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.yaml");
    let cli = Cli::try_parse_from([
        "portal",
        "--storage",
        "in-memory",
        "--yaml",
        absent.to_str().unwrap(),
    ])
    .unwrap();

    assert!(startup::build_state(&cli).await.is_err());
}

#[tokio::test]
async fn storage_defects_become_server_errors() {
    // the namespace was never created in this store
    let chain = FallbackChain::terminal(home_page)
        .with_mapping(Arc::new(InMemoryRepository::new()), Namespace::default());
    let app = App::router(AppState::new(chain));

    let response = get(&app, "/golang").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unterminated_chain_still_answers() {
    let store = InMemoryRepository::new();
    store.ensure_namespace(&Namespace::default()).await.unwrap();
    store
        .bulk_put(&Namespace::default(), &[PathMapping::new("/a", "https://a.example")])
        .await
        .unwrap();
    let chain = FallbackChain::unterminated().with_mapping(Arc::new(store), Namespace::default());
    let app = App::router(AppState::new(chain));

    let response = get(&app, "/a").await;
    assert_eq!(location(&response), "https://a.example");

    let response = get(&app, "/b").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, HOME_PAGE);
}

#[tokio::test]
async fn encoded_request_paths_match_decoded_mappings() {
    let store = InMemoryRepository::new();
    store.ensure_namespace(&Namespace::default()).await.unwrap();
    store
        .bulk_put(
            &Namespace::default(),
            &[
                PathMapping::new("/café", "https://cafe.example"),
                PathMapping::new("/a b", "https://space.example"),
            ],
        )
        .await
        .unwrap();
    let chain = FallbackChain::terminal(home_page).with_mapping(Arc::new(store), Namespace::default());
    let app = App::router(AppState::new(chain));

    let response = get(&app, "/caf%C3%A9").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://cafe.example");

    let response = get(&app, "/a%20b").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://space.example");
}
