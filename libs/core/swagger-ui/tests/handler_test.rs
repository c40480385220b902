//! Handler tests for the Swagger UI adapter
//!
//! These drive the handler through an axum router with `oneshot()`:
//! - index page rendering and content types
//! - the doc.json endpoint
//! - delegation to the static bundle
//! - the disabling wrapper

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum_swagger_ui::config::{deep_linking, doc_expansion, dom_id, filter, prefix, url};
use axum_swagger_ui::{
    Config, Configurator, DocExpansion, DocFn, RegistryError, StaticAssets, StaticDoc,
    SwaggerHandler,
};
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

const DOC: &str = r#"{"swagger":"2.0","info":{"title":"Swagger Example API","version":"1.0"}}"#;

fn assets() -> StaticAssets {
    StaticAssets::dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dist"))
}

fn app(handler: &SwaggerHandler) -> Router {
    Router::new().merge(handler.router())
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_index_variants_render_page() {
    let handler = SwaggerHandler::build(
        assets(),
        StaticDoc::new(DOC),
        &[
            &url("http://localhost:8080/swagger/doc.json"),
            &deep_linking(false),
            &dom_id("#api-docs"),
            &filter(false),
        ],
    )
    .unwrap();
    let app = app(&handler);

    for uri in ["/swagger/index.html", "/swagger/", "/swagger"] {
        let response = get(&app, uri).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(content_type(&response), Some("text/html; charset=utf-8"), "{uri}");

        let body = body_string(response).await;
        assert!(body.contains(r#"url: "http://localhost:8080/swagger/doc.json","#));
        assert!(body.contains(r##"dom_id: "#api-docs","##));
        assert!(body.contains("deepLinking: false,"));
        assert!(body.contains("filter: false"));
        assert!(body.contains(r#"src="/swagger/swagger-ui-bundle.js""#));
    }
}

#[tokio::test]
async fn test_doc_json_returns_registry_text_verbatim() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();
    let app = app(&handler);

    let response = get(&app, "/swagger/doc.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), Some("application/json"));
    assert_eq!(body_string(response).await, DOC);
}

#[tokio::test]
async fn test_doc_json_registry_failure_returns_500() {
    let registry = DocFn::new(|| Err(RegistryError::Missing("swagger".to_string())));
    let handler = SwaggerHandler::new(assets(), registry).unwrap();
    let app = app(&handler);

    let response = get(&app, "/swagger/doc.json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_static_assets_are_delegated_with_forced_content_types() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();
    let app = app(&handler);

    let css = get(&app, "/swagger/swagger-ui.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(content_type(&css), Some("text/css; charset=utf-8"));
    assert_eq!(body_string(css).await, "body { margin: 0; }\n");

    let js = get(&app, "/swagger/swagger-ui-bundle.js").await;
    assert_eq!(js.status(), StatusCode::OK);
    assert_eq!(content_type(&js), Some("application/javascript"));

    let png = get(&app, "/swagger/favicon-16x16.png").await;
    assert_eq!(png.status(), StatusCode::OK);
    assert_eq!(content_type(&png), Some("image/png"));
}

#[tokio::test]
async fn test_unknown_suffix_gets_no_forced_content_type() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();
    let app = app(&handler);

    let response = get(&app, "/swagger/LICENSE").await;

    assert_eq!(response.status(), StatusCode::OK);
    let forced = [
        "text/html; charset=utf-8",
        "text/css; charset=utf-8",
        "application/javascript",
        "application/json",
    ];
    assert!(!forced.contains(&content_type(&response).unwrap_or_default()));
}

#[tokio::test]
async fn test_unknown_asset_returns_delegate_404() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();
    let app = app(&handler);

    assert_eq!(get(&app, "/swagger/notfound").await.status(), StatusCode::NOT_FOUND);

    let missing_js = get(&app, "/swagger/missing.js").await;
    assert_eq!(missing_js.status(), StatusCode::NOT_FOUND);
    assert_ne!(content_type(&missing_js), Some("application/javascript"));
}

#[tokio::test]
async fn test_only_get_is_routed() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/swagger/index.html")
        .body(Body::empty())
        .unwrap();
    let response = app(&handler).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_prefix() {
    let handler =
        SwaggerHandler::build(assets(), StaticDoc::new(DOC), &[&prefix("/docs")]).unwrap();
    let app = app(&handler);

    assert_eq!(get(&app, "/docs").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/docs/doc.json").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/docs/swagger-ui.css").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/index.html").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_disabled_handler_returns_404_everywhere() {
    let handler = SwaggerHandler::disabling(true, assets(), StaticDoc::new(DOC), &[]).unwrap();
    assert!(handler.is_disabled());
    let app = app(&handler);

    for uri in [
        "/swagger",
        "/swagger/index.html",
        "/swagger/doc.json",
        "/swagger/favicon-16x16.png",
        "/swagger/notfound",
    ] {
        assert_eq!(get(&app, uri).await.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_enabled_disabling_handler_behaves_like_handler() {
    let handler = SwaggerHandler::disabling(false, assets(), StaticDoc::new(DOC), &[]).unwrap();
    let app = app(&handler);

    assert_eq!(get(&app, "/swagger/index.html").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/doc.json").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/favicon-16x16.png").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/notfound").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_environment_is_read_once_at_construction() {
    const KEY: &str = "SWAGGER_DISABLE_HANDLER_TEST";

    let disabled = temp_env::with_var(KEY, Some("true"), || {
        SwaggerHandler::disabling_from_env(KEY, assets(), StaticDoc::new(DOC), &[]).unwrap()
    });
    let enabled = temp_env::with_var_unset(KEY, || {
        SwaggerHandler::disabling_from_env(KEY, assets(), StaticDoc::new(DOC), &[]).unwrap()
    });

    // The variable is restored by now; neither handler notices.
    assert!(disabled.is_disabled());
    assert!(!enabled.is_disabled());

    assert_eq!(
        get(&app(&disabled), "/swagger/index.html").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app(&enabled), "/swagger/index.html").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_empty_env_value_does_not_disable() {
    const KEY: &str = "SWAGGER_DISABLE_EMPTY_TEST";

    let handler = temp_env::with_var(KEY, Some(""), || {
        SwaggerHandler::disabling_from_env(KEY, assets(), StaticDoc::new(DOC), &[]).unwrap()
    });

    assert!(!handler.is_disabled());
}

#[tokio::test]
async fn test_shared_assets_keep_per_handler_prefix() {
    let shared = assets();
    let first =
        SwaggerHandler::build(shared.clone(), StaticDoc::new(DOC), &[&prefix("/first")]).unwrap();
    let second =
        SwaggerHandler::build(shared.clone(), StaticDoc::new(DOC), &[&prefix("/second")]).unwrap();

    // The descriptor itself is never rewritten.
    assert_eq!(shared.prefix(), "");

    let app = Router::new().merge(first.router()).merge(second.router());

    assert_eq!(get(&app, "/first/swagger-ui.css").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/second/swagger-ui.css").await.status(), StatusCode::OK);

    let first_page = body_string(get(&app, "/first/index.html").await).await;
    assert!(first_page.contains(r#"href="/first/swagger-ui.css""#));
}

#[tokio::test]
async fn test_last_configurator_wins() {
    let whole = Config {
        doc_expansion: DocExpansion::None.into(),
        ..Config::default()
    };
    let configurators: [&dyn Configurator; 4] = [
        &url("first.json"),
        &doc_expansion(DocExpansion::Full),
        &whole,
        &url("second.json"),
    ];

    let handler = SwaggerHandler::build(assets(), StaticDoc::new(DOC), &configurators).unwrap();
    let config = handler.config().unwrap();
    assert_eq!(config.url, "second.json");
    assert_eq!(config.doc_expansion, "none");

    let body = body_string(get(&app(&handler), "/swagger/").await).await;
    assert!(body.contains(r#"url: "second.json","#));
    assert!(body.contains(r#"docExpansion: "none","#));
}

#[tokio::test]
async fn test_relative_prefix_uses_delegate_prefix() {
    let handler = SwaggerHandler::build(
        assets().with_prefix("/swagger"),
        StaticDoc::new(DOC),
        &[&prefix(".")],
    )
    .unwrap();
    assert_eq!(handler.config().unwrap().prefix, ".");

    let app = Router::new().route_service("/{*path}", handler.clone());

    // No prefix is trimmed, so only root-level paths reach the page and doc.
    let index = get(&app, "/index.html").await;
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(content_type(&index), Some("text/html; charset=utf-8"));
    assert!(body_string(index).await.contains(r#"href="./swagger-ui.css""#));

    let doc = get(&app, "/doc.json").await;
    assert_eq!(doc.status(), StatusCode::OK);
    assert_eq!(content_type(&doc), Some("application/json"));

    // Assets go through the delegate's own prefix, and the content type
    // pass sees the same untrimmed path.
    let css = get(&app, "/swagger/swagger-ui.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(content_type(&css), Some("text/css; charset=utf-8"));

    assert_eq!(get(&app, "/swagger/index.html").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/swagger-ui.css").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_prefix_is_relative() {
    let handler = SwaggerHandler::build(assets(), StaticDoc::new(DOC), &[&prefix("")]).unwrap();
    let app = app(&handler);

    assert_eq!(get(&app, "/").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/doc.json").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger-ui.css").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_handler_is_a_tower_service() {
    let handler = SwaggerHandler::new(assets(), StaticDoc::new(DOC)).unwrap();

    let request = Request::builder()
        .uri("/swagger/doc.json")
        .body(Body::empty())
        .unwrap();
    let response = handler.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, DOC);
}

#[tokio::test]
async fn test_prefix_without_leading_or_with_trailing_slash() {
    for raw in ["swagger", "/swagger/"] {
        let handler =
            SwaggerHandler::build(assets(), StaticDoc::new(DOC), &[&prefix(raw)]).unwrap();
        assert_eq!(handler.config().unwrap().prefix, "/swagger", "{raw}");
        let app = app(&handler);

        let index = get(&app, "/swagger/index.html").await;
        assert_eq!(index.status(), StatusCode::OK, "{raw}");
        let body = body_string(index).await;
        assert!(body.contains(r#"href="/swagger/swagger-ui.css""#), "{raw}");

        assert_eq!(get(&app, "/swagger").await.status(), StatusCode::OK, "{raw}");
        assert_eq!(get(&app, "/swagger/doc.json").await.status(), StatusCode::OK, "{raw}");
        assert_eq!(
            get(&app, "/swagger/swagger-ui.css").await.status(),
            StatusCode::OK,
            "{raw}"
        );
    }
}

#[tokio::test]
async fn test_missing_bundle_directory_still_serves_page() {
    let missing = StaticAssets::dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/absent"));
    assert!(!missing.is_available());

    let handler = SwaggerHandler::new(missing, StaticDoc::new(DOC)).unwrap();
    let app = app(&handler);

    assert_eq!(get(&app, "/swagger/index.html").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/doc.json").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/swagger/swagger-ui.css").await.status(), StatusCode::NOT_FOUND);
}
