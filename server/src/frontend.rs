//! Serving the page at `/`.
//!
//! By default the root view is rendered on the server for every request.
//! With the `bundle` feature the trunk build of the frontend is embedded in
//! the binary and the browser renders the root view itself.

use std::path::Path;

use axum::extract;
use axum::http::{header, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::error::{AppError, AppResult};

/// Embedded files, keyed by file name.
pub type Files = &'static [(&'static str, &'static [u8])];

pub fn serve(router: axum::Router) -> axum::Router {
    imp::serve(router)
}

#[cfg(not(feature = "bundle"))]
mod imp {
    use axum::response::Html;
    use axum::routing::get;

    use crate::document;

    pub fn serve(router: axum::Router) -> axum::Router {
        router.route("/", get(index_html))
    }

    async fn index_html() -> Html<String> {
        Html(document::render().await)
    }
}

#[cfg(feature = "bundle")]
mod imp {
    mod bundle {
        include!(concat!(env!("OUT_DIR"), "/bundle.rs"));
    }

    pub fn serve(router: axum::Router) -> axum::Router {
        super::bundle_routes(router, bundle::FILES)
    }
}

/// `/` serves `index.html` out of `files`, `/:file` serves the rest.
#[cfg_attr(not(feature = "bundle"), allow(dead_code))]
fn bundle_routes(router: axum::Router, files: Files) -> axum::Router {
    router
        .route("/", get(move |uri: Uri| async move {
            asset_in(files, "index.html", uri)
        }))
        .route("/:file", get(move |extract::Path(name): extract::Path<String>, uri: Uri| async move {
            asset_in(files, &name, uri)
        }))
}

#[cfg_attr(not(feature = "bundle"), allow(dead_code))]
fn asset_in(files: Files, name: &str, uri: Uri) -> AppResult<Response> {
    let Some((_, contents)) = files.iter().find(|(file, _)| *file == name) else {
        return Err(AppError::NotFound(uri));
    };

    let mime = crate::mime::from_path(Path::new(name));
    let content_type = HeaderValue::from_str(mime.as_ref())
        .unwrap_or(HeaderValue::from_static("application/octet-stream"));

    Ok(([(header::CONTENT_TYPE, content_type)], *contents).into_response())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    static FILES: &[(&str, &[u8])] = &[
        ("index.html", b"<!DOCTYPE html><title>bundle</title>"),
        ("helloview-frontend-1a2b_bg.wasm", b"\0asm\x01\0\0\0"),
    ];

    async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = bundle_routes(axum::Router::new(), FILES)
            .oneshot(request)
            .await
            .unwrap();

        let status = response.status();
        let content_type = response.headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_owned());
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn index_served_at_root() {
        let (status, content_type, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert_eq!(body, b"<!DOCTYPE html><title>bundle</title>");
    }

    #[tokio::test]
    async fn wasm_served_with_content_type() {
        let (status, content_type, body) = get("/helloview-frontend-1a2b_bg.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/wasm"));
        assert_eq!(body, b"\0asm\x01\0\0\0");
    }

    #[tokio::test]
    async fn missing_file_is_json_404() {
        let (status, content_type, body) = get("/x.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "not found: /x.js");
    }

    #[test]
    fn lookup_misses_without_index() {
        let uri: Uri = "/".parse().unwrap();
        let result = asset_in(&[], "index.html", uri);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
