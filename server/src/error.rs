use axum::response::{Response, IntoResponse};
use axum::http::{StatusCode, Uri};
use axum::Json;
use serde::Serialize;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    NotFound(Uri),
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorInfo {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(uri) => {
                log::debug!("not found: {uri}");
                (StatusCode::NOT_FOUND, format!("not found: {}", uri.path()))
            }
            AppError::Internal(e) => {
                log::error!("http request error: {e:?}\n{}", e.backtrace());
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:?}"))
            }
        };

        (status, Json(ErrorInfo { message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}

/// Router fallback for paths nothing else matched.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(response: Response) -> String {
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        info["message"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn internal_error_becomes_json_500() {
        let response = AppError::from(anyhow::anyhow!("render failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let message = body_message(response).await;
        assert!(message.starts_with("render failed"), "{message}");
    }

    #[tokio::test]
    async fn not_found_names_path() {
        let uri: Uri = "/missing?x=1".parse().unwrap();
        let response = AppError::NotFound(uri).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_message(response).await, "not found: /missing");
    }
}
