//! `CoreError` 到 HTTP 响应的映射

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use edge_batch_core::CoreError;

/// 包装 [`CoreError`]，赋予其 HTTP 语义
///
/// 未知账户在扇出之前短路为单个 404 错误对象，校验失败为 400，
/// 其余为 500。批内的远端失败不会走到这里，它们已经折叠进
/// 各自的 outcome。
#[derive(Debug)]
pub struct WebError(pub CoreError);

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CoreError> for WebError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.0.to_string() }))
    }
}
