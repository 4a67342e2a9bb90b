//! # エラーレスポンスヘルパー
//!
//! HTTP ステータスコードと [`ErrorResponse`] ボディの組み立てを集約する。
//!
//! 認証失敗は必ずこの境界で 401 に解決する（匿名アクセスへの
//! 暗黙のダウングレードは行わない）。委譲先のエラーはここを通らず、
//! ステータスコードを変更せずにそのまま呼び出し元へ返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reddyfit_shared::ErrorResponse;

/// 未認証レスポンス（401）
///
/// `detail` には診断用のエラーメッセージを含める。
/// 生のトークンを渡してはならない。
pub fn unauthorized_response(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::unauthorized(detail)),
    )
        .into_response()
}

/// サービス利用不可レスポンス（503）
pub fn service_unavailable_response(detail: &str) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::service_unavailable(detail)),
    )
        .into_response()
}

/// 内部エラーレスポンス（500）
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}
