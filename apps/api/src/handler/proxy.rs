//! # 委譲プロキシハンドラ
//!
//! 4 つのルートグループすべてが共有する fallback ハンドラ。
//! ルートグループの業務ロジックは外部コラボレータ（ML エンジン）の責務で
//! あり、ゲートウェイは委譲のみを行う。
//!
//! エンジンのレスポンスはステータスコード・ボディともに変更せずに返す。
//! エンジン自体に到達できない場合のみ、ゲートウェイ自身のエラーとして
//! 503 を返す。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    response::Response,
};
use bytes::Bytes;
use reddyfit_infra::ClaimSet;

use crate::{
    client::EngineClient,
    error::{internal_error_response, service_unavailable_response},
};

/// 委譲ハンドラの状態
#[derive(Clone)]
pub struct ProxyState {
    pub engine: Arc<dyn EngineClient>,
}

/// リクエストを ML エンジンへ転送する
///
/// ネストされたルーター配下のすべてのメソッド・パスを受ける。
/// 認証ゲートを通過したグループでは、検証済みクレームの subject を
/// `X-User-Id` としてエンジンに伝える。
pub async fn forward_to_engine(
    State(state): State<ProxyState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    claims: Option<axum::Extension<Arc<ClaimSet>>>,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let user_id = claims
        .as_ref()
        .and_then(|axum::Extension(claims)| claims.sub());
    let content_type = headers.get(CONTENT_TYPE);

    match state
        .engine
        .forward(method, path_and_query, user_id, content_type, body)
        .await
    {
        Ok(engine_response) => {
            let mut builder = Response::builder().status(engine_response.status);
            if let Some(content_type) = engine_response.content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
            builder
                .body(Body::from(engine_response.body))
                .unwrap_or_else(|_| internal_error_response())
        }
        Err(e) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "engine_forward",
                path = %path_and_query,
                "ML エンジンへの転送に失敗: {}",
                e
            );
            service_unavailable_response("ML エンジンが一時的に利用できません")
        }
    }
}
