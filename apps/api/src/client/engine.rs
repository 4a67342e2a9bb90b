//! # ML エンジンクライアント
//!
//! ルートグループ（recommendations / recipes / workouts / nutrition）の
//! 業務ロジックは ML エンジンサービスが担う。ゲートウェイはリクエストを
//! そのまま転送し、レスポンスのステータスコードとボディを変更せずに返す。
//!
//! 検証済みのユーザー ID は `X-User-Id` ヘッダーでエンジンに伝える。

use async_trait::async_trait;
use axum::http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE};
use bytes::Bytes;
use thiserror::Error;

/// ML エンジンクライアントエラー
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// エンジンが利用不可（接続失敗・タイムアウト）
    #[error("ML エンジンが一時的に利用できません")]
    ServiceUnavailable,

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            EngineError::ServiceUnavailable
        } else {
            EngineError::Network(err.without_url().to_string())
        }
    }
}

/// エンジンからのレスポンス
///
/// ステータスコードとボディは呼び出し元へ変更せずに返すこと。
#[derive(Debug, Clone)]
pub struct EngineResponse {
    /// ステータスコード（そのまま伝播する）
    pub status:       StatusCode,
    /// Content-Type ヘッダー
    pub content_type: Option<HeaderValue>,
    /// レスポンスボディ
    pub body:         Bytes,
}

/// ML エンジンクライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait EngineClient: Send + Sync {
    /// リクエストをエンジンへ転送する
    ///
    /// `path_and_query` は元のリクエストのパスとクエリ
    /// （例: `/api/recipes/123?detail=full`）。
    async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        user_id: Option<&str>,
        content_type: Option<&HeaderValue>,
        body: Bytes,
    ) -> Result<EngineResponse, EngineError>;
}

/// ML エンジンクライアント実装
pub struct EngineClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl EngineClientImpl {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: エンジンサービスのベース URL（例: `http://localhost:8001`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EngineClient for EngineClientImpl {
    async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        user_id: Option<&str>,
        content_type: Option<&HeaderValue>,
        body: Bytes,
    ) -> Result<EngineResponse, EngineError> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let mut request = self.client.request(method, url);
        if let Some(user_id) = user_id {
            request = request.header("X-User-Id", user_id);
        }
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        let response = request.body(body).send().await?;

        let status = response.status();
        let response_content_type = response.headers().get(CONTENT_TYPE).cloned();
        let response_body = response.bytes().await?;

        Ok(EngineResponse {
            status,
            content_type: response_content_type,
            body: response_body,
        })
    }
}
