//! # ヘルスチェック共通型
//!
//! ゲートウェイの稼働状態エンドポイントが返すレスポンス型を提供する。
//!
//! どちらの型も静的な設定値のみを反映する。依存先（Firebase / ML エンジン）の
//! 実際の接続状態は確認しない。`HealthResponse` の `firebase` / `ml_models`
//! フィールドは固定リテラルであり、liveness probe として扱うこと。

use serde::{Deserialize, Serialize};

/// `GET /` のレスポンス
///
/// サービスの自己紹介。すべて起動時に確定する静的な値を返す。
///
/// ## 使用例
///
/// ```
/// use reddyfit_shared::RootResponse;
///
/// let response = RootResponse::new("production");
/// assert_eq!(response.status, "healthy");
/// assert_eq!(response.service, "ReddyFit ML API");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RootResponse {
    /// 稼働状態（常に `"healthy"`）
    pub status:      String,
    /// サービス名
    pub service:     String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version:     String,
    /// 環境名（表示専用の設定値）
    pub environment: String,
}

impl RootResponse {
    /// 環境名を受け取り、残りを固定値で埋める
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            status:      "healthy".to_string(),
            service:     "ReddyFit ML API".to_string(),
            version:     env!("CARGO_PKG_VERSION").to_string(),
            environment: environment.into(),
        }
    }
}

/// `GET /health` のレスポンス
///
/// `firebase` / `ml_models` は固定リテラル。実際の依存状態を反映しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（常に `"healthy"`）
    pub status:    String,
    /// Firebase 接続表示（常に `"connected"`）
    pub firebase:  String,
    /// ML モデル読み込み表示（常に `"loaded"`）
    pub ml_models: String,
}

impl HealthResponse {
    /// 固定リテラルのレスポンスを作成する
    pub fn new() -> Self {
        Self {
            status:    "healthy".to_string(),
            firebase:  "connected".to_string(),
            ml_models: "loaded".to_string(),
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}
