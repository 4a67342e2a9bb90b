//! # ヘルスチェックハンドラ
//!
//! 認証不要の稼働状態エンドポイント。
//!
//! - `GET /` — サービスの自己紹介（静的な設定値のみ）
//! - `GET /health` — liveness probe（固定リテラル）
//!
//! どちらも実際の依存状態（Firebase / ML エンジン）は確認しない。
//! `firebase: "connected"` / `ml_models: "loaded"` は定数であり、
//! 実際の接続チェックに置き換えてはならない（観測可能な挙動が変わる）。

use axum::{Json, extract::State};
use reddyfit_shared::{HealthResponse, RootResponse};

/// ルートエンドポイント用の State
#[derive(Debug, Clone)]
pub struct HealthState {
    /// 環境名（表示専用）
    pub environment: String,
}

/// サービス情報エンドポイント
#[utoipa::path(
   get,
   path = "/",
   tag = "health",
   responses(
      (status = 200, description = "サービス情報", body = RootResponse)
   )
)]
pub async fn root(State(state): State<HealthState>) -> Json<RootResponse> {
    Json(RootResponse::new(state.environment.clone()))
}

/// liveness probe エンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new())
}
