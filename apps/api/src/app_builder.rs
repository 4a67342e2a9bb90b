//! # アプリケーション構築
//!
//! ルートグループの合成とレイヤー構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## ルートグループ
//!
//! 4 つのルートグループを固定のプレフィックス配下に登録する。
//! グループはそれぞれドキュメント用のタグを持ち、認証要否を自身で宣言する
//! （ゲートウェイは検証ゲートを提供するだけで、全体に強制はしない）。

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use reddyfit_infra::TokenVerifier;
use reddyfit_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::EngineClient,
    config::ApiConfig,
    cors::cors_layer,
    handler::{HealthState, ProxyState, forward_to_engine, health_check, root},
    middleware::{AuthState, require_auth},
};

/// ルートグループの宣言
///
/// 起動時に一度だけ登録され、以後は不変。
#[derive(Debug, Clone, Copy)]
pub struct RouteGroup {
    /// グループ名（ログ用）
    pub name:          &'static str,
    /// パスプレフィックス
    pub prefix:        &'static str,
    /// ドキュメント用タグ
    pub tag:           &'static str,
    /// 認証ゲートを通すかどうか（グループ自身の宣言）
    pub requires_auth: bool,
}

/// 登録するルートグループの一覧
pub const ROUTE_GROUPS: [RouteGroup; 4] = [
    RouteGroup {
        name:          "recommendations",
        prefix:        "/api/recommendations",
        tag:           "ML Recommendations",
        requires_auth: true,
    },
    RouteGroup {
        name:          "recipes",
        prefix:        "/api/recipes",
        tag:           "Custom Recipes",
        requires_auth: true,
    },
    RouteGroup {
        name:          "workouts",
        prefix:        "/api/workouts",
        tag:           "Workout Plans",
        requires_auth: true,
    },
    RouteGroup {
        name:          "nutrition",
        prefix:        "/api/nutrition",
        tag:           "Nutrition Analysis",
        requires_auth: true,
    },
];

/// ルーターを構築する
///
/// 注入されたトークン検証器とエンジンクライアントから、
/// State → グループルーター → レイヤーの順に組み立てる。
pub fn build_app(
    config: &ApiConfig,
    verifier: Arc<dyn TokenVerifier>,
    engine: Arc<dyn EngineClient>,
) -> Router {
    let auth_state = AuthState { verifier };
    let proxy_state = ProxyState { engine };
    let health_state = HealthState {
        environment: config.environment.clone(),
    };

    // 稼働状態エンドポイント（認証不要）
    let mut app = Router::new()
        .merge(
            Router::new()
                .route("/", get(root))
                .with_state(health_state),
        )
        .route("/health", get(health_check));

    // ルートグループの登録
    // 業務ロジックはエンジンに委譲するため、グループは fallback のみを持つ
    for group in ROUTE_GROUPS {
        let mut group_router = Router::new()
            .fallback(forward_to_engine)
            .with_state(proxy_state.clone());

        if group.requires_auth {
            group_router =
                group_router.layer(from_fn_with_state(auth_state.clone(), require_auth));
        }

        app = app.nest(group.prefix, group_router);
    }

    // レイヤー順序が重要: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
    // 2. TraceLayer: リクエストスパンに request_id を含める
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. CorsLayer: すべてのレスポンスに CORS ヘッダーを付与
    app.layer(cors_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
