//! # ReddyFit ML API ゲートウェイサーバー
//!
//! ML レコメンデーションバックエンドの認証付き API ゲートウェイ。
//!
//! ## 役割
//!
//! フロントエンドと ML エンジンサービスの間に位置し、以下の責務を担う:
//!
//! - **認証**: Firebase ID トークンの検証（ルートグループ単位のゲート）
//! - **CORS**: 固定許可リストの適用
//! - **ルーター合成**: 4 つのルートグループをプレフィックス配下に登録
//! - **稼働状態報告**: `GET /` と `GET /health`
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│   Gateway    │────▶│  ML Engine   │
//! │  (Frontend)  │     │  port: 8000  │     │  port: 8001  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │   Firebase   │
//!                      │   (ID 検証)  │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `ENVIRONMENT` | No | 環境名。表示専用（デフォルト: `development`） |
//! | `ENGINE_URL` | No | ML エンジンサービスの URL |
//! | `FIREBASE_PROJECT_ID` ほか | 一部 | `reddyfit_infra::service_account` を参照 |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p reddyfit-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=8000 FIREBASE_PRIVATE_KEY=... cargo run -p reddyfit-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use reddyfit_api::{
    app_builder::build_app,
    client::{EngineClient, EngineClientImpl},
    config::ApiConfig,
};
use reddyfit_infra::{FirebaseApp, FirebaseAuthClient, ServiceAccount, TokenVerifier};
use reddyfit_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. Firebase サービスアカウントの登録（プロセスで一度だけ）
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    reddyfit_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    // Firebase サービスアカウントの登録
    // 鍵が壊れている場合はここで落とす（壊れた認証情報でリクエストを受けない）
    let account = ServiceAccount::from_env()
        .expect("Firebase サービスアカウントの読み込みに失敗しました");
    let firebase_app = FirebaseApp::init_global(account);

    // 起動通知
    tracing::info!(
        environment = %config.environment,
        firebase_project = %firebase_app.project_id(),
        "ReddyFit ML API を起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存関係の初期化
    // 具象型で保持し、State 注入時にトレイトオブジェクトへ coerce する
    let verifier: Arc<dyn TokenVerifier> = Arc::new(FirebaseAuthClient::new(firebase_app));
    let engine: Arc<dyn EngineClient> = Arc::new(EngineClientImpl::new(&config.engine_url));

    // ルーター構築
    let app = build_app(&config, verifier, engine);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ReddyFit ML API が起動しました: {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // シャットダウン通知
    tracing::info!("ReddyFit ML API をシャットダウンしました");

    Ok(())
}

/// SIGINT / SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("SIGINT ハンドラの登録に失敗しました");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM ハンドラの登録に失敗しました")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
