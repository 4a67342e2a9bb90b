//! # HTTP ハンドラ
//!
//! - `health`: 認証不要の稼働状態エンドポイント
//! - `proxy`: ルートグループ共通の委譲ハンドラ

pub mod health;
pub mod proxy;

pub use health::{HealthState, health_check, root};
pub use proxy::{ProxyState, forward_to_engine};
