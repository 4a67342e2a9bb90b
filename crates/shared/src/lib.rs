//! # ReddyFit 共有ユーティリティ
//!
//! このクレートは、ReddyFit API
//! を構成するクレート全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存を持たない（レスポンス変換は各サービスの責務）

pub mod error_response;
pub mod health;
#[cfg(feature = "observability")]
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{HealthResponse, RootResponse};
