//! # ミドルウェア
//!
//! ルートグループ単位で適用するミドルウェアを集約する。

pub mod auth;

pub use auth::{AuthState, extract_bearer_token, require_auth};
