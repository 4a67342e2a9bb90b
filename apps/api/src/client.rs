//! # 外部サービスクライアント
//!
//! ルートグループの業務ロジックを担う外部コラボレータへのクライアント。

pub mod engine;

pub use engine::{EngineClient, EngineClientImpl, EngineError, EngineResponse};
