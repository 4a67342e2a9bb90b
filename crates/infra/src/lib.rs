//! # ReddyFit インフラストラクチャ
//!
//! ID プロバイダ（Firebase）との連携を担当するクレート。
//!
//! ## モジュール構成
//!
//! - `service_account`: サービスアカウント認証情報の読み込みと検証
//! - `firebase`: プロセス全体で一度だけ行う登録（init-once）と ID トークン検証

pub mod firebase;
pub mod service_account;

pub use firebase::{ClaimSet, FirebaseApp, FirebaseAuthClient, FirebaseError, TokenVerifier};
pub use service_account::ServiceAccount;
