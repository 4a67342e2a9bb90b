//! # ReddyFit API ゲートウェイライブラリ
//!
//! 認証付き API ゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルートグループの合成とレイヤー構築
//! - `client`: ML エンジンサービスへの委譲クライアント
//! - `config`: 環境変数からの設定読み込み
//! - `cors`: CORS 許可リスト（リテラルデータ）
//! - `handler`: HTTP ハンドラ（ヘルスチェック・委譲プロキシ）
//! - `middleware`: 認証ゲートミドルウェア

pub mod app_builder;
pub mod client;
pub mod config;
pub mod cors;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
