//! # API ゲートウェイ設定
//!
//! 環境変数からサーバーの設定を読み込む。
//! Firebase サービスアカウント関連の環境変数は
//! `reddyfit_infra::service_account` を参照。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8000;

/// デフォルトの環境名（表示専用）
const DEFAULT_ENVIRONMENT: &str = "development";

/// デフォルトの ML エンジンサービス URL
const DEFAULT_ENGINE_URL: &str = "http://localhost:8001";

/// 設定読み込みエラー
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// ポート番号がパースできない
    #[error("API_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),
}

/// API ゲートウェイの設定
///
/// | 変数名 | 必須 | 説明 |
/// |--------|------|------|
/// | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
/// | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
/// | `ENVIRONMENT` | No | 環境名。表示専用（デフォルト: `development`） |
/// | `ENGINE_URL` | No | ML エンジンサービスの URL（デフォルト: `http://localhost:8001`） |
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// 環境名（表示専用）
    pub environment: String,
    /// ML エンジンサービスの URL
    pub engine_url:  String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host:        env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port:        parse_port(env::var("API_PORT").ok())?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
            engine_url:  env::var("ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string()),
        })
    }
}

/// 環境変数の値からポート番号をパースする
///
/// 未設定の場合はデフォルト値を返す。
fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、純粋なパース関数で検証する

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_port未設定のときデフォルト8000になる() {
        assert_eq!(parse_port(None).unwrap(), 8000);
    }

    #[test]
    fn test_有効なportがパースされる() {
        assert_eq!(parse_port(Some("9000".to_string())).unwrap(), 9000);
    }

    #[test]
    fn test_不正なportでエラーになる() {
        let result = parse_port(Some("not-a-port".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn test_範囲外のportでエラーになる() {
        let result = parse_port(Some("70000".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
