//! # CORS ポリシー
//!
//! 固定の許可リストに基づく CORS 設定。すべてのレスポンスに適用される。
//! ルートごとの上書きはない。
//!
//! 許可リストはランタイムロジックではなく宣言的な設定であり、
//! リテラルデータとしてこのモジュールに置く。

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// 完全一致で許可するオリジン
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "https://agreeable-water-04e942910.1.azurestaticapps.net",
];

/// ワイルドカードで許可する静的ホスティングドメインのサフィックス
/// （`https://*.azurestaticapps.net` に相当。apex ドメインは一致しない）
pub const ALLOWED_ORIGIN_SUFFIX: &str = ".azurestaticapps.net";

/// オリジンが許可リストに含まれるか判定する
pub fn origin_allowed(origin: &str) -> bool {
    if ALLOWED_ORIGINS.contains(&origin) {
        return true;
    }

    // ワイルドカードは https のサブドメインのみ
    match origin.strip_prefix("https://") {
        Some(host) => {
            !host.contains('/')
                && host.len() > ALLOWED_ORIGIN_SUFFIX.len()
                && host.ends_with(ALLOWED_ORIGIN_SUFFIX)
        }
        None => false,
    }
}

/// 全レスポンスに適用する CORS レイヤーを構築する
///
/// クレデンシャル付きリクエストを許可するため、メソッド・ヘッダーは
/// ワイルドカードではなくリクエストのミラーで「すべて許可」を表現する
/// （tower-http はクレデンシャル許可と `Any` の併用を禁止している）。
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().map(origin_allowed).unwrap_or(false)
        }))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
