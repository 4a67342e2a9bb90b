//! # 認証ゲートミドルウェア
//!
//! `Authorization` ヘッダーのベアラートークンを ID プロバイダで検証し、
//! 成功時は検証済み [`ClaimSet`](reddyfit_infra::ClaimSet) を
//! request extensions に載せて下流へ渡す。
//! 失敗時は 401 を返す（匿名アクセスへのダウングレードはしない）。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState { verifier: verifier.clone() };
//!
//! Router::new()
//!     .fallback(forward_to_engine)
//!     .layer(from_fn_with_state(auth_state, require_auth))
//! ```
//!
//! ## 既知の特性
//!
//! クライアントが応答を待たずに切断しても、進行中のプロバイダ検証呼び出しが
//! キャンセルされる保証はない（通常のリクエスト/レスポンスのライフサイクルに
//! 委ねられる）。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use reddyfit_infra::TokenVerifier;

use crate::error::unauthorized_response;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// ヘッダー値からベアラートークンを取り出す
///
/// 互換性のため、元実装の挙動をそのまま再現する:
/// ヘッダーに `"Bearer"` が含まれる場合は **最後の** `"Bearer "` の後ろを
/// トークンとして扱い（`"Bearer "` が一度も現れなければヘッダー全体）、
/// `"Bearer"` を含まない場合はヘッダー全体を生のトークンとして扱う。
pub fn extract_bearer_token(header: &str) -> &str {
    if header.contains("Bearer") {
        match header.rfind("Bearer ") {
            Some(idx) => &header[idx + "Bearer ".len()..],
            None => header,
        }
    } else {
        header
    }
}

/// 認証ミドルウェア
///
/// ヘッダーが欠落していれば 401、検証に失敗すれば 401。
/// リトライは行わず、プロバイダの一時的な障害も即座に 401 として返す。
/// 診断用にプロバイダのエラーメッセージを detail に含めるが、
/// 生のトークンは含めない。
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => match value.to_str() {
            Ok(value) => value,
            Err(_) => {
                return unauthorized_response(
                    "Invalid authentication token: header is not valid UTF-8",
                );
            }
        },
        None => return unauthorized_response("Authorization header missing"),
    };

    let token = extract_bearer_token(header);

    match state.verifier.verify_id_token(token).await {
        Ok(claims) => {
            // クレームセットはこのリクエスト限り。キャッシュしない
            request.extensions_mut().insert(Arc::new(claims));
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(
                error.category = "authentication",
                error.kind = "token_verification",
                "トークン検証に失敗: {}",
                e
            );
            unauthorized_response(&format!("Invalid authentication token: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        extract::Extension,
        http::{Method, Request, StatusCode},
        middleware::from_fn_with_state,
        response::IntoResponse,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use reddyfit_infra::{ClaimSet, FirebaseError, TokenVerifier};
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    // ===== extract_bearer_token テスト =====

    #[rstest]
    #[case("Bearer abc123", "abc123")]
    #[case("Bearer Bearer abc123", "abc123")]
    #[case("abc123", "abc123")]
    #[case("Token abc123", "Token abc123")]
    #[case("Bearer", "Bearer")]
    #[case("Bearer ", "")]
    fn test_ベアラートークンの抽出(#[case] header: &str, #[case] expected: &str) {
        assert_eq!(extract_bearer_token(header), expected);
    }

    // ===== require_auth テスト =====

    /// テスト用スタブ検証器
    struct StubVerifier {
        result: Result<ClaimSet, FirebaseError>,
    }

    impl StubVerifier {
        fn accepting(sub: &str) -> Self {
            let mut map = serde_json::Map::new();
            map.insert("sub".to_string(), sub.into());
            Self {
                result: Ok(ClaimSet::from(map)),
            }
        }

        fn rejecting(detail: &str) -> Self {
            Self {
                result: Err(FirebaseError::TokenRejected(detail.to_string())),
            }
        }
    }

    #[async_trait]
    impl TokenVerifier for StubVerifier {
        async fn verify_id_token(&self, _token: &str) -> Result<ClaimSet, FirebaseError> {
            self.result.clone()
        }
    }

    /// 検証済みクレームを読み返すテスト用ハンドラ
    async fn whoami(Extension(claims): Extension<Arc<ClaimSet>>) -> impl IntoResponse {
        claims.sub().unwrap_or("unknown").to_string()
    }

    fn create_test_app(verifier: StubVerifier) -> Router {
        let auth_state = AuthState {
            verifier: Arc::new(verifier),
        };

        Router::new()
            .route("/test", get(whoami))
            .layer(from_fn_with_state(auth_state, require_auth))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_ヘッダー欠落で401を返す() {
        // Given
        let sut = create_test_app(StubVerifier::accepting("user-123"));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(response).await;
        assert!(body.contains("Authorization header missing"));
    }

    #[tokio::test]
    async fn test_検証成功でクレームが下流に渡る() {
        // Given
        let sut = create_test_app(StubVerifier::accepting("user-123"));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/test")
            .header("Authorization", "Bearer valid-token")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "user-123");
    }

    #[tokio::test]
    async fn test_検証失敗で401を返しトークンを漏らさない() {
        // Given
        let sut = create_test_app(StubVerifier::rejecting("Token expired"));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/test")
            .header("Authorization", "Bearer super-secret-token")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(response).await;
        assert!(body.contains("Invalid authentication token"));
        assert!(body.contains("Token expired"));
        assert!(!body.contains("super-secret-token"));
    }

    #[tokio::test]
    async fn test_bearerを含まないヘッダーは全体がトークンとして検証される() {
        // Given: スタブはどんなトークンでも受理する
        let sut = create_test_app(StubVerifier::accepting("user-456"));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/test")
            .header("Authorization", "raw-token-without-marker")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
    }
}
