//! # OpenAPI ドキュメント定義
//!
//! ゲートウェイ自身が持つエンドポイント（稼働状態）と、
//! ルートグループのタグを宣言する。
//! グループ配下の個別エンドポイントは外部コラボレータ（ML エンジン）の
//! 管轄であり、ここには現れない。

use utoipa::OpenApi;

/// API ドキュメント
///
/// タグは `app_builder::ROUTE_GROUPS` の宣言と対応する。
#[derive(OpenApi)]
#[openapi(
   info(
      title = "ReddyFit ML API",
      description = "Machine Learning powered fitness and nutrition recommendations",
      version = "1.0.0"
   ),
   paths(crate::handler::health::root, crate::handler::health::health_check),
   components(schemas(
      reddyfit_shared::RootResponse,
      reddyfit_shared::HealthResponse,
      reddyfit_shared::ErrorResponse
   )),
   tags(
      (name = "health", description = "稼働状態"),
      (name = "ML Recommendations", description = "ワークアウト・食事のレコメンデーション（委譲）"),
      (name = "Custom Recipes", description = "カスタムレシピ（委譲）"),
      (name = "Workout Plans", description = "ワークアウトプラン（委譲）"),
      (name = "Nutrition Analysis", description = "栄養分析（委譲）")
   )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi as _;

    use super::*;
    use crate::app_builder::ROUTE_GROUPS;

    #[test]
    fn test_稼働状態エンドポイントがドキュメントに含まれる() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_全ルートグループのタグが宣言されている() {
        let doc = ApiDoc::openapi();
        let tags: Vec<String> = doc
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.name)
            .collect();

        for group in ROUTE_GROUPS {
            assert!(tags.contains(&group.tag.to_string()), "missing tag: {}", group.tag);
        }
    }
}
