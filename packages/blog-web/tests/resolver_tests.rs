//! Resolver behavior against the in-memory content source.

use blog_web::{
    testing::{post_edge, MockCms, MockCmsCall},
    types::StaticPaths,
    CategoryResolver, CategorySlug, FailureKind,
};

fn slug(value: &str) -> CategorySlug {
    CategorySlug::parse(value).unwrap()
}

#[tokio::test]
async fn test_paths_one_entry_per_category_with_fallback() {
    let cms = MockCms::new()
        .with_category("Web Development", "web-development")
        .with_category("Rust", "rust")
        .with_category("Databases", "databases");
    let resolver = CategoryResolver::new(cms.clone());

    let paths = resolver.resolve_paths().await;

    assert!(!paths.is_degraded());
    let paths = paths.into_value();
    assert!(paths.fallback);
    let slugs: Vec<_> = paths.paths.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["web-development", "rust", "databases"]);
    assert_eq!(cms.calls(), vec![MockCmsCall::Categories]);
}

#[tokio::test]
async fn test_paths_skip_empty_slugs() {
    let cms = MockCms::new()
        .with_category("Rust", "rust")
        .with_category("Broken", "");
    let resolver = CategoryResolver::new(cms);

    let paths = resolver.resolve_paths().await.into_value();

    assert_eq!(paths.paths.len(), 1);
    assert!(paths.fallback);
}

#[tokio::test]
async fn test_sidebar_categories_skip_empty_slugs() {
    let cms = MockCms::new()
        .with_category("Rust", "rust")
        .with_category("Broken", "")
        .with_category("Go", "go");
    let resolver = CategoryResolver::new(cms);

    let resolved = resolver.resolve_categories().await.into_value();

    let sidebar: Vec<_> = resolved.categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(sidebar, vec!["rust", "go"]);
    assert_eq!(resolved.static_paths.paths.len(), 2);
}

#[tokio::test]
async fn test_paths_fail_closed_on_error() {
    let cms = MockCms::new()
        .with_category("Rust", "rust")
        .failing("connection refused");
    let resolver = CategoryResolver::new(cms);

    let paths = resolver.resolve_paths().await;

    assert!(paths.is_degraded());
    assert_eq!(paths.value(), &StaticPaths::closed());
    assert_eq!(paths.value().paths.len(), 0);
    assert!(!paths.value().fallback);
}

#[tokio::test]
async fn test_paths_fail_closed_without_endpoint() {
    let resolver = CategoryResolver::<MockCms>::unconfigured();

    let paths = resolver.resolve_paths().await;

    assert_eq!(paths.value(), &StaticPaths::closed());
    assert_eq!(
        paths.error().map(|e| e.kind()),
        Some(FailureKind::MissingConfig)
    );
}

#[tokio::test]
async fn test_props_return_edges_in_order() {
    let cms = MockCms::new().with_posts(
        "rust",
        vec![
            post_edge("p1", "Ownership"),
            post_edge("p2", "Borrowing"),
            post_edge("p3", "Lifetimes"),
        ],
    );
    let resolver = CategoryResolver::new(cms.clone());

    let props = resolver.resolve_props(&slug("rust")).await;

    assert!(!props.is_degraded());
    let titles: Vec<_> = props
        .value()
        .posts
        .iter()
        .map(|edge| edge.node.title.clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["Ownership", "Borrowing", "Lifetimes"]);
    assert_eq!(
        cms.calls(),
        vec![MockCmsCall::PostsByCategory {
            slug: "rust".to_string()
        }]
    );
}

#[tokio::test]
async fn test_props_unknown_slug_is_empty_not_error() {
    let resolver = CategoryResolver::new(MockCms::new());

    let props = resolver.resolve_props(&slug("nothing-here")).await;

    assert!(!props.is_degraded());
    assert!(props.value().posts.is_empty());
}

#[tokio::test]
async fn test_props_degrade_on_query_error() {
    let cms = MockCms::new()
        .with_posts("rust", vec![post_edge("p1", "Ownership")])
        .failing("field 'postsConnection' not found");
    let resolver = CategoryResolver::new(cms);

    let props = resolver.resolve_props(&slug("rust")).await;

    assert!(props.is_degraded());
    assert!(props.value().posts.is_empty());
    let error = props.error().unwrap();
    assert_eq!(error.kind(), FailureKind::MalformedResponse);
    assert!(error.to_string().contains("postsConnection"));
}

#[tokio::test]
async fn test_props_without_endpoint_issue_no_calls() {
    let cms = MockCms::new().with_posts("rust", vec![post_edge("p1", "Ownership")]);
    // The mock exists but is never handed to the resolver.
    let resolver = CategoryResolver::<MockCms>::unconfigured();

    let props = resolver.resolve_props(&slug("rust")).await;

    assert!(props.value().posts.is_empty());
    assert_eq!(
        props.error().map(|e| e.kind()),
        Some(FailureKind::MissingConfig)
    );
    assert_eq!(cms.call_count(), 0);
}
