//! Rendered page output.

use blog_web::{
    pages::RouteState,
    render::render_category_page,
    testing::post_edge,
    types::{Asset, Author, Category, Post, PostEdge},
    CategorySlug,
};

const CARD_MARKER: &str = "class=\"post-card ";

fn resolved(slug: &str) -> RouteState {
    RouteState::Resolved(CategorySlug::parse(slug).unwrap())
}

fn sidebar() -> Vec<Category> {
    vec![
        Category {
            name: Some("Web Development".into()),
            slug: "web-development".into(),
        },
        Category {
            name: None,
            slug: "machine-learning".into(),
        },
    ]
}

#[test]
fn test_three_edges_render_three_cards_in_order() {
    let posts = vec![
        post_edge("p1", "Alpha Post"),
        post_edge("p2", "Beta Post"),
        post_edge("p3", "Gamma Post"),
    ];

    let html = render_category_page(&resolved("web-development"), &posts, &sidebar());

    assert_eq!(html.matches(CARD_MARKER).count(), 3);
    let alpha = html.find("Alpha Post").unwrap();
    let beta = html.find("Beta Post").unwrap();
    let gamma = html.find("Gamma Post").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn test_title_block_and_head_use_derived_title() {
    let html = render_category_page(&resolved("web-development"), &[], &[]);

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(html.ends_with("</body></html>"));
    assert!(html.contains("<title>Web Development</title>"));
    assert!(html.contains("Related Articles on"));
    assert!(html.contains("Headless CMS GraphQL Blog"));
    assert!(html.contains("/image/logo.svg"));
    assert!(!html.contains("web-development</h1>"));
}

#[test]
fn test_empty_posts_still_render_chrome() {
    let html = render_category_page(&resolved("rust"), &[], &sidebar());

    assert_eq!(html.matches(CARD_MARKER).count(), 0);
    assert!(html.contains("site-header"));
    assert!(html.contains("site-footer"));
    assert!(html.contains("category-widget"));
}

#[test]
fn test_sidebar_links_every_category() {
    let html = render_category_page(&resolved("rust"), &[], &sidebar());

    assert!(html.contains("href=\"/category/web-development\""));
    assert!(html.contains("href=\"/category/machine-learning\""));
    // Unnamed categories fall back to the derived title.
    assert!(html.contains("Machine Learning"));
}

#[test]
fn test_fallback_renders_only_the_loader() {
    let posts = vec![post_edge("p1", "Alpha Post"), post_edge("p2", "Beta Post")];

    let html = render_category_page(&RouteState::Fallback, &posts, &sidebar());

    assert!(html.contains("Loading..."));
    assert!(html.contains("loader"));
    assert!(!html.contains("Alpha Post"));
    assert!(!html.contains(CARD_MARKER));
    assert!(!html.contains("Related Articles on"));
    assert!(!html.contains("category-widget"));
    assert!(!html.contains("<html"));
}

#[test]
fn test_card_shows_author_and_links_to_post() {
    let edge = PostEdge {
        cursor: None,
        node: Post {
            slug: Some("intro-to-axum".into()),
            title: Some("Intro to Axum".into()),
            excerpt: Some("Routing and extractors".into()),
            created_at: Some("not a date".into()),
            author: Some(Author {
                name: Some("Sam Rivera".into()),
                bio: None,
                photo: None,
            }),
            ..Default::default()
        },
    };

    let html = render_category_page(&resolved("rust"), &[edge], &[]);

    assert!(html.contains("href=\"/post/intro-to-axum\""));
    assert!(html.contains("Sam Rivera"));
    assert!(html.contains("Routing and extractors"));
    assert!(html.contains("Posted Recently"));
}

#[test]
fn test_text_is_escaped() {
    let html = render_category_page(
        &resolved("rust"),
        &[post_edge("p1", "<script>alert(1)</script>")],
        &[],
    );

    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn test_card_without_author_name_or_image_url() {
    let edge = PostEdge {
        cursor: None,
        node: Post {
            title: Some("Half Filled".into()),
            featured_image: Some(Asset { url: None }),
            author: Some(Author {
                name: None,
                bio: None,
                photo: Some(Asset {
                    url: Some("/avatars/anon.png".into()),
                }),
            }),
            ..Default::default()
        },
    };

    let html = render_category_page(&resolved("rust"), &[edge], &[]);

    assert_eq!(html.matches(CARD_MARKER).count(), 1);
    assert!(html.contains("Half Filled"));
    assert!(html.contains("/avatars/anon.png"));
    assert!(!html.contains("<img src=\"\""));
}
