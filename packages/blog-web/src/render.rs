//! Server-side rendering of pages to HTML strings

use dioxus::prelude::*;

use crate::pages::{CategoryPage, CategoryPageProps, RouteState};
use crate::types::{Category, PostEdge};

/// Render the category page for `route`.
///
/// A resolved route produces a complete HTML document; the page component
/// renders `head` and `body` and the `html` root is added here. A fallback
/// route produces only the loading indicator markup.
pub fn render_category_page(route: &RouteState, posts: &[PostEdge], categories: &[Category]) -> String {
    let mut dom = VirtualDom::new_with_props(
        CategoryPage,
        CategoryPageProps {
            route: route.clone(),
            posts: posts.to_vec(),
            categories: categories.to_vec(),
        },
    );
    dom.rebuild_in_place();

    let markup = dioxus_ssr::render(&dom);
    match route {
        RouteState::Resolved(_) => format!("<!DOCTYPE html><html lang=\"en\">{markup}</html>"),
        RouteState::Fallback => markup,
    }
}
