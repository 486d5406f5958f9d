//! Category listing page

use dioxus::prelude::*;

use crate::components::{Categories, Footer, Header, Loader, PostCard};
use crate::slug::CategorySlug;
use crate::types::{Category, PostEdge};

pub const PAGE_DESCRIPTION: &str = "Headless CMS GraphQL Blog";
pub const FAVICON_HREF: &str = "/image/logo.svg";

/// Where the router is for this request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    /// Fallback generation in progress; the slug is not known yet
    Fallback,
    Resolved(CategorySlug),
}

#[derive(Props, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub route: RouteState,
    pub posts: Vec<PostEdge>,
    /// Sidebar entries
    #[props(default)]
    pub categories: Vec<Category>,
}

/// Category page: header, title block, post grid with sidebar, footer
#[component]
pub fn CategoryPage(props: CategoryPageProps) -> Element {
    let slug = match &props.route {
        RouteState::Fallback => return rsx! { Loader {} },
        RouteState::Resolved(slug) => slug,
    };

    let category_name = slug.display_title();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{category_name}" }
            meta { name: "description", content: PAGE_DESCRIPTION }
            link { rel: "icon", href: FAVICON_HREF, r#type: "image/svg+xml" }
        }
        body {
            Header {}

            div {
                class: "flex flex-col text-center w-full mb-5 mt-5",
                h2 {
                    class: "text-xs text-pink-500 tracking-widest font-medium title-font mb-1",
                    "Related Articles on"
                }
                h1 {
                    class: "sm:text-3xl text-2xl font-medium title-font text-gray-900",
                    "{category_name}"
                }
            }

            div {
                class: "container mx-auto lg:px-10 px-5 mt-4",
                div {
                    class: "lg:grid lg:grid-cols-12 lg:gap-12",
                    div {
                        class: "col-span-1 lg:col-span-8",
                        for (index, edge) in props.posts.iter().enumerate() {
                            PostCard {
                                key: "{card_key(index, edge)}",
                                post: edge.node.clone(),
                            }
                        }
                    }
                    div {
                        class: "col-span-1 lg:col-span-4",
                        div {
                            class: "relative lg:sticky top-8",
                            Categories { categories: props.categories.clone() }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

/// Key a card by the post's own identity; position only when it has none.
fn card_key(index: usize, edge: &PostEdge) -> String {
    match edge.node.stable_key() {
        Some(key) => format!("post-{key}"),
        None => format!("index-{index}"),
    }
}
