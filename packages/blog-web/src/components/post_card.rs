//! Post card component

use dioxus::prelude::*;

use crate::types::Post;

/// Props for PostCard
#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

/// Post card component displaying a single post
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;

    let title = post.title.as_deref().unwrap_or("Untitled");
    let href = post
        .slug
        .as_deref()
        .map(|slug| format!("/post/{slug}"))
        .unwrap_or_else(|| "#".to_string());
    let posted = format_time_ago(post.created_at.as_deref());

    rsx! {
        article {
            class: "post-card bg-white shadow-lg rounded-lg p-0 lg:p-8 pb-12 mb-8",

            // Featured image
            if let Some(image_url) = post.featured_image.as_ref().and_then(|image| image.url.as_deref()) {
                div {
                    class: "relative overflow-hidden shadow-md pb-80 mb-6",
                    img {
                        src: "{image_url}",
                        alt: "{title}",
                        class: "object-top absolute h-80 w-full object-cover shadow-lg rounded-t-lg lg:rounded-lg",
                    }
                }
            }

            // Title
            h1 {
                class: "transition duration-700 text-center mb-8 cursor-pointer hover:text-pink-600 text-3xl font-semibold",
                a { href: "{href}", "{title}" }
            }

            // Author + date
            div {
                class: "block lg:flex text-center items-center justify-center mb-8 w-full",
                if let Some(author) = &post.author {
                    div {
                        class: "flex items-center justify-center mb-4 lg:mb-0 w-full lg:w-auto mr-8",
                        if let Some(photo_url) = author.photo.as_ref().and_then(|photo| photo.url.as_deref()) {
                            img {
                                src: "{photo_url}",
                                alt: author.name.as_deref().unwrap_or_default(),
                                height: "30",
                                width: "30",
                                class: "align-middle rounded-full",
                            }
                        }
                        if let Some(name) = &author.name {
                            p { class: "inline align-middle text-gray-700 ml-2 text-lg", "{name}" }
                        }
                    }
                }
                span { class: "align-middle font-medium text-gray-700", "Posted {posted}" }
            }

            // Excerpt
            if let Some(excerpt) = &post.excerpt {
                p {
                    class: "text-center text-lg text-gray-700 font-normal px-4 lg:px-20 mb-8",
                    "{excerpt}"
                }
            }

            div {
                class: "text-center",
                a {
                    href: "{href}",
                    class: "transition duration-500 transform hover:-translate-y-1 inline-block bg-pink-600 text-lg font-medium rounded-full text-white px-8 py-3 cursor-pointer",
                    "Continue Reading"
                }
            }
        }
    }
}

fn format_time_ago(date_string: Option<&str>) -> String {
    let Some(date) = date_string.and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok()) else {
        return "Recently".to_string();
    };

    let days = chrono::Utc::now().signed_duration_since(date).num_days();
    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        format!("{} months ago", days / 30)
    }
}
