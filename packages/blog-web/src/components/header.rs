//! Site header

use dioxus::prelude::*;

pub const SITE_NAME: &str = "GraphCMS Blog";

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "site-header container mx-auto px-10 mb-8",
            div {
                class: "border-b w-full inline-block border-pink-400 py-8",
                div {
                    class: "md:float-left block",
                    a {
                        href: "/",
                        span { class: "cursor-pointer font-bold text-4xl text-gray-900", "{SITE_NAME}" }
                    }
                }
            }
        }
    }
}
