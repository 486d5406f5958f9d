//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner shown while a fallback page is being generated
#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "loader flex flex-col items-center justify-center min-h-screen",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-pink-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-pink-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-pink-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}
