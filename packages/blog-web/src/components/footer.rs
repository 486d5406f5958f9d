//! Site footer

use dioxus::prelude::*;

use super::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer border-t border-gray-200 mt-12 py-8 text-center",
            p { class: "text-sm text-gray-500", "{SITE_NAME} · Powered by a headless CMS" }
        }
    }
}
