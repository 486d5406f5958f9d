//! Category sidebar widget

use dioxus::prelude::*;

use crate::types::Category;

#[derive(Props, Clone, PartialEq)]
pub struct CategoriesProps {
    pub categories: Vec<Category>,
}

/// Sidebar list linking to every category page
#[component]
pub fn Categories(props: CategoriesProps) -> Element {
    rsx! {
        div {
            class: "category-widget bg-white shadow-lg rounded-lg p-8 pb-12 mb-8",
            h3 { class: "text-xl mb-8 font-semibold border-b pb-4", "Categories" }
            for category in props.categories.iter() {
                a {
                    key: "{category.slug}",
                    href: "/category/{category.slug}",
                    span { class: "cursor-pointer block pb-3 mb-3", "{category.label()}" }
                }
            }
        }
    }
}
