//! Blog category pages rendered from a headless GraphQL CMS.
//!
//! Category routes are resolved from the CMS, each page's posts are fetched
//! per category, and pages are rendered to HTML with Dioxus on the server.
//! Fetch failures never break a page: they degrade to an empty listing and
//! are logged.

#![allow(non_snake_case)]

pub mod cms;
pub mod components;
pub mod config;
pub mod export;
pub mod graphql;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod server;
pub mod slug;
pub mod testing;
pub mod types;

pub use config::Config;
pub use resolve::{CategoryResolver, FailureKind, FetchError, Fetched};
pub use slug::{derive_title, CategorySlug};
