//! Type definitions for CMS responses and page data

use serde::{Deserialize, Serialize};

use crate::slug::{derive_title, CategorySlug};

// ============================================================================
// CMS Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    pub slug: String,
}

impl Category {
    /// Label shown in the sidebar; falls back to the title derived from the slug
    pub fn label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => derive_title(&self.slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<Asset>,
}

/// A blog post as returned by the CMS.
///
/// Only the fields the post card reads are named. Everything else the query
/// selected is carried in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub featured_image: Option<Asset>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    /// Stable identity used to key the card, if the CMS supplied one
    pub fn stable_key(&self) -> Option<&str> {
        self.id.as_deref().or(self.slug.as_deref())
    }
}

/// Connection edge wrapping one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEdge {
    #[serde(default)]
    pub cursor: Option<String>,
    pub node: Post,
}

// ============================================================================
// Page Types
// ============================================================================

/// Data handed to the category page. `posts` is never absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageProps {
    pub posts: Vec<PostEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParams {
    pub slug: CategorySlug,
}

/// Precomputed category routes and the policy for slugs outside them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPaths {
    pub paths: Vec<PathParams>,
    pub fallback: bool,
}

impl StaticPaths {
    /// Fail-closed result used when the category list cannot be fetched
    pub fn closed() -> Self {
        Self {
            paths: Vec::new(),
            fallback: false,
        }
    }

    pub fn contains(&self, slug: &CategorySlug) -> bool {
        self.paths.iter().any(|path| &path.slug == slug)
    }
}
