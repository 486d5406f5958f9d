//! Testing utilities including an in-memory content source.
//!
//! Useful for exercising the resolvers, exporter and server without a
//! GraphQL endpoint.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::cms::CmsSource;
use crate::graphql::ClientError;
use crate::slug::CategorySlug;
use crate::types::{Category, Post, PostEdge};

/// A mock content source for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the resolver owns another.
#[derive(Clone, Default)]
pub struct MockCms {
    categories: Arc<RwLock<Vec<Category>>>,

    /// Posts by category slug
    posts: Arc<RwLock<HashMap<String, Vec<PostEdge>>>>,

    /// When set, every call fails with a GraphQL error carrying this message
    failure: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCmsCall>>>,
}

/// Record of a call made to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCmsCall {
    Categories,
    PostsByCategory { slug: String },
}

impl MockCms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with a display name.
    pub fn with_category(self, name: impl Into<String>, slug: impl Into<String>) -> Self {
        self.categories.write().unwrap().push(Category {
            name: Some(name.into()),
            slug: slug.into(),
        });
        self
    }

    /// Set the posts returned for a slug.
    pub fn with_posts(self, slug: impl Into<String>, posts: Vec<PostEdge>) -> Self {
        self.posts.write().unwrap().insert(slug.into(), posts);
        self
    }

    /// Make every call fail.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<MockCmsCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    fn record(&self, call: MockCmsCall) -> Result<(), ClientError> {
        self.calls.write().unwrap().push(call);
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(ClientError::GraphQL(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CmsSource for MockCms {
    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.record(MockCmsCall::Categories)?;
        Ok(self.categories.read().unwrap().clone())
    }

    async fn posts_by_category(&self, slug: &CategorySlug) -> Result<Vec<PostEdge>, ClientError> {
        self.record(MockCmsCall::PostsByCategory {
            slug: slug.to_string(),
        })?;
        Ok(self
            .posts
            .read()
            .unwrap()
            .get(slug.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

/// Build an edge for a post with the given id and title.
pub fn post_edge(id: &str, title: &str) -> PostEdge {
    PostEdge {
        cursor: Some(format!("cursor-{id}")),
        node: Post {
            id: Some(id.to_string()),
            slug: Some(id.to_string()),
            title: Some(title.to_string()),
            excerpt: Some(format!("About {title}")),
            ..Default::default()
        },
    }
}
