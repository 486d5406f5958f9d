//! GraphQL query definitions and their response shapes

use serde::{Deserialize, Serialize};

use crate::types::{Category, PostEdge};

pub const GET_CATEGORIES: &str = r#"
  query GetCategories {
    categories {
      name
      slug
    }
  }
"#;

pub const GET_CATEGORY_POSTS: &str = r#"
  query GetCategoryPosts($slug: String!) {
    postsConnection(where: { categories_some: { slug: $slug } }) {
      edges {
        cursor
        node {
          id
          slug
          title
          excerpt
          createdAt
          featuredImage {
            url
          }
          author {
            name
            bio
            photo {
              url
            }
          }
          categories {
            name
            slug
          }
        }
      }
    }
  }
"#;

#[derive(Debug, Deserialize)]
pub struct GetCategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPostsVariables<'a> {
    pub slug: &'a str,
}

/// `postsConnection` and its `edges` may both come back null for an unknown
/// slug; either collapses to an empty list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryPostsResponse {
    #[serde(default)]
    pub posts_connection: Option<PostsConnection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostsConnection {
    #[serde(default)]
    pub edges: Option<Vec<PostEdge>>,
}

impl GetCategoryPostsResponse {
    pub fn into_edges(self) -> Vec<PostEdge> {
        self.posts_connection
            .and_then(|connection| connection.edges)
            .unwrap_or_default()
    }
}
