//! Content source trait.
//!
//! The resolvers only need two operations from the CMS. `GraphQLClient`
//! implements them over HTTP; `testing::MockCms` implements them in memory.

use async_trait::async_trait;

use crate::graphql::{
    CategoryPostsVariables, ClientError, GetCategoriesResponse, GetCategoryPostsResponse,
    GraphQLClient, GET_CATEGORIES, GET_CATEGORY_POSTS,
};
use crate::slug::CategorySlug;
use crate::types::{Category, PostEdge};

#[async_trait]
pub trait CmsSource: Send + Sync {
    /// Every category known to the CMS.
    async fn categories(&self) -> Result<Vec<Category>, ClientError>;

    /// Posts tagged with `slug`, in the order the CMS returns them.
    ///
    /// A missing connection or edge list is an empty result, not an error.
    async fn posts_by_category(&self, slug: &CategorySlug) -> Result<Vec<PostEdge>, ClientError>;
}

#[async_trait]
impl CmsSource for GraphQLClient {
    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        let response: GetCategoriesResponse = self.query(GET_CATEGORIES, None::<()>).await?;
        Ok(response.categories)
    }

    async fn posts_by_category(&self, slug: &CategorySlug) -> Result<Vec<PostEdge>, ClientError> {
        let variables = CategoryPostsVariables { slug: slug.as_str() };
        let response: GetCategoryPostsResponse =
            self.query(GET_CATEGORY_POSTS, Some(variables)).await?;
        Ok(response.into_edges())
    }
}
