//! Path and props resolution for category pages.
//!
//! Neither resolver ever fails to its caller. Every failure is logged and
//! turned into a usable empty payload, tagged with the error so callers and
//! tests can tell "no posts" apart from "fetch failed".

use crate::cms::CmsSource;
use crate::config::Config;
use crate::graphql::{ClientError, GraphQLClient};
use crate::slug::CategorySlug;
use crate::types::{Category, PageProps, PathParams, StaticPaths};

/// Broad class of a fetch failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingConfig,
    Transport,
    MalformedResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingConfig => "missing_config",
            FailureKind::Transport => "transport",
            FailureKind::MalformedResponse => "malformed_response",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("GraphCMS endpoint is not defined")]
    MissingEndpoint,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::MissingEndpoint => FailureKind::MissingConfig,
            FetchError::Client(ClientError::Network(err)) if err.is_decode() => {
                FailureKind::MalformedResponse
            }
            FetchError::Client(ClientError::Network(_) | ClientError::Http { .. }) => {
                FailureKind::Transport
            }
            FetchError::Client(
                ClientError::GraphQL(_) | ClientError::NoData | ClientError::Serialization(_),
            ) => FailureKind::MalformedResponse,
        }
    }
}

/// Outcome of a resolver call. Both variants carry a payload the page can
/// render.
#[derive(Debug)]
pub enum Fetched<T> {
    Ok(T),
    Degraded { fallback: T, error: FetchError },
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Fetched::Ok(value) => value,
            Fetched::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Ok(value) => value,
            Fetched::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Fetched::Ok(_) => None,
            Fetched::Degraded { error, .. } => Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded { .. })
    }
}

/// Category paths resolved together with the categories they came from.
/// The categories feed the sidebar widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPaths {
    pub static_paths: StaticPaths,
    pub categories: Vec<Category>,
}

/// Resolves category routes and page props against a content source.
///
/// A resolver without a source stands for a missing endpoint: it issues no
/// requests and degrades every call.
pub struct CategoryResolver<S> {
    source: Option<S>,
}

impl CategoryResolver<GraphQLClient> {
    /// Build a resolver pointed at the configured endpoint, if any
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: config.graphcms_endpoint.as_deref().map(GraphQLClient::new),
        }
    }
}

impl<S: CmsSource> CategoryResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn unconfigured() -> Self {
        Self { source: None }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    /// Enumerate the category routes to prerender.
    ///
    /// On success every category becomes a path and unknown slugs may render
    /// on demand. On any failure no paths are returned and on-demand
    /// rendering is disabled.
    pub async fn resolve_paths(&self) -> Fetched<StaticPaths> {
        match self.resolve_categories().await {
            Fetched::Ok(resolved) => Fetched::Ok(resolved.static_paths),
            Fetched::Degraded { fallback, error } => Fetched::Degraded {
                fallback: fallback.static_paths,
                error,
            },
        }
    }

    /// Same as [`resolve_paths`](Self::resolve_paths) but keeps the category
    /// list for the sidebar.
    pub async fn resolve_categories(&self) -> Fetched<ResolvedPaths> {
        let result = match &self.source {
            Some(source) => source.categories().await.map_err(FetchError::from),
            None => Err(FetchError::MissingEndpoint),
        };

        match result {
            Ok(fetched) => {
                // Paths and sidebar entries share one list so neither links a blank slug.
                let mut paths = Vec::with_capacity(fetched.len());
                let mut categories = Vec::with_capacity(fetched.len());
                for category in fetched {
                    match CategorySlug::parse(category.slug.clone()) {
                        Ok(slug) => {
                            paths.push(PathParams { slug });
                            categories.push(category);
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Skipping category without a usable slug");
                        }
                    }
                }

                tracing::debug!(count = paths.len(), "Resolved category paths");

                Fetched::Ok(ResolvedPaths {
                    static_paths: StaticPaths {
                        paths,
                        fallback: true,
                    },
                    categories,
                })
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    kind = error.kind().as_str(),
                    "Error resolving category paths, check the endpoint"
                );
                Fetched::Degraded {
                    fallback: ResolvedPaths {
                        static_paths: StaticPaths::closed(),
                        categories: Vec::new(),
                    },
                    error,
                }
            }
        }
    }

    /// Fetch the posts for one category page. Always yields a post list.
    pub async fn resolve_props(&self, slug: &CategorySlug) -> Fetched<PageProps> {
        let Some(source) = &self.source else {
            let error = FetchError::MissingEndpoint;
            tracing::error!(slug = %slug, kind = error.kind().as_str(), "{}", error);
            return Fetched::Degraded {
                fallback: PageProps::default(),
                error,
            };
        };

        match source.posts_by_category(slug).await {
            Ok(posts) => {
                tracing::debug!(slug = %slug, count = posts.len(), "Resolved category posts");
                Fetched::Ok(PageProps { posts })
            }
            Err(err) => {
                let error = FetchError::from(err);
                tracing::error!(
                    slug = %slug,
                    error = %error,
                    kind = error.kind().as_str(),
                    "Error resolving category props"
                );
                Fetched::Degraded {
                    fallback: PageProps::default(),
                    error,
                }
            }
        }
    }
}
