//! GraphQL client for making requests to the CMS content API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Option<Vec<GraphQLErrorLocation>>,
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// Error type for GraphQL operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GraphQL client for making requests
#[derive(Clone, Debug)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a GraphQL query
    ///
    /// The body is read as text and decoded separately so that an unreadable
    /// body (transport) and an unexpected shape (serialization) stay distinct.
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let graphql_response: GraphQLResponse<R> = serde_json::from_str(&body)?;

        if let Some(errors) = graphql_response.errors {
            if let Some(first_error) = errors.first() {
                return Err(ClientError::GraphQL(first_error.message.clone()));
            }
        }

        graphql_response.data.ok_or(ClientError::NoData)
    }
}
