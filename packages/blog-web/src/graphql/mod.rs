//! GraphQL client for communicating with the CMS

mod client;
mod queries;

pub use client::*;
pub use queries::*;
