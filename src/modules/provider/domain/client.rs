use async_trait::async_trait;

use super::candidate::MovieCandidate;
use crate::shared::errors::AppResult;

/// Outbound title lookup against an external film metadata provider.
///
/// `Ok(None)` is the provider's "no match" answer and is a normal outcome,
/// not an error. Transport failures and malformed responses surface as
/// errors and are never retried here.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn lookup(&self, title: &str) -> AppResult<Option<MovieCandidate>>;
}
