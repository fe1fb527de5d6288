//! Doodle provider trait.

use crate::doodle::types::{Doodle, DoodleRequest};
use crate::error::Result;
use async_trait::async_trait;

/// Trait for doodle generation backends.
#[async_trait]
pub trait DoodleProvider: Send + Sync {
    /// Generates a doodle from the given request.
    ///
    /// Implementations fail fast on an empty prompt and never retry: a
    /// failed generation surfaces to the caller as-is.
    async fn generate(&self, request: &DoodleRequest) -> Result<Doodle>;

    /// Returns the name of this provider for display and logs.
    fn name(&self) -> &'static str;
}
