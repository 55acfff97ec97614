//! Remote poem generation: the fixed prompt template and the HTTP client that
//! carries it to the text-generation endpoint.

pub mod client;
pub mod prompt;

pub use client::{GenerationError, RemoteGenerator};

use async_trait::async_trait;

/// A service able to turn a ready-made prompt into poem text.
///
/// The production implementation is [`RemoteGenerator`]; tests substitute
/// scripted fakes. Implementations must return [`GenerationError::EmptyContent`]
/// rather than blank text so callers never display an empty poem.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
