//! LLM abstractions and the commit message generator interface.
//!
//! The ship workflow only needs one capability from a model: turn a staged
//! diff into a commit message draft.

/// Commit message post-processing.
pub mod message;
/// Prompt construction.
pub mod prompt;
/// Built-in provider implementation and HTTP client setup.
pub mod provider;

use async_trait::async_trait;

use crate::error::Result;

/// Generates a commit message draft from a diff.
///
/// Implementations return the raw model text; callers clean it with
/// [`message::clean_commit_message`].
///
/// # Custom Generator Example
/// ```no_run
/// use async_trait::async_trait;
/// use shipit::error::Result;
/// use shipit::llm::CommitMessageGenerator;
///
/// struct Fixed;
///
/// #[async_trait]
/// impl CommitMessageGenerator for Fixed {
///     async fn generate(&self, _diff: &str) -> Result<Option<String>> {
///         Ok(Some("chore: update".to_string()))
///     }
///
///     fn name(&self) -> &str {
///         "fixed"
///     }
/// }
/// ```
#[async_trait]
pub trait CommitMessageGenerator: Send + Sync {
    /// Sends `diff` to the model.
    ///
    /// Returns `Ok(None)` when the reply carries no message text.
    async fn generate(&self, diff: &str) -> Result<Option<String>>;

    /// Provider name (used for logs).
    fn name(&self) -> &str;
}
