//! The ship workflow: stage, describe, commit, push.
//!
//! # Stages
//! ```text
//! VerifyRepo ─> Stage ─> Diff ─┬─> Authenticate ─> Generate ─> Commit ─> Push
//!                              └─> (empty diff) NoChanges
//! ```
//!
//! Every stage either succeeds or returns a typed [`ShipitError`]; the first
//! failure ends the run. Nothing is retried and nothing already done is
//! rolled back: a failed generation leaves the changes staged, a failed push
//! leaves the local commit in place.

use std::fmt;

use crate::config::{ConfigStore, Credentials};
use crate::error::{Result, ShipitError};
use crate::git::{GitOperations, repository::GitRepository};
use crate::llm::CommitMessageGenerator;
use crate::llm::message::clean_commit_message;
use crate::llm::provider::openrouter::OpenRouterClient;
use crate::ui;

/// Workflow stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStage {
    VerifyRepo,
    Stage,
    Diff,
    Authenticate,
    Generate,
    Commit,
    Push,
}

impl ShipStage {
    /// All stages in order.
    pub const ALL: [ShipStage; 7] = [
        ShipStage::VerifyRepo,
        ShipStage::Stage,
        ShipStage::Diff,
        ShipStage::Authenticate,
        ShipStage::Generate,
        ShipStage::Commit,
        ShipStage::Push,
    ];

    /// 1-based position, used in `[n/7]` step labels.
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    /// Progress text shown when the stage starts.
    pub fn description(self) -> &'static str {
        match self {
            ShipStage::VerifyRepo => "checking repository...",
            ShipStage::Stage => "staging changes...",
            ShipStage::Diff => "reading staged diff...",
            ShipStage::Authenticate => "loading API key...",
            ShipStage::Generate => "generating commit message...",
            ShipStage::Commit => "committing...",
            ShipStage::Push => "pushing changes...",
        }
    }

    fn report(self, colored: bool) {
        tracing::debug!("Entering stage {}", self);
        ui::step(
            &format!("{}/{}", self.position(), Self::ALL.len()),
            self.description(),
            colored,
        );
    }
}

impl fmt::Display for ShipStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipStage::VerifyRepo => "verify-repo",
            ShipStage::Stage => "stage",
            ShipStage::Diff => "diff",
            ShipStage::Authenticate => "authenticate",
            ShipStage::Generate => "generate",
            ShipStage::Commit => "commit",
            ShipStage::Push => "push",
        };
        f.write_str(name)
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipOutcome {
    /// Nothing was staged; no commit or push happened.
    NoChanges,
    /// A commit with `message` was created and pushed.
    Shipped { message: String },
}

/// 执行 ship 命令
pub async fn run(store: &ConfigStore, colored: bool) -> Result<ShipOutcome> {
    let repo = GitRepository::new()?;
    run_with_deps(&repo, store, default_generator, colored).await
}

fn default_generator(credentials: &Credentials) -> Result<Box<dyn CommitMessageGenerator>> {
    Ok(Box::new(OpenRouterClient::new(credentials)?))
}

/// 执行 ship 流程（可测试版本，接受 trait 对象）
///
/// `make_generator` is only called once a credential has been resolved, so a
/// run without a credential never reaches the remote service.
pub async fn run_with_deps<F>(
    git: &dyn GitOperations,
    store: &ConfigStore,
    make_generator: F,
    colored: bool,
) -> Result<ShipOutcome>
where
    F: FnOnce(&Credentials) -> Result<Box<dyn CommitMessageGenerator>>,
{
    ShipStage::VerifyRepo.report(colored);
    git.verify_repo()?;

    ShipStage::Stage.report(colored);
    git.stage_all()?;

    ShipStage::Diff.report(colored);
    let diff = git.staged_diff()?;
    if diff.trim().is_empty() {
        println!("{}", ui::info("no changes detected", colored));
        return Ok(ShipOutcome::NoChanges);
    }
    tracing::debug!("Staged diff: {} bytes", diff.len());

    ShipStage::Authenticate.report(colored);
    let credentials = Credentials::resolve(&store.load()?).ok_or(ShipitError::MissingCredential)?;
    let generator = make_generator(&credentials)?;

    ShipStage::Generate.report(colored);
    let raw = {
        let spinner = ui::Spinner::new(
            &format!("asking {} ({})...", generator.name(), credentials.model),
            colored,
        );
        let raw = generator.generate(&diff).await?;
        spinner.finish_and_clear();
        raw
    };
    let message = clean_commit_message(raw.as_deref());
    println!("\ncommit message: {}\n", message);

    ShipStage::Commit.report(colored);
    git.commit(&message)?;

    ShipStage::Push.report(colored);
    git.push()?;

    ui::success("all shipped!", colored);
    Ok(ShipOutcome::Shipped { message })
}
