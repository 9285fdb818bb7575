use std::path::PathBuf;

use crate::error::{Result, ShipitError};
use crate::git::GitOperations;
use crate::git::command::{failure_detail, find_git, run};

/// 通过 git CLI 操作仓库
///
/// 使用 git CLI 而不是 libgit2，以便完整支持 hooks、GPG 签名、
/// credential helper 以及所有 git config 配置。
pub struct GitRepository {
    git: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitRepository {
    /// 在当前工作目录上操作
    pub fn new() -> Result<Self> {
        Ok(Self {
            git: find_git()?,
            workdir: None,
        })
    }

    /// 在指定目录上操作
    pub fn with_workdir(workdir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            git: find_git()?,
            workdir: Some(workdir.into()),
        })
    }

    fn git(&self, args: &[&str]) -> Result<std::process::Output> {
        run(&self.git, self.workdir.as_deref(), args)
    }
}

impl GitOperations for GitRepository {
    fn verify_repo(&self) -> Result<()> {
        let output = self.git(&["rev-parse", "--git-dir"])?;
        if !output.status.success() {
            tracing::debug!("rev-parse failed: {}", failure_detail(&output));
            return Err(ShipitError::NotARepository);
        }
        Ok(())
    }

    fn stage_all(&self) -> Result<()> {
        let output = self.git(&["add", "--all"])?;
        if !output.status.success() {
            return Err(ShipitError::Stage(failure_detail(&output)));
        }
        Ok(())
    }

    fn staged_diff(&self) -> Result<String> {
        let output = self.git(&["diff", "--cached"])?;
        if !output.status.success() {
            return Err(ShipitError::Diff(failure_detail(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let output = self.git(&["commit", "-m", message])?;
        if !output.status.success() {
            return Err(ShipitError::Commit(failure_detail(&output)));
        }
        Ok(())
    }

    fn push(&self) -> Result<()> {
        let output = self.git(&["push"])?;
        if !output.status.success() {
            return Err(ShipitError::Push(failure_detail(&output)));
        }
        Ok(())
    }
}
