pub mod command;
pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git 操作的统一接口
///
/// 每个方法对应 ship 流程中的一次 git 调用。主要实现：
/// [`GitRepository`](repository::GitRepository)，它通过子进程调用 `git`。
///
/// # 示例
/// ```no_run
/// use shipit::git::{GitOperations, repository::GitRepository};
///
/// # fn main() -> anyhow::Result<()> {
/// let repo = GitRepository::new()?;
/// repo.verify_repo()?;
/// let diff = repo.staged_diff()?;
/// println!("Staged changes:\n{}", diff);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// 确认当前目录位于 git 仓库内
    ///
    /// 等价于 `git rev-parse --git-dir`。
    ///
    /// # 错误
    /// - [`ShipitError::NotARepository`](crate::error::ShipitError::NotARepository)
    fn verify_repo(&self) -> Result<()>;

    /// 暂存工作区中的所有变更（`git add --all`）
    fn stage_all(&self) -> Result<()>;

    /// 获取 staged changes 的 diff（`git diff --cached`）
    ///
    /// 没有暂存内容时返回空字符串。
    fn staged_diff(&self) -> Result<String>;

    /// 执行 git commit
    ///
    /// message 作为单个参数传给 git，不经过 shell，引号等字符原样保留。
    /// 会触发 pre-commit 和 commit-msg hooks。
    fn commit(&self, message: &str) -> Result<()>;

    /// 推送到当前分支配置的远端（`git push`）
    fn push(&self) -> Result<()>;
}
