pub mod runner;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use runner::GitCli;

/// 执行 git 子命令的统一接口
///
/// 主要实现：[`GitCli`]（调用 `PATH` 中的 git 可执行文件）。
/// 测试中通过 `mockall` 生成的 `MockCommandRunner` 替换。
///
/// # 返回
/// - `Ok(stdout)` - 命令成功退出时的标准输出
/// - `Err(_)` - 无法启动或以非零状态退出
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> Result<String>;
}

/// Git 操作：暂存、状态、diff 和提交
///
/// 每个操作都是对 runner 的一次调用，失败直接向上传播，没有重试。
///
/// # 示例
/// ```no_run
/// use aicommit::git::{Git, GitCli};
///
/// # fn main() -> aicommit::error::Result<()> {
/// let git = Git::new(GitCli::new()?);
/// git.add_all()?;
/// let diff = git.combined_diff()?;
/// if !diff.is_empty() {
///     git.commit("Update docs")?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct Git<R> {
    runner: R,
}

impl<R: CommandRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        tracing::debug!("git {}", args.join(" "));
        self.runner.run(&args)
    }

    /// `git add .`
    pub fn add_all(&self) -> Result<()> {
        self.run(&["add", "."]).map(|_| ())
    }

    /// `git status`
    pub fn status(&self) -> Result<String> {
        self.run(&["status"])
    }

    /// 工作区相对暂存区的 diff（`git diff`）
    pub fn working_diff(&self) -> Result<String> {
        self.run(&["diff"])
    }

    /// 暂存区相对 HEAD 的 diff（`git diff --cached`）
    pub fn staged_diff(&self) -> Result<String> {
        self.run(&["diff", "--cached"])
    }

    /// 未暂存 diff 在前，已暂存 diff 在后，直接拼接
    pub fn combined_diff(&self) -> Result<String> {
        let working = self.working_diff()?;
        let staged = self.staged_diff()?;
        Ok(working + &staged)
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }
}
