use colored::Colorize;

use crate::cli::Invocation;
use crate::config::Config;
use crate::error::{AicommitError, Result};
use crate::git::{CommandRunner, Git, GitCli};
use crate::llm::{CommitMessageGenerator, HttpTransport, ReqwestTransport};
use crate::ui;

/// 一次运行的结果（两者都以退出码 0 结束）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 工作区和暂存区都没有差异，未调用 API
    NoDiff,
    /// 已用该 message 提交
    Committed(String),
}

/// 执行完整流程：暂存 → 状态 → diff → 生成 → 提交
///
/// 使用 `PATH` 中的 git 和 `reqwest` transport。
pub async fn run(invocation: &Invocation, config: Config, colored: bool) -> Result<Outcome> {
    let git = Git::new(GitCli::new()?);
    let transport = ReqwestTransport::new(config.proxy_url.as_deref())?;

    run_with_deps(invocation, config, &git, transport, colored).await
}

/// 执行完整流程（可测试版本，注入 git runner 和 HTTP transport）
///
/// 任一步骤失败立即返回，不做重试。diff 为空时不会构造请求。
pub async fn run_with_deps<R, T>(
    invocation: &Invocation,
    config: Config,
    git: &Git<R>,
    transport: T,
    colored: bool,
) -> Result<Outcome>
where
    R: CommandRunner,
    T: HttpTransport,
{
    let config = config.with_language(invocation.lang.as_deref());

    // 1. 暂存所有变更
    git.add_all()?;

    // 2. 显示工作区状态（仅供参考）
    ui::step("1/3", &rust_i18n::t!("commit.checking_status"), colored);
    let status = git.status()?;
    print!("{}", status);

    // 3. 计算 diff
    let diff = git.combined_diff()?;
    if diff.is_empty() {
        tracing::debug!("Both working tree and staged diffs are empty");
        return Ok(Outcome::NoDiff);
    }
    tracing::debug!("Diff payload: {} bytes", diff.len());

    // 4. 生成 commit message
    ui::step("2/3", &rust_i18n::t!("commit.generating"), colored);
    let generator = CommitMessageGenerator::new(&config, transport);
    let spinner = ui::Spinner::new(&rust_i18n::t!("commit.generating"));
    let generated = generator
        .generate(&diff, &config.default_lang, &invocation.notes)
        .await;
    spinner.finish_and_clear();

    let message = generated?;
    if message.is_empty() {
        return Err(AicommitError::EmptyCompletion);
    }

    // 5. 提交
    ui::step("3/3", &rust_i18n::t!("commit.committing"), colored);
    git.commit(&message)?;

    Ok(Outcome::Committed(message))
}

/// 输出运行结果
pub fn report(outcome: &Outcome, colored: bool) {
    match outcome {
        Outcome::NoDiff => {
            println!("{}", ui::info(&rust_i18n::t!("commit.no_diff"), colored));
        }
        Outcome::Committed(message) => {
            ui::success(&rust_i18n::t!("commit.complete"), colored);
            println!();
            if colored {
                println!("{}", message.bold());
            } else {
                println!("{}", message);
            }
        }
    }
}
