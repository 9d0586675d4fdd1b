use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use which::which;

use super::CommandRunner;
use crate::error::{AicommitError, Result};

/// Runs the `git` executable found on `PATH` in the current directory.
///
/// Uses the git CLI rather than a library binding so that hooks, GPG signing
/// and the user's git config all apply to the commit.
pub struct GitCli {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Locates `git` on `PATH`.
    pub fn new() -> Result<Self> {
        let program = which("git").map_err(|e| {
            AicommitError::GitCommand(format!("git executable not found in PATH: {}", e))
        })?;
        Ok(Self {
            program,
            work_dir: None,
        })
    }

    /// Runs git inside `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }
}

impl CommandRunner for GitCli {
    fn run(&self, args: &[String]) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }
        let output = command.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let error_msg = if stderr.trim().is_empty() {
                // Some git errors are output to stdout instead of stderr
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(AicommitError::GitCommand(format!(
                "git {} ({}): {}",
                args.first().map(String::as_str).unwrap_or_default(),
                output.status,
                error_msg
            )));
        }

        if let Err(e) = forward_stderr(&output.stderr, &mut std::io::stderr().lock()) {
            tracing::debug!("Failed to forward git stderr: {}", e);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// 成功时 git 写到 stderr 的内容（CRLF 警告、hook 输出等）原样转发
fn forward_stderr(stderr: &[u8], out: &mut impl Write) -> std::io::Result<()> {
    if stderr.is_empty() {
        return Ok(());
    }
    out.write_all(stderr)?;
    out.flush()
}
