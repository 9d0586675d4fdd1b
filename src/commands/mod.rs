//! Command implementations.
//!
//! # Modules
//! - `commit` - stage, diff, generate and commit.
//! - `init` - first-run configuration messages.
//!
//! # Architecture
//! ```text
//! main.rs ─> cli.rs (Invocation)
//!         ─> config::load_or_init ─> commands/init.rs (first run)
//!         ─> commands/commit.rs ─> git (CommandRunner) + llm (HttpTransport)
//! ```

/// Commit generation pipeline.
pub mod commit;
/// First-run configuration messages.
pub mod init;

pub use commit::Outcome;
