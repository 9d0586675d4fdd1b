use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Command, CommandFactory, FromArgMatches, Parser, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(author, version, long_about = None)]
#[command(styles = STYLES)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Language of the commit message (default: read from the config file)
    #[arg(long, value_name = "LANG", require_equals = true)]
    pub lang: Option<String>,

    /// Extra notes appended to the prompt
    #[arg(
        long,
        value_name = "TEXT",
        require_equals = true,
        allow_hyphen_values = true
    )]
    pub notes: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// 一次调用的命令行参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// 覆盖配置中的 `default_lang`，仅对本次运行生效
    pub lang: Option<String>,
    /// 原样追加到 prompt 末尾
    pub notes: String,
    pub verbose: bool,
    /// `-h`/`--help`，或者遇到无法识别的参数
    pub show_help: bool,
    pub show_version: bool,
    /// 无法识别的参数（会触发帮助信息，但不算错误）
    pub unknown: Option<String>,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Self {
            lang: cli.lang,
            notes: cli.notes.unwrap_or_default(),
            verbose: cli.verbose,
            ..Default::default()
        }
    }
}

/// 解析命令行参数（第一个元素为程序名）
///
/// 不会退出进程：help、version 和无法识别的参数都记录在返回值中，
/// 由 `main` 决定输出什么。
pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match localized_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => return invocation_from_error(&e),
    };

    match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli.into(),
        Err(e) => invocation_from_error(&e),
    }
}

fn invocation_from_error(e: &clap::Error) -> Invocation {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Invocation {
                show_help: true,
                ..Default::default()
            }
        }
        ErrorKind::DisplayVersion => Invocation {
            show_version: true,
            ..Default::default()
        },
        kind => {
            let arg = match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => kind.to_string(),
            };
            tracing::debug!("Unrecognized arguments: {}", e);
            Invocation {
                show_help: true,
                unknown: Some(arg),
                ..Default::default()
            }
        }
    }
}

/// clap Command with localized help text
///
/// Uses clap's derive + runtime override pattern:
/// 1. Get Command from derive macro (type-safe parsing)
/// 2. Override help text at runtime with rust_i18n::t!()
pub fn localized_command() -> Command {
    Cli::command()
        .about(rust_i18n::t!("cli.about").to_string())
        .after_help(rust_i18n::t!("cli.after_help").to_string())
        .mut_arg("lang", |arg| arg.help(rust_i18n::t!("cli.lang").to_string()))
        .mut_arg("notes", |arg| {
            arg.help(rust_i18n::t!("cli.notes").to_string())
        })
        .mut_arg("verbose", |arg| {
            arg.help(rust_i18n::t!("cli.verbose").to_string())
        })
}

/// 输出帮助信息
pub fn print_help() -> std::io::Result<()> {
    localized_command().print_help()
}

/// 输出版本信息
pub fn print_version() {
    print!("{}", localized_command().render_version());
}
