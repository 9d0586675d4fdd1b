#[macro_use]
extern crate rust_i18n;

// Re-export all library modules
use aicommit::*;

use anyhow::Result;
use config::ConfigStatus;

// Initialize i18n for binary crate
// This ensures translations are available in main.rs context
i18n!("locales", fallback = "en");

fn main() -> Result<()> {
    human_panic::setup_panic!();

    // 在解析 CLI 之前初始化语言（支持多语言 help text）
    init_locale_early();

    let invocation = cli::parse_invocation(std::env::args_os());

    init_tracing(invocation.verbose);

    let colored = console::colors_enabled();

    // 无法识别的参数只显示帮助，不算错误
    if let Some(arg) = &invocation.unknown {
        ui::warning(
            &rust_i18n::t!("cli.unknown_parameter", arg = arg),
            colored,
        );
    }
    if invocation.show_help {
        cli::print_help()?;
        return Ok(());
    }
    if invocation.show_version {
        cli::print_version();
        return Ok(());
    }

    // reqwest 使用 rustls-no-provider，需要在创建 Client 之前安装
    let _ = rustls::crypto::ring::default_provider().install_default();

    if let Err(e) = run(&invocation, colored) {
        ui::error(&e.localized_message(), colored);
        if let Some(suggestion) = e.suggestion() {
            println!();
            println!("{}", ui::info(&suggestion, colored));
        }
        std::process::exit(1);
    }

    Ok(())
}

/// 加载配置并执行 commit 流程
fn run(invocation: &cli::Invocation, colored: bool) -> error::Result<()> {
    let config = match config::load_or_init()? {
        ConfigStatus::Ready(config) => config,
        ConfigStatus::Created(path) => {
            // 首次运行：写入默认配置后正常退出
            commands::init::report_created(&path, colored);
            return Ok(());
        }
    };

    // 单线程运行时：整个流程是顺序执行的，只有 HTTP 请求需要 async
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = rt.block_on(commands::commit::run(invocation, config, colored))?;
    commands::commit::report(&outcome, colored);
    Ok(())
}

/// 根据 verbose 标志设置日志级别，日志输出到 stderr
fn init_tracing(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();
}

/// Initialize locale early in the startup process
///
/// Priority order:
/// 1. Environment variable AICOMMIT_UI_LANGUAGE (highest priority)
/// 2. System locale detection
/// 3. Fallback to English
fn init_locale_early() {
    let locale = std::env::var("AICOMMIT_UI_LANGUAGE")
        .ok()
        .filter(|l| !l.trim().is_empty())
        .or_else(sys_locale::get_locale)
        .map(|l| normalize_locale(&l))
        .unwrap_or_else(|| "en".to_string());

    rust_i18n::set_locale(&locale);
}

/// "zh_CN" / "zh-Hans-CN" / "zh" -> "zh-CN"，其余取语言部分
fn normalize_locale(locale: &str) -> String {
    let locale = locale.replace('_', "-");
    let lang = locale.split('-').next().unwrap_or("en").to_lowercase();
    if lang == "zh" {
        "zh-CN".to_string()
    } else {
        lang
    }
}
