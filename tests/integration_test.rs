//! 集成测试
//!
//! 测试首次运行、配置编辑、参数解析到 prompt 生成的完整流程

use std::fs;

use aicommit::cli::parse_invocation;
use aicommit::config::{ConfigStatus, config_path_in, load_or_init_at};
use aicommit::error::AicommitError;
use aicommit::llm::prompt::build_commit_prompt;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// 首次运行创建配置，用户填写 key 后第二次运行可以加载
#[test]
fn test_first_run_then_edit_then_ready() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());

    // 第一次：创建默认配置
    match load_or_init_at(&path).unwrap() {
        ConfigStatus::Created(created) => assert_eq!(created, path),
        other => panic!("expected Created, got {other:?}"),
    }

    // 第二次：api_key 仍为空
    let err = load_or_init_at(&path).unwrap_err();
    assert!(matches!(err, AicommitError::MissingApiKey { .. }));
    assert!(err.suggestion().is_some());

    // 用户编辑配置
    let mut json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    json["api_key"] = "sk-live".into();
    json["default_lang"] = "zh".into();
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    // 第三次：配置可用
    let ConfigStatus::Ready(config) = load_or_init_at(&path).unwrap() else {
        panic!("expected Ready");
    };
    assert_eq!(config.api_key, "sk-live");
    assert_eq!(config.default_lang, "zh");
    assert_eq!(config.model, "gpt-4o");
}

/// 命令行的 --lang 覆盖配置文件中的语言，并出现在 prompt 中
#[test]
fn test_cli_overrides_reach_prompt() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"api_key":"sk-live","default_lang":"zh"}"#).unwrap();

    let ConfigStatus::Ready(config) = load_or_init_at(&path).unwrap() else {
        panic!("expected Ready");
    };
    let invocation = parse_invocation(["aicommit", "--lang=fr", "--notes=closes #12"]);
    let config = config.with_language(invocation.lang.as_deref());

    let prompt = build_commit_prompt("+fn main() {}\n", &config.default_lang, &invocation.notes);

    assert!(prompt.contains("in the following languages: fr."));
    assert!(prompt.contains("+fn main() {}"));
    assert!(prompt.ends_with(" closes #12 \n\n"));
}

/// 不带 --lang 时使用配置中的语言
#[test]
fn test_config_language_used_without_flag() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"api_key":"sk-live","default_lang":"ja"}"#).unwrap();

    let ConfigStatus::Ready(config) = load_or_init_at(&path).unwrap() else {
        panic!("expected Ready");
    };
    let invocation = parse_invocation(["aicommit"]);
    let config = config.with_language(invocation.lang.as_deref());

    assert_eq!(config.default_lang, "ja");
    assert_eq!(invocation.notes, "");
}

/// 配置文件损坏时给出解析错误和修复建议
#[test]
fn test_corrupt_config_reports_parse_error() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ api_key: ").unwrap();

    let err = load_or_init_at(&path).unwrap_err();
    assert!(matches!(err, AicommitError::ConfigParse(_)));
    assert!(err.suggestion().is_some());
}
