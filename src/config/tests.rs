// 配置模块测试
//
// 此文件包含所有配置相关的测试。

use super::*;
use crate::error::AicommitError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = config_path_in(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

// === 默认值测试 ===

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(
        config.openai_endpoint,
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(config.api_key, "");
    assert_eq!(config.default_lang, "en");
    assert_eq!(config.proxy_url, None);
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.max_tokens, 500);
    assert_eq!(config.temperature, 0.7);
}

#[test]
fn test_fallbacks_fill_empty_and_non_positive_fields() {
    let config = Config {
        openai_endpoint: String::new(),
        api_key: "sk-test".to_string(),
        default_lang: "  ".to_string(),
        proxy_url: Some(String::new()),
        model: String::new(),
        max_tokens: -3,
        temperature: 0.0,
    }
    .with_fallbacks();

    assert_eq!(
        config,
        Config {
            api_key: "sk-test".to_string(),
            ..Config::default()
        }
    );
}

#[test]
fn test_fallbacks_keep_explicit_values() {
    let config = Config {
        openai_endpoint: "https://llm.internal/v1/chat/completions".to_string(),
        api_key: "sk-test".to_string(),
        default_lang: "zh".to_string(),
        proxy_url: Some("http://127.0.0.1:7890".to_string()),
        model: "gpt-4o-mini".to_string(),
        max_tokens: 128,
        temperature: 0.2,
    };

    assert_eq!(config.clone().with_fallbacks(), config);
}

#[test]
fn test_language_override() {
    let config = Config::default();
    assert_eq!(config.clone().with_language(Some("fr")).default_lang, "fr");
    assert_eq!(config.clone().with_language(Some("")).default_lang, "en");
    assert_eq!(config.with_language(None).default_lang, "en");
}

#[test]
fn test_default_document_omits_empty_proxy() {
    let json = serde_json::to_value(Config::default()).unwrap();
    assert!(json.get("proxy_url").is_none());
    assert_eq!(json["max_tokens"], 500);
    assert_eq!(json["api_key"], "");
}

// === 加载测试 ===

#[test]
fn test_first_run_creates_default_config() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());
    assert!(!path.exists());

    let status = load_or_init_at(&path).unwrap();

    match status {
        ConfigStatus::Created(created) => assert_eq!(created, path),
        other => panic!("expected Created, got {:?}", other),
    }
    let written: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn test_second_run_after_first_run_reports_missing_key() {
    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());

    load_or_init_at(&path).unwrap();
    let err = load_or_init_at(&path).unwrap_err();

    assert!(matches!(err, AicommitError::MissingApiKey { path: p } if p == path));
}

#[cfg(unix)]
#[test]
fn test_default_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let path = config_path_in(home.path());
    write_default_config(&path).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_empty_api_key_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, r#"{"api_key": "   ", "model": "gpt-4o"}"#);

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, AicommitError::MissingApiKey { .. }));
}

#[test]
fn test_missing_fields_use_defaults() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, r#"{"api_key": "sk-test"}"#);

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.api_key, "sk-test");
    assert_eq!(
        config.openai_endpoint,
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(config.default_lang, "en");
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.max_tokens, 500);
    assert_eq!(config.temperature, 0.7);
}

#[test]
fn test_null_fields_use_defaults() {
    let home = TempDir::new().unwrap();
    let path = write_config(
        &home,
        r#"{"api_key":"sk-x","max_tokens":null,"temperature":null,"model":null,"default_lang":null,"openai_endpoint":null,"proxy_url":null}"#,
    );

    let config = load_config_from(&path).unwrap();

    assert_eq!(
        config,
        Config {
            api_key: "sk-x".to_string(),
            ..Config::default()
        }
    );
}

#[test]
fn test_null_api_key_is_missing_key() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, r#"{"api_key": null}"#);

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, AicommitError::MissingApiKey { .. }));
}

#[test]
fn test_loading_does_not_rewrite_file() {
    let home = TempDir::new().unwrap();
    let raw = r#"{"api_key": "sk-test", "max_tokens": 0}"#;
    let path = write_config(&home, raw);

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.max_tokens, 500);
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn test_invalid_json_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "{ api_key: sk-test ");

    let err = load_or_init_at(&path).unwrap_err();
    assert!(matches!(err, AicommitError::ConfigParse(_)));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, r#"{"api_key": "sk-test", "theme": "dark"}"#);

    assert!(load_config_from(&path).is_ok());
}

// === 路径函数测试 ===

#[test]
fn test_config_path_layout() {
    let path = config_path_in(Path::new("/home/alice"));
    assert_eq!(path, Path::new("/home/alice/.aicommit/config.json"));
}

#[test]
fn test_get_config_path_has_json_suffix() {
    let path = get_config_path().unwrap();
    assert!(path.ends_with(".aicommit/config.json"));
}
