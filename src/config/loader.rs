// 配置加载逻辑
//
// 此文件负责定位、首次创建和读取 ~/.aicommit/config.json。

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::schema::Config;
use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{AicommitError, Result};
use crate::llm::utils::mask_api_key;

/// [`load_or_init`] 的结果
#[derive(Debug)]
pub enum ConfigStatus {
    /// 配置可用（已应用默认值）
    Ready(Config),
    /// 首次运行：默认配置已写入该路径，需要用户编辑后再运行
    Created(PathBuf),
}

/// 加载配置，不存在时创建默认配置
///
/// 路径固定为 `~/.aicommit/config.json`。
pub fn load_or_init() -> Result<ConfigStatus> {
    load_or_init_at(&get_config_path()?)
}

/// 从指定路径加载配置，不存在时创建默认配置
pub fn load_or_init_at(path: &Path) -> Result<ConfigStatus> {
    if !path.exists() {
        write_default_config(path)?;
        return Ok(ConfigStatus::Created(path.to_path_buf()));
    }

    load_config_from(path).map(ConfigStatus::Ready)
}

/// 读取并校验已有的配置文件
///
/// # 错误
/// - [`AicommitError::ConfigParse`] - 文件不是合法 JSON
/// - [`AicommitError::MissingApiKey`] - `api_key` 为空
pub fn load_config_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {}", path.display());

    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate(path)?;
    let config = config.with_fallbacks();

    tracing::debug!(
        "Config loaded: endpoint={}, model={}, lang={}, max_tokens={}, temperature={}, proxy={:?}, api_key={}",
        config.openai_endpoint,
        config.model,
        config.default_lang,
        config.max_tokens,
        config.temperature,
        config.proxy_url,
        mask_api_key(&config.api_key)
    );

    Ok(config)
}

/// 写入默认配置文件（会创建父目录）
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(path, json)?;

    // 文件中会保存 API key，仅限当前用户读写
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    tracing::info!("Default config written to {}", path.display());
    Ok(())
}

/// 获取配置文件路径
///
/// 返回 ~/.aicommit/config.json
pub fn get_config_path() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| config_path_in(dirs.home_dir()))
        .ok_or_else(|| AicommitError::Config("Could not determine home directory".to_string()))
}

/// 给定主目录下的配置文件路径
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}
