//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;

use super::tido_dir;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL 覆盖（默认 dummyjson）
    #[serde(default)]
    pub base_url: Option<String>,
}

/// 同步状态记录
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncConfig {
    /// 最近一次成功拉取远端列表的时间 (RFC 3339)
    #[serde(default)]
    pub last_fetch: Option<String>,
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    tido_dir().join("config.toml")
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> io::Result<()> {
    // 确保 ~/.tido 目录存在
    let dir = tido_dir();
    fs::create_dir_all(&dir)?;

    let path = config_path();
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, content)
}

/// 记录一次成功的远端拉取
pub fn record_last_fetch() {
    let mut config = load_config();
    config.sync.last_fetch = Some(Utc::now().to_rfc3339());
    let _ = save_config(&config);
}
