pub mod config;
pub mod todos;

use std::io;
use std::path::{Path, PathBuf};

/// 获取 ~/.tido/ 目录路径
pub fn tido_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".tido")
}

/// 确保 ~/.tido/ 目录存在
pub fn ensure_tido_dir() -> io::Result<PathBuf> {
    let path = tido_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 JSON 文件加载反序列化数据
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// 将数据序列化后保存到 JSON 文件
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}
