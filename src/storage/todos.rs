use std::io;
use std::path::{Path, PathBuf};

use crate::model::Todo;

use super::{ensure_tido_dir, load_json, save_json};

/// 获取 todos.json 文件路径
pub fn todos_file_path() -> io::Result<PathBuf> {
    let dir = ensure_tido_dir()?;
    Ok(dir.join("todos.json"))
}

/// 从指定路径加载待办列表
///
/// 文件不存在时返回 `None`（区别于空列表：表示本地缓存尚未建立）。
pub fn load_todos_from(path: &Path) -> io::Result<Option<Vec<Todo>>> {
    if !path.exists() {
        return Ok(None);
    }
    let todos = load_json(path)?;
    Ok(Some(todos))
}

/// 将待办列表整体写入指定路径（单个 JSON blob，整体覆盖）
pub fn save_todos_to(path: &Path, todos: &[Todo]) -> io::Result<()> {
    save_json(path, &todos)
}

/// 加载本地待办列表
pub fn load_todos() -> io::Result<Option<Vec<Todo>>> {
    load_todos_from(&todos_file_path()?)
}

/// 删除本地缓存文件（下次启动会重新拉取远端列表）
pub fn clear_todos() -> io::Result<bool> {
    let path = todos_file_path()?;
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(&path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        assert!(load_todos_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");

        let todos = vec![Todo::new(1, "A"), Todo::new(2, "B")];
        save_todos_to(&path, &todos).unwrap();

        let loaded = load_todos_from(&path).unwrap().unwrap();
        assert_eq!(loaded, todos);
    }

    #[test]
    fn test_save_empty_list_is_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");

        save_todos_to(&path, &[]).unwrap();
        let loaded = load_todos_from(&path).unwrap();
        assert_eq!(loaded, Some(Vec::new()));
    }

    #[test]
    fn test_load_rejects_corrupt_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");

        std::fs::write(&path, "not json").unwrap();
        assert!(load_todos_from(&path).is_err());
    }
}
