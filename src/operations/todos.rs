use std::path::PathBuf;

use crate::error::{Result, TidoError};
use crate::model::Todo;
use crate::storage;

/// 待办列表的持有者
///
/// 拥有内存中的有序列表；每次变更后整体写回本地 JSON blob。
/// 远端同步由调用方（App 的后台线程）负责，store 只消费其结果。
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    path: PathBuf,
}

impl TodoStore {
    /// 打开默认路径 (~/.tido/todos.json) 的 store
    ///
    /// 返回 store 和本地缓存是否存在；缓存不存在时调用方需要
    /// 触发一次远端拉取（仅首次运行发生）。
    pub fn open() -> Result<(Self, bool)> {
        let path = storage::todos::todos_file_path()?;
        Self::open_at(path)
    }

    /// 以空列表起步（本地 blob 不可读时的兜底；下一次变更会覆盖它）
    pub fn empty_at(path: PathBuf) -> Self {
        Self {
            todos: Vec::new(),
            path,
        }
    }

    /// 打开指定路径的 store
    pub fn open_at(path: PathBuf) -> Result<(Self, bool)> {
        let loaded = storage::todos::load_todos_from(&path)?;
        let cached = loaded.is_some();
        Ok((
            Self {
                todos: loaded.unwrap_or_default(),
                path,
            },
            cached,
        ))
    }

    /// 当前列表（有序）
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// 按 ID 查找
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// 安装首次拉取的远端列表并持久化
    pub fn install(&mut self, todos: Vec<Todo>) -> Result<()> {
        self.todos = todos;
        self.persist()
    }

    /// 翻转完成状态（乐观更新：先本地持久化，远端确认由调用方跟进）
    ///
    /// 返回翻转后的新值。
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TidoError::not_found(format!("todo {}", id)))?;
        todo.completed = !todo.completed;
        let completed = todo.completed;
        self.persist()?;
        Ok(completed)
    }

    /// 用服务端返回的 completed 值覆盖本地并持久化
    ///
    /// 条目可能已被并发删除，此时静默跳过。
    pub fn confirm_completed(&mut self, id: u64, completed: bool) -> Result<()> {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.completed = completed;
            self.persist()?;
        }
        Ok(())
    }

    /// 移除条目并持久化（仅在远端删除成功后调用）
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return Err(TidoError::not_found(format!("todo {}", id)));
        }
        self.persist()
    }

    /// 追加新条目并持久化，返回分配的 ID
    ///
    /// ID 取 `len + 1`，与观测到的原始行为保持一致：删除后再添加
    /// 会复用已释放的 ID（已知缺陷，保留而非修复，见 DESIGN.md）。
    pub fn add(&mut self, text: impl Into<String>) -> Result<u64> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(TidoError::invalid_data("todo text cannot be empty"));
        }

        let id = self.todos.len() as u64 + 1;
        self.todos.push(Todo::new(id, text));
        self.persist()?;
        Ok(id)
    }

    /// 整体写回本地 blob
    fn persist(&self) -> Result<()> {
        storage::todos::save_todos_to(&self.path, &self.todos)?;
        Ok(())
    }
}
