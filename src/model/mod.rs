//! 数据模型

use serde::{Deserialize, Serialize};

/// 一条待办事项
///
/// 字段名与 dummyjson 的 wire 格式保持一致（`todo` 即正文）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// 事项 ID（列表内的唯一性来源）
    pub id: u64,
    /// 事项正文
    pub todo: String,
    /// 是否已完成
    pub completed: bool,
}

impl Todo {
    /// 创建未完成的新事项
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            todo: text.into(),
            completed: false,
        }
    }
}
