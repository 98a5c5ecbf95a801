use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::api::RemoteApi;
use crate::error::{Result, TidoError};
use crate::model::Todo;
use crate::operations::todos::TodoStore;
use crate::storage;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// 待办列表
    Home,
    /// 静态说明页
    Details,
}

/// 后台网络操作的结果（工作线程经 channel 回传，主循环消费）
#[derive(Debug)]
pub enum BgResult {
    /// 首次远端拉取
    Fetched(Result<Vec<Todo>>),
    /// PUT /todos/{id} 的响应（服务端版本的条目）
    Toggled { id: u64, result: Result<Todo> },
    /// DELETE /todos/{id} 的响应
    Deleted { id: u64, result: Result<()> },
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前屏幕
    pub mode: AppMode,
    /// 待办 store（拥有列表，负责本地持久化）
    pub store: TodoStore,
    /// 初始加载是否仍在进行（显示 Loading 占位）
    pub loading: bool,
    /// 列表选择状态
    pub list_state: ListState,
    /// 当前主题（Night Mode 开关，不持久化）
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 是否显示 Add Todo 弹窗
    pub show_add_dialog: bool,
    /// Add Todo 输入内容
    pub add_input: String,
    /// 远端 API 客户端
    api: RemoteApi,
    /// 后台结果通道
    bg_tx: mpsc::Sender<BgResult>,
    bg_rx: mpsc::Receiver<BgResult>,
}

impl App {
    pub fn new() -> Self {
        let config = storage::config::load_config();
        let api = RemoteApi::from_config(config.api.base_url.as_deref());

        let (store, cached) = match TodoStore::open() {
            Ok(pair) => pair,
            Err(e) => {
                // 本地 blob 不可读：从空列表起步，下一次变更会覆盖它
                eprintln!("Warning: local todo cache unreadable: {}", e);
                let path = storage::todos::todos_file_path().expect("Cannot resolve ~/.tido");
                (TodoStore::empty_at(path), true)
            }
        };

        let mut app = Self::from_parts(store, api);
        if !cached {
            // 首次运行：本地缓存缺失，拉取远端初始列表
            app.loading = true;
            app.start_initial_fetch();
        }
        app.ensure_selection();
        app
    }

    /// 从现成的 store 构建（不触发远端拉取；测试也走这里）
    pub fn from_parts(store: TodoStore, api: RemoteApi) -> Self {
        let (bg_tx, bg_rx) = mpsc::channel();
        let theme = Theme::default();

        Self {
            should_quit: false,
            mode: AppMode::Home,
            store,
            loading: false,
            list_state: ListState::default(),
            theme,
            colors: get_theme_colors(theme),
            toast: None,
            show_add_dialog: false,
            add_input: String::new(),
            api,
            bg_tx,
            bg_rx,
        }
    }

    // ========== 后台操作 ==========

    /// 在后台线程拉取远端初始列表
    pub fn start_initial_fetch(&self) {
        let api = self.api.clone();
        let tx = self.bg_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(BgResult::Fetched(api.fetch_todos()));
        });
    }

    /// 消费后台操作结果（主循环每 tick 调用）
    pub fn poll_bg_result(&mut self) {
        while let Ok(result) = self.bg_rx.try_recv() {
            self.handle_bg_result(result);
        }
    }

    fn handle_bg_result(&mut self, result: BgResult) {
        match result {
            BgResult::Fetched(Ok(todos)) => {
                self.loading = false;
                if let Err(e) = self.store.install(todos) {
                    self.show_toast(format!("Save failed: {}", e));
                } else {
                    storage::config::record_last_fetch();
                }
                self.ensure_selection();
            }
            BgResult::Fetched(Err(e)) => {
                // 捕获并提示，列表保持为空，应用仍然可用
                self.loading = false;
                self.show_toast(format!("Fetch failed: {}", e));
            }
            BgResult::Toggled { id, result } => match result {
                // 服务端报告的 completed 值覆盖乐观状态
                Ok(server) => {
                    if let Err(e) = self.store.confirm_completed(id, server.completed) {
                        self.show_toast(format!("Save failed: {}", e));
                    }
                }
                // 不回滚：乐观的本地状态原样保留
                Err(e) => self.show_toast(format!("Sync failed, kept local: {}", e)),
            },
            BgResult::Deleted { id, result } => match result {
                Ok(()) => match self.store.remove(id) {
                    Ok(()) => {
                        self.ensure_selection();
                        self.show_toast("Deleted");
                    }
                    // 条目已被并发删除，忽略
                    Err(TidoError::NotFound(_)) => {}
                    Err(e) => self.show_toast(format!("Save failed: {}", e)),
                },
                // 远端删除失败：本地状态不动
                Err(e) => self.show_toast(format!("Delete failed: {}", e)),
            },
        }
    }

    // ========== 列表操作 ==========

    /// 当前选中的条目
    pub fn selected_todo(&self) -> Option<&Todo> {
        let index = self.list_state.selected()?;
        self.store.todos().get(index)
    }

    /// 翻转选中条目的完成状态（乐观更新 + 异步远端同步）
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_todo().map(|t| t.id) else {
            return;
        };

        // 1. 本地先行：翻转并立即持久化
        let completed = match self.store.toggle(id) {
            Ok(completed) => completed,
            Err(e) => {
                self.show_toast(format!("Toggle failed: {}", e));
                return;
            }
        };

        // 2. 远端跟进：响应到达后以服务端值覆盖
        let api = self.api.clone();
        let tx = self.bg_tx.clone();
        thread::spawn(move || {
            let result = api.update_todo(id, completed);
            let _ = tx.send(BgResult::Toggled { id, result });
        });
    }

    /// 删除选中条目（远端先行，成功后才改本地）
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_todo().map(|t| t.id) else {
            return;
        };

        let api = self.api.clone();
        let tx = self.bg_tx.clone();
        thread::spawn(move || {
            let result = api.delete_todo(id);
            let _ = tx.send(BgResult::Deleted { id, result });
        });
    }

    // ========== Add Todo 弹窗 ==========

    /// 打开 Add Todo 弹窗
    pub fn open_add_dialog(&mut self) {
        self.add_input.clear();
        self.show_add_dialog = true;
    }

    /// 关闭 Add Todo 弹窗
    pub fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
    }

    /// Add Todo 输入字符
    pub fn add_input_char(&mut self, c: char) {
        self.add_input.push(c);
    }

    /// Add Todo 删除字符
    pub fn add_input_delete_char(&mut self) {
        self.add_input.pop();
    }

    /// 提交新待办（纯本地，不调用远端 API）
    pub fn submit_add(&mut self) {
        let text = self.add_input.trim().to_string();
        if text.is_empty() {
            self.show_toast("Todo text cannot be empty");
            return;
        }

        match self.store.add(text) {
            Ok(_) => {
                self.close_add_dialog();
                // 选中新追加的条目
                self.list_state.select(Some(self.store.len() - 1));
                self.show_toast("Added");
            }
            Err(e) => self.show_toast(format!("Add failed: {}", e)),
        }
    }

    // ========== 选择与导航 ==========

    /// 确保选中项有效（列表非空时有选中，且不越界）
    pub fn ensure_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
            None => self.list_state.select(Some(0)),
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== 杂项 ==========

    /// 切换 Night Mode
    pub fn toggle_night_mode(&mut self) {
        self.theme = self.theme.toggled();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 进入说明页
    pub fn enter_details(&mut self) {
        self.mode = AppMode::Details;
    }

    /// 返回列表页
    pub fn leave_details(&mut self) {
        self.mode = AppMode::Home;
    }

    /// 远端 API base URL（说明页显示用）
    pub fn api_base_url(&self) -> &str {
        self.api.base_url()
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(dir: &tempfile::TempDir, todos: Vec<Todo>) -> App {
        let (mut store, _) = TodoStore::open_at(dir.path().join("todos.json")).unwrap();
        store.install(todos).unwrap();
        let mut app = App::from_parts(store, RemoteApi::default());
        app.ensure_selection();
        app
    }

    #[test]
    fn test_selection_wraps() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A"), Todo::new(2, "B")]);

        assert_eq!(app.list_state.selected(), Some(0));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_ensure_selection_clamps_after_shrink() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A"), Todo::new(2, "B")]);

        app.list_state.select(Some(1));
        app.store.remove(2).unwrap();
        app.ensure_selection();
        assert_eq!(app.list_state.selected(), Some(0));

        app.store.remove(1).unwrap();
        app.ensure_selection();
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_add_dialog_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);

        app.open_add_dialog();
        assert!(app.show_add_dialog);
        app.add_input_char('h');
        app.add_input_char('i');
        app.add_input_delete_char();
        assert_eq!(app.add_input, "h");

        app.close_add_dialog();
        assert!(!app.show_add_dialog);
        assert!(app.add_input.is_empty());
    }

    #[test]
    fn test_submit_add_appends_and_selects() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A")]);

        app.open_add_dialog();
        for c in "buy milk".chars() {
            app.add_input_char(c);
        }
        app.submit_add();

        assert!(!app.show_add_dialog);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.selected_todo().unwrap().todo, "buy milk");
    }

    #[test]
    fn test_submit_add_rejects_blank() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);

        app.open_add_dialog();
        app.add_input_char(' ');
        app.submit_add();
        // 弹窗保持打开，列表不变
        assert!(app.show_add_dialog);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_fetched_result_installs_and_clears_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);
        app.loading = true;

        app.handle_bg_result(BgResult::Fetched(Ok(vec![Todo::new(1, "A")])));
        assert!(!app.loading);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_fetch_error_leaves_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);
        app.loading = true;

        app.handle_bg_result(BgResult::Fetched(Err(TidoError::http("timeout"))));
        assert!(!app.loading);
        assert!(app.store.is_empty());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_toggled_response_overwrites_with_server_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A")]);

        // 乐观翻转为 true
        app.store.toggle(1).unwrap();
        // 服务端却报告 false
        let server = Todo {
            id: 1,
            todo: "A".to_string(),
            completed: false,
        };
        app.handle_bg_result(BgResult::Toggled {
            id: 1,
            result: Ok(server),
        });
        assert!(!app.store.get(1).unwrap().completed);
    }

    #[test]
    fn test_toggle_sync_failure_keeps_optimistic_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A")]);

        app.store.toggle(1).unwrap();
        app.handle_bg_result(BgResult::Toggled {
            id: 1,
            result: Err(TidoError::http("timeout")),
        });
        // 不回滚
        assert!(app.store.get(1).unwrap().completed);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_deleted_response_removes_locally() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A"), Todo::new(2, "B")]);

        app.handle_bg_result(BgResult::Deleted {
            id: 1,
            result: Ok(()),
        });
        assert!(app.store.get(1).is_none());
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_delete_failure_keeps_local_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A")]);

        app.handle_bg_result(BgResult::Deleted {
            id: 1,
            result: Err(TidoError::http("502")),
        });
        assert!(app.store.get(1).is_some());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_night_mode_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);

        assert_eq!(app.theme, Theme::Light);
        app.toggle_night_mode();
        assert_eq!(app.theme, Theme::Dark);
    }
}
