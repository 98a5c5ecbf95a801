use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, AppMode};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件
    if app.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    // 根据屏幕分发事件
    match app.mode {
        AppMode::Home => handle_home_key(app, key),
        AppMode::Details => handle_details_key(app, key),
    }
}

/// 处理列表页的键盘事件
fn handle_home_key(app: &mut App, key: KeyEvent) {
    // 初始加载期间只允许退出和 Night Mode
    if app.loading {
        match key.code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Char('n') => app.toggle_night_mode(),
            _ => {}
        }
        return;
    }

    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 翻转完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 删除选中条目
        KeyCode::Char('x') => {
            app.delete_selected();
        }

        // 添加新条目
        KeyCode::Char('a') => {
            app.open_add_dialog();
        }

        // Night Mode 开关
        KeyCode::Char('n') => {
            app.toggle_night_mode();
        }

        // 进入说明页
        KeyCode::Char('i') => {
            app.enter_details();
        }

        _ => {}
    }
}

/// 处理说明页的键盘事件
fn handle_details_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc | KeyCode::Char('i') | KeyCode::Backspace => app.leave_details(),
        KeyCode::Char('n') => app.toggle_night_mode(),
        _ => {}
    }
}

/// 处理 Add Todo 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_add_dialog(),
        KeyCode::Enter => app.submit_add(),
        KeyCode::Backspace => app.add_input_delete_char(),
        KeyCode::Char(c) => app.add_input_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RemoteApi;
    use crate::model::Todo;
    use crate::operations::todos::TodoStore;

    fn test_app(dir: &tempfile::TempDir, todos: Vec<Todo>) -> App {
        let (mut store, _) = TodoStore::open_at(dir.path().join("todos.json")).unwrap();
        store.install(todos).unwrap();
        let mut app = App::from_parts(store, RemoteApi::default());
        app.ensure_selection();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn test_q_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![Todo::new(1, "A"), Todo::new(2, "B")]);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(1));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_i_switches_screens() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, AppMode::Details);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Home);
    }

    #[test]
    fn test_add_dialog_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.show_add_dialog);

        // 弹窗打开时按键进入输入缓冲，而不是触发快捷键
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.add_input, "q");

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_add_dialog);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_loading_blocks_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir, vec![]);
        app.loading = true;

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.show_add_dialog);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.theme.label(), "Night");
    }
}
