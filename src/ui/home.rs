use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{add_dialog, empty_state, footer, header, toast, todo_list};

/// 渲染列表页
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(footer::FOOTER_HEIGHT),
    ])
    .areas(area);

    // 渲染 Header
    let todos = app.store.todos();
    let done = todos.iter().filter(|t| t.completed).count();
    header::render(
        frame,
        header_area,
        done,
        todos.len(),
        app.theme.label(),
        colors,
    );

    // 渲染列表主体：加载占位 / 空占位 / 待办表格
    if app.loading {
        empty_state::render_loading(frame, list_area, colors);
    } else if todos.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        todo_list::render(frame, list_area, todos, app.list_state.selected(), colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, colors);

    // 渲染 Add Todo 弹窗
    if app.show_add_dialog {
        let next_id = app.store.len() as u64 + 1;
        add_dialog::render(frame, &app.add_input, next_id, colors);
    }

    // 渲染 Toast
    if let Some(ref t) = app.toast {
        toast::render(frame, &t.message, colors);
    }
}
