use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Todo;
use crate::theme::ThemeColors;

/// 渲染待办列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    todos: &[Todo],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 状态图标
        Cell::from("ID"),
        Cell::from("TODO"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let (icon, icon_style) = if todo.completed {
                ("✓", Style::default().fg(colors.status_done))
            } else {
                ("○", Style::default().fg(colors.status_open))
            };

            // 已完成条目加删除线
            let text_style = if todo.completed {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let row_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(icon).style(icon_style),
                Cell::from(todo.id.to_string()).style(Style::default().fg(colors.muted)),
                Cell::from(todo.todo.clone()).style(text_style),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2), // 选择器
        Constraint::Length(2), // 状态图标
        Constraint::Length(4), // ID
        Constraint::Fill(1),   // TODO (flex)
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
