//! 静态说明页

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::storage;

/// 渲染说明页
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .areas(area);

    let data_path = storage::todos::todos_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unavailable".to_string());

    let label = Style::default().fg(colors.muted);
    let value = Style::default().fg(colors.text);

    let lines = vec![
        Line::from(Span::styled(
            format!("tido v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Local store   ", label),
            Span::styled(data_path, value),
        ]),
        Line::from(vec![
            Span::styled("Remote API    ", label),
            Span::styled(app.api_base_url().to_string(), value),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Toggles sync to the demo API best-effort;",
            label,
        )),
        Line::from(Span::styled(
            "deletes go remote-first, adds stay local.",
            label,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(colors.highlight)),
            Span::styled(" back  ", label),
            Span::styled("q", Style::default().fg(colors.highlight)),
            Span::styled(" quit", label),
        ]),
    ];

    let details = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Details ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );

    frame.render_widget(details, center);
}
