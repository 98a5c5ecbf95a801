use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const FOOTER_HEIGHT: u16 = 3;

const HINTS: &[(&str, &str)] = &[
    ("Space", "toggle"),
    ("a", "add"),
    ("x", "delete"),
    ("n", "night"),
    ("i", "details"),
    ("q", "quit"),
];

/// 渲染底部快捷键提示
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let mut spans = Vec::new();
    for (key, label) in HINTS {
        spans.push(Span::styled(*key, Style::default().fg(colors.highlight)));
        spans.push(Span::styled(
            format!(" {}  ", label),
            Style::default().fg(colors.muted),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors.border)),
        );

    frame.render_widget(footer, area);
}
