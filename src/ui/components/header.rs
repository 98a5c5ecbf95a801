use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏：标题 + 完成进度 + 当前主题
pub fn render(frame: &mut Frame, area: Rect, done: usize, total: usize, theme_label: &str, colors: &ThemeColors) {
    let title = Line::from(vec![
        Span::styled(
            " Todo List ",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}/{} done ", done, total),
            Style::default().fg(colors.muted),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors.border))
                .title_bottom(
                    Line::from(Span::styled(
                        format!(" {} ", theme_label),
                        Style::default().fg(colors.muted),
                    ))
                    .right_aligned(),
                ),
        );

    frame.render_widget(header, area);
}
