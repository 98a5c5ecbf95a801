use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// 列表为空时的占位
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::from(Span::styled(
            "No todos",
            Style::default().fg(colors.muted),
        )),
        Line::from(vec![
            Span::styled("press ", Style::default().fg(colors.muted)),
            Span::styled("a", Style::default().fg(colors.highlight)),
            Span::styled(" to add one", Style::default().fg(colors.muted)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );
}

/// 初始加载期间的占位（带 spinner 动画）
pub fn render_loading(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    // 选择 spinner 帧（基于时间，每 100ms 切换）
    let tick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / 100;
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner),
            Style::default().fg(colors.highlight),
        ),
        Span::styled("Loading todos...", Style::default().fg(colors.muted)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
}
