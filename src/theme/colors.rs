//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题 (Night Mode)
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        status_done: Color::Rgb(0, 255, 136),
        status_open: Color::Rgb(128, 128, 128),
        error: Color::Rgb(255, 85, 85), // 红色
    }
}

/// 浅色主题（默认）
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        highlight: Color::Rgb(0, 128, 68),       // 深绿色
        text: Color::Rgb(30, 30, 30),            // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        status_done: Color::Rgb(0, 150, 80),
        status_open: Color::Rgb(140, 140, 140),
        error: Color::Rgb(200, 50, 50), // 红色
    }
}
