//! 通用 UI 组件
//!
//! 输入框、按钮、提示框等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let (text_style, border_style) = if is_focused {
        (
            Style::default().fg(Color::White),
            Style::default()
                .fg(active_color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let input = Paragraph::new(value)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}

/// [组件] 提交按钮，禁用时变暗
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool, color: Color) {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Gray)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let button = Paragraph::new(label).alignment(Alignment::Center).style(style);
    frame.render_widget(button, area);
}

/// [组件] 红色的错误提示框
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let alert = Paragraph::new(format!("⚠ {}", message))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(alert, area);
}
