//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::theme::{Backdrop, EmojiSide, Theme};
use components::{render_alert, render_button, render_input_widget};
use layouts::{centered_rect, emoji_rect};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let theme = state.theme();
    let area = frame.area();

    render_backdrop(frame, area, theme.backdrop);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(14),   // 主体
            Constraint::Length(1), // 帮助
        ])
        .split(area);

    render_title(frame, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(chunks[1]);

    render_emoji(frame, app, &theme, columns[0], columns[2]);
    render_card(frame, app, &theme, columns[1]);
    render_help(frame, chunks[2]);
}

fn render_backdrop(frame: &mut Frame, area: Rect, backdrop: Backdrop) {
    let bg = match backdrop {
        Backdrop::Vivid => Color::Rgb(28, 58, 94),
        Backdrop::Muted => Color::Rgb(52, 64, 74),
        Backdrop::Grayscale => Color::Rgb(48, 48, 48),
    };
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let color = app.state.title_color.to_color();
    let title = Paragraph::new(app.state.title.to_uppercase())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Black)),
        );

    // 窄终端下标题占满整行
    let rect = if area.width < 40 {
        area
    } else {
        centered_rect(60, 100, area)
    };
    frame.render_widget(title, rect);
}

fn render_emoji(frame: &mut Frame, app: &App, theme: &Theme, left: Rect, right: Rect) {
    let Some((emoji, side)) = theme.emoji else {
        return;
    };

    let column = match side {
        EmojiSide::Left => left,
        EmojiSide::Right => right,
    };
    let rect = emoji_rect(column, side, app.emoji_frames, 2);
    frame.render_widget(Paragraph::new(emoji), rect);
}

fn render_card(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let state = &app.state;
    let color = state.title_color.to_color();

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .style(Style::default().bg(Color::Rgb(24, 24, 28)));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 输入框
            Constraint::Length(1), // 按钮
            Constraint::Length(1),
            Constraint::Min(2),    // 结果或提示语
            Constraint::Length(if state.error.is_some() { 3 } else { 0 }),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "Write your sentence here",
        &state.input,
        !state.is_loading,
        color,
    );

    let label = if state.is_loading {
        "Analyzing..."
    } else {
        "Check Vibe"
    };
    render_button(frame, chunks[1], label, state.can_submit(), color);

    let body = match &state.result {
        Some(result) => Paragraph::new(vec![
            Line::from(Span::styled(
                result.message.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("analyzed at {}", result.analyzed_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        None => Paragraph::new(theme.vibe_message).style(Style::default().fg(Color::Gray)),
    };
    frame.render_widget(
        body.alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[3],
    );

    if let Some(error) = &state.error {
        render_alert(frame, chunks[4], error);
    }
}

const HELP_TEXT: &str =
    "[Enter] check vibe  [Alt+Enter/Ctrl+J] new line  [Ctrl+U] clear  [Esc] quit";

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
