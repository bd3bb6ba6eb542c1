//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::theme::EmojiSide;

/// 表情入场动画的总帧数
pub const ENTRANCE_FRAMES: u16 = 20;

/// 按百分比在 area 中居中取一个矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 表情所在位置：从屏幕外侧滑向侧栏中央
pub fn emoji_rect(column: Rect, side: EmojiSide, frames: u16, width: u16) -> Rect {
    let width = width.min(column.width);
    let travel = column.width.saturating_sub(width) / 2;
    let progress = frames.min(ENTRANCE_FRAMES);
    let offset = travel * progress / ENTRANCE_FRAMES;

    let x = match side {
        EmojiSide::Left => column.x + offset,
        EmojiSide::Right => column.x + column.width - width - offset,
    };
    let y = column.y + column.height / 2;

    Rect::new(x, y, width, column.height.min(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_emoji_slides_towards_center() {
        let column = Rect::new(0, 0, 22, 10);

        let start = emoji_rect(column, EmojiSide::Left, 0, 2);
        let end = emoji_rect(column, EmojiSide::Left, ENTRANCE_FRAMES, 2);
        let later = emoji_rect(column, EmojiSide::Left, ENTRANCE_FRAMES * 3, 2);
        assert_eq!(start.x, 0);
        assert_eq!(end.x, 10);
        assert_eq!(later, end);

        let start = emoji_rect(column, EmojiSide::Right, 0, 2);
        let end = emoji_rect(column, EmojiSide::Right, ENTRANCE_FRAMES, 2);
        assert_eq!(start.x, 20);
        assert_eq!(end.x, 10);
        assert_eq!(end.y, 5);
    }

    #[test]
    fn test_emoji_rect_in_tiny_column() {
        let column = Rect::new(3, 0, 1, 0);
        let rect = emoji_rect(column, EmojiSide::Right, 5, 2);
        assert_eq!(rect.width, 1);
        assert_eq!(rect.x, 3);
        assert_eq!(rect.height, 0);
    }
}
