//! App 状态定义 (Model)
//!
//! UiState 是不可变的值，只通过 logic.rs 中的 reduce 产生新状态

use crate::models::{AnalysisResult, SentimentLabel};
use crate::theme::{DEFAULT_COLOR, DEFAULT_TITLE, Theme, TitleColor, theme_for};

/// 界面状态
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub input: String,
    pub label: SentimentLabel,
    pub title: String,
    pub title_color: TitleColor,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            label: SentimentLabel::Initial,
            title: DEFAULT_TITLE.to_string(),
            title_color: DEFAULT_COLOR,
            result: None,
            error: None,
            is_loading: false,
        }
    }
}

impl UiState {
    /// 当前标签对应的展示主题
    pub fn theme(&self) -> Theme {
        theme_for(&self.label)
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }
}

/// 应用状态：界面状态加上与渲染相关的运行时数据
pub struct App {
    pub state: UiState,
    /// 当前表情已播放的动画帧数
    pub emoji_frames: u16,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            state: UiState::default(),
            emoji_frames: 0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
