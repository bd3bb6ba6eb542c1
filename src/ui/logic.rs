//! 业务逻辑处理 (Update/Dispatch)
//!
//! reduce 是纯函数：旧状态 + 事件 -> 新状态。dispatch 把 Action 转成事件并决定后续动作

use tracing::debug;

use super::actions::{Action, Event, Flow};
use super::state::{App, UiState};
use crate::models::{AnalysisResult, SentimentLabel};
use crate::theme::{DEFAULT_COLOR, DEFAULT_TITLE, theme_for};

impl UiState {
    /// 核心 reducer
    pub fn reduce(self, event: Event) -> Self {
        match event {
            Event::InputChanged(input) => {
                if input.is_empty() {
                    self.reduce(Event::InputCleared)
                } else {
                    Self { input, ..self }
                }
            }

            // 错误信息保持不变
            Event::InputCleared => Self {
                input: String::new(),
                label: SentimentLabel::Initial,
                title: DEFAULT_TITLE.to_string(),
                title_color: DEFAULT_COLOR,
                result: None,
                ..self
            },

            Event::SubmitStarted => Self {
                label: SentimentLabel::Initial,
                result: None,
                error: None,
                is_loading: true,
                ..self
            },

            Event::SubmitSucceeded {
                response,
                received_at,
            } => {
                let label = response.label();
                let theme = theme_for(&label);
                Self {
                    label,
                    title: theme.title.to_string(),
                    title_color: theme.color,
                    result: Some(AnalysisResult::from_analysis(
                        &response.analysis,
                        received_at,
                    )),
                    error: None,
                    is_loading: false,
                    ..self
                }
            }

            Event::SubmitFailed(failure) => Self {
                label: SentimentLabel::Initial,
                title: DEFAULT_TITLE.to_string(),
                title_color: DEFAULT_COLOR,
                result: None,
                error: Some(failure.user_message()),
                is_loading: false,
                ..self
            },
        }
    }
}

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,

            Action::Submit => {
                if !self.state.can_submit() {
                    return Flow::Continue;
                }
                let note = self.state.input.clone();
                self.apply(Event::SubmitStarted);
                return Flow::Analyze(note);
            }

            // 请求进行中输入框不可编辑
            _ if self.state.is_loading => {}

            Action::Input(c) => self.edit(|input| input.push(c)),
            Action::Newline => self.edit(|input| input.push('\n')),
            Action::DeleteChar => self.edit(|input| {
                input.pop();
            }),
            Action::ClearInput => self.edit(String::clear),
        }
        Flow::Continue
    }

    /// 应用一个事件，标签变化时重新播放表情动画
    pub fn apply(&mut self, event: Event) {
        let previous = self.state.label.clone();
        self.state = std::mem::take(&mut self.state).reduce(event);

        if self.state.label != previous {
            debug!(label = self.state.label.as_str(), "sentiment label changed");
            self.emoji_frames = 0;
        }
    }

    /// 推进一帧动画
    pub fn tick(&mut self) {
        self.emoji_frames = self.emoji_frames.saturating_add(1);
    }

    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let mut input = self.state.input.clone();
        f(&mut input);
        if input != self.state.input || input.is_empty() {
            self.apply(Event::InputChanged(input));
        }
    }
}
