//! Action 与 Event 定义 (Intent)
//!
//! Action 是用户交互的语义化表达；Event 是驱动 reducer 的离散事件

use chrono::{DateTime, Local};

use crate::error::RequestFailure;
use crate::models::AnalyzeResponse;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Submit,      // Enter
    Input(char), // 输入字符
    Newline,     // Alt+Enter
    DeleteChar,  // Backspace
    ClearInput,  // Ctrl+U
}

/// reducer 事件
#[derive(Debug)]
pub enum Event {
    InputChanged(String),
    InputCleared,
    SubmitStarted,
    SubmitSucceeded {
        response: AnalyzeResponse,
        received_at: DateTime<Local>,
    },
    SubmitFailed(RequestFailure),
}

/// dispatch 之后主循环要做的事
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
    /// 发起一次分析请求
    Analyze(String),
}
