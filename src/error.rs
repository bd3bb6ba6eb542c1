//! 请求失败类型
//!
//! 网络错误与非 2xx 响应统一为 RequestFailure，只在请求完成处捕获并转成界面提示

use reqwest::StatusCode;
use thiserror::Error;

/// 后端没有给出错误信息时展示的提示
pub const FALLBACK_ERROR: &str = "Error analyzing note. Please try again.";

#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("could not reach analysis endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analysis endpoint returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("malformed analysis response: {0}")]
    Decode(String),
}

impl RequestFailure {
    /// 展示给用户的文本：优先使用后端的 `error` 字段
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_error() {
        let failure = RequestFailure::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some("Bad input".to_string()),
        };
        assert_eq!(failure.user_message(), "Bad input");
    }

    #[test]
    fn test_user_message_fallback() {
        let no_body = RequestFailure::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(no_body.user_message(), FALLBACK_ERROR);

        let empty = RequestFailure::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some(String::new()),
        };
        assert_eq!(empty.user_message(), FALLBACK_ERROR);

        let decode = RequestFailure::Decode("missing field `analysis`".to_string());
        assert_eq!(decode.user_message(), FALLBACK_ERROR);
    }
}
