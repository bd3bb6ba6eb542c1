use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 分析结果为空行时的占位消息
pub const NO_ANALYSIS_MESSAGE: &str = "No analysis message.";

/// 情感标签
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SentimentLabel {
    #[default]
    Initial, // 尚未分析
    Pos,
    Neg,
    Neutral,
    Unrecognized(String), // 后端返回了未知标签
}

impl SentimentLabel {
    /// 从后端的 `sentiment_label` 字段解析，缺失时与未知标签同样处理
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unrecognized(String::new()),
            Some("pos") => Self::Pos,
            Some("neg") => Self::Neg,
            Some("neutral") => Self::Neutral,
            Some(other) => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Initial => "initial",
            Self::Pos => "pos",
            Self::Neg => "neg",
            Self::Neutral => "neutral",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub note: String,
}

/// 成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    #[serde(default, deserialize_with = "label_from_any")]
    pub sentiment_label: Option<String>,
}

/// 标签可能不是字符串（数字、布尔等），统一转成文本留给 from_wire 判断
fn label_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) => Some(label),
        Some(other) => Some(other.to_string()),
    })
}

impl AnalyzeResponse {
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_wire(self.sentiment_label.as_deref())
    }
}

/// 失败响应体（可选）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// 展示给用户的分析结果
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub message: String,
    pub analyzed_at: DateTime<Local>,
}

impl AnalysisResult {
    /// 只保留分析文本的第一行作为标题消息
    pub fn from_analysis(analysis: &str, analyzed_at: DateTime<Local>) -> Self {
        let message = analysis
            .lines()
            .next()
            .filter(|line| !line.is_empty())
            .unwrap_or(NO_ANALYSIS_MESSAGE)
            .to_string();

        Self {
            message,
            analyzed_at,
        }
    }
}
