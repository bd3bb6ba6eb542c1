//! 标签到展示效果的查找表
//!
//! 颜色、标题、表情、提示语、背景滤镜均由标签决定，全部以静态表声明

use ratatui::style::Color;

use crate::models::SentimentLabel;

pub const DEFAULT_TITLE: &str = "Sentence Vibe Check";
pub const DEFAULT_COLOR: TitleColor = TitleColor::from_hex_const(0x2193b0);

/// 标题颜色（保留十六进制形式便于显示与比较）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleColor(u32);

impl TitleColor {
    pub const fn from_hex_const(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0)
    }

    pub fn to_color(self) -> Color {
        Color::Rgb((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// 表情入场方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiSide {
    Left,
    Right,
}

/// 背景滤镜
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Vivid,
    Muted,
    Grayscale,
}

/// 单个标签的全部展示属性
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub color: TitleColor,
    pub title: &'static str,
    pub emoji: Option<(&'static str, EmojiSide)>,
    pub vibe_message: &'static str,
    pub backdrop: Backdrop,
}

const PROMPT_MESSAGE: &str = "Enter a sentence to check its vibe! ✨";

const FALLBACK: Theme = Theme {
    color: DEFAULT_COLOR,
    title: DEFAULT_TITLE,
    emoji: None,
    vibe_message: PROMPT_MESSAGE,
    backdrop: Backdrop::Vivid,
};

const THEMES: &[(&str, Theme)] = &[
    (
        "pos",
        Theme {
            color: TitleColor::from_hex_const(0x56ab2f),
            title: "Positive",
            emoji: Some(("😊", EmojiSide::Left)),
            vibe_message: "Keep spreading those good vibes! Your words are radiating joy. 😊",
            backdrop: Backdrop::Vivid,
        },
    ),
    (
        "neg",
        Theme {
            color: TitleColor::from_hex_const(0xff416c),
            title: "Negative",
            emoji: Some(("😞", EmojiSide::Right)),
            vibe_message: "It sounds like you're going through something tough. Remember, it's okay to seek support. You're not alone. 😞",
            backdrop: Backdrop::Grayscale,
        },
    ),
    (
        "neutral",
        Theme {
            color: DEFAULT_COLOR,
            title: "Neutral",
            emoji: None,
            vibe_message: "Your message is balanced and composed. Sometimes neutrality speaks volumes. 🤔",
            backdrop: Backdrop::Muted,
        },
    ),
    (
        "initial",
        Theme {
            color: DEFAULT_COLOR,
            title: DEFAULT_TITLE,
            emoji: None,
            vibe_message: PROMPT_MESSAGE,
            backdrop: Backdrop::Muted,
        },
    ),
];

/// 查找标签对应的主题，未知标签落到默认值
pub fn theme_for(label: &SentimentLabel) -> Theme {
    let key = match label {
        SentimentLabel::Unrecognized(_) => return FALLBACK,
        other => other.as_str(),
    };

    THEMES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, theme)| *theme)
        .unwrap_or(FALLBACK)
}
