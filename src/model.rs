use crate::error::{DocxError, DocxResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One command from the cheatsheet together with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub command: String,
    pub explanation: String,
}

impl CommandEntry {
    pub fn new(command: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            explanation: explanation.into(),
        }
    }
}

impl<C: Into<String>, E: Into<String>> From<(C, E)> for CommandEntry {
    fn from((command, explanation): (C, E)) -> Self {
        Self::new(command, explanation)
    }
}

/// Heading depth. Level 0 is the document title, 1 through 9 map to
/// `Heading1`..`Heading9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const TITLE: HeadingLevel = HeadingLevel(0);
    pub const MAX: u8 = 9;

    pub fn new(level: u8) -> DocxResult<Self> {
        if level > Self::MAX {
            return Err(DocxError::InvalidHeadingLevel { level });
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Style id used in `word/styles.xml`.
    pub fn style_id(self) -> String {
        if self.0 == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", self.0)
        }
    }

    pub fn from_style_id(style_id: &str) -> Option<Self> {
        if style_id == "Title" {
            return Some(Self::TITLE);
        }
        let level = style_id.strip_prefix("Heading")?.parse::<u8>().ok()?;
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    ListBullet,
}

impl ParagraphStyle {
    /// `None` for the default style, which is written without a `w:pStyle`.
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::ListBullet => Some("ListBullet"),
        }
    }

    pub fn from_style_id(style_id: &str) -> Option<Self> {
        match style_id {
            "Normal" => Some(ParagraphStyle::Normal),
            "ListBullet" => Some(ParagraphStyle::ListBullet),
            _ => None,
        }
    }
}

/// A top-level body element of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { text: String, level: HeadingLevel },
    Paragraph { text: String, style: ParagraphStyle },
}

impl Block {
    pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Self {
        Block::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::ListBullet,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::Normal,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text, .. } => text,
        }
    }

    pub fn style_id(&self) -> Option<String> {
        match self {
            Block::Heading { level, .. } => Some(level.style_id()),
            Block::Paragraph { style, .. } => style.style_id().map(str::to_string),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { text, level } => write!(f, "heading[{}]({:?})", level.get(), text),
            Block::Paragraph {
                text,
                style: ParagraphStyle::ListBullet,
            } => write!(f, "bullet({:?})", text),
            Block::Paragraph { text, .. } => write!(f, "para({:?})", text),
        }
    }
}
