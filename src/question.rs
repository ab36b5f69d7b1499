//! Question catalog records. The engine reads only id, kind and points;
//! everything else is presentation material for the host.

use serde::{Deserialize, Serialize};

/// How a question is asked and scored. `Together` questions award both
/// teams on a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Audio,
    Video,
    Image,
    Creative,
    Together,
}

impl QuestionKind {
    pub fn icon(self) -> &'static str {
        match self {
            QuestionKind::Text => "📝",
            QuestionKind::Audio => "🎵",
            QuestionKind::Video => "🎬",
            QuestionKind::Image => "🖼",
            QuestionKind::Creative => "🎨",
            QuestionKind::Together => "🤝",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Text => "Text",
            QuestionKind::Audio => "Audio",
            QuestionKind::Video => "Video",
            QuestionKind::Image => "Image",
            QuestionKind::Creative => "Creative",
            QuestionKind::Together => "Both teams",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub points: u32,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_images: Option<Vec<String>>,
}
