use serde::{Deserialize, Serialize};
use std::fmt;

/// Class level 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GradeLevel(u8);

impl GradeLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = GradeLevel> {
        (Self::MIN..=Self::MAX).map(GradeLevel)
    }

    /// Age band of a typical student in this class.
    pub fn age_group(self) -> &'static str {
        match self.0 {
            1 => "6-7",
            2 => "7-8",
            3 => "8-9",
            4 => "9-10",
            5 => "10-11",
            _ => "6-11",
        }
    }

    pub fn next(self) -> Self {
        if self.0 >= Self::MAX { Self(Self::MIN) } else { Self(self.0 + 1) }
    }

    pub fn prev(self) -> Self {
        if self.0 <= Self::MIN { Self(Self::MAX) } else { Self(self.0 - 1) }
    }
}

impl Default for GradeLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for GradeLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("grade level must be 1-5, got {}", value))
    }
}

impl From<GradeLevel> for u8 {
    fn from(grade: GradeLevel) -> u8 {
        grade.0
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the teacher's material came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    #[default]
    Text,
    Pdf,
    Audio,
}

impl ContentOrigin {
    pub const ALL: [ContentOrigin; 3] = [ContentOrigin::Text, ContentOrigin::Pdf, ContentOrigin::Audio];

    pub fn label(self) -> &'static str {
        match self {
            ContentOrigin::Text => "text",
            ContentOrigin::Pdf => "pdf",
            ContentOrigin::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonInput {
    pub text: String,
    pub grade: GradeLevel,
    /// Raw selector, e.g. "japan". Unknown values are allowed and fall back to auto.
    pub global_module: String,
    pub origin: ContentOrigin,
    /// Key of the AI character guiding the lesson, e.g. "friendly".
    pub character: Option<String>,
}

impl LessonInput {
    pub fn new(text: impl Into<String>, grade: GradeLevel, global_module: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grade,
            global_module: global_module.into(),
            origin: ContentOrigin::Text,
            character: None,
        }
    }

    pub fn with_origin(mut self, origin: ContentOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub q: String,
    pub a: String,
}

impl QaPair {
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}

/// A generated lesson pack, serialized with the same keys the model is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonOutput {
    #[serde(rename = "simplified_explanation")]
    pub explanation: String,
    #[serde(rename = "practical_activity")]
    pub activity: String,
    #[serde(rename = "questions_and_answers")]
    pub questions: Vec<QaPair>,
    #[serde(rename = "global_module_used")]
    pub module_used: String,
}

#[derive(Debug)]
pub enum GenerationRequest {
    Generate { request_id: u64, input: LessonInput },
}

#[derive(Debug)]
pub enum GenerationEvent {
    Completed {
        request_id: u64,
        input: LessonInput,
        output: LessonOutput,
    },
    Failed {
        request_id: u64,
        user_message: String,
        detail: String,
    },
}

impl GenerationEvent {
    pub fn request_id(&self) -> u64 {
        match self {
            GenerationEvent::Completed { request_id, .. } => *request_id,
            GenerationEvent::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Dashboard,
    Curriculum,
    Upload,
    Compose,
    Generating,
    Results,
}
