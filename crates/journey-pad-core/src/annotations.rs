/// Cell annotations: comments and stickers.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A threaded note left on a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable identifier.
    pub id: String,
    /// Author display name.
    pub author: String,
    /// Comment body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment with a fresh id, timestamped now.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// A small emotion/marker badge placed on a cell.
///
/// Closed set on purpose: the serialized form is part of the map file
/// format, so new variants are an explicit format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sticker {
    Delighted,
    Satisfied,
    Neutral,
    Frustrated,
    PainPoint,
    Opportunity,
    Question,
}

impl Sticker {
    /// Parses the snake_case name used in the file format and the CLI.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "delighted" => Some(Self::Delighted),
            "satisfied" => Some(Self::Satisfied),
            "neutral" => Some(Self::Neutral),
            "frustrated" => Some(Self::Frustrated),
            "pain_point" => Some(Self::PainPoint),
            "opportunity" => Some(Self::Opportunity),
            "question" => Some(Self::Question),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_has_id_and_timestamp() {
        let c = Comment::new("dana", "drop-off spike here");
        assert!(!c.id.is_empty());
        assert_eq!(c.author, "dana");
        assert!(c.created_at <= Utc::now());
    }

    #[test]
    fn test_comment_ids_are_unique() {
        let a = Comment::new("dana", "x");
        let b = Comment::new("dana", "x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sticker_parse_known_names() {
        assert_eq!(Sticker::parse("pain_point"), Some(Sticker::PainPoint));
        assert_eq!(Sticker::parse("delighted"), Some(Sticker::Delighted));
        assert_eq!(Sticker::parse("smiley"), None);
    }

    #[test]
    fn test_sticker_serialized_form_is_snake_case() {
        let json = serde_json::to_string(&Sticker::PainPoint).expect("serialize");
        assert_eq!(json, "\"pain_point\"");
        let back: Sticker = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Sticker::PainPoint);
    }
}
