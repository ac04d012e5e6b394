/// Customer persona attached to a journey map.
use serde::{Deserialize, Serialize};

/// The customer archetype a journey map describes.
///
/// At most one persona is assigned per map; swapping personas is an
/// ordinary edit and participates in undo history like any other change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Stable identifier.
    pub id: String,
    /// Display name, e.g. "First-time buyer".
    pub name: String,
    /// Short role or segment description.
    pub role: String,
    /// What this persona is trying to achieve.
    pub goals: Vec<String>,
}

impl Persona {
    /// Creates a persona with a fresh id and no goals.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            role: role.into(),
            goals: Vec::new(),
        }
    }
}
