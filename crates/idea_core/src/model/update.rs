//! Partial updates ("patches") targeting one existing idea.
//!
//! # Invariants
//! - `None` on any patch field means "leave unchanged". A JSON `null` decodes
//!   to the same thing, except for `ConceptUpdate::done`.
//! - `ConceptUpdate::done == Some(None)` resets the concept to "unspecified".
//! - A patch is tagged with the kind it expects the stored idea to have.

use crate::model::idea::{IdeaId, IdeaType, Url};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicIdeaUpdate {
    pub id: IdeaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BasicIdeaUpdate {
    pub fn new(id: IdeaId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoUpdate {
    pub id: IdeaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl ToDoUpdate {
    pub fn new(id: IdeaId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptUpdate {
    pub id: IdeaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Outer `None`: unchanged. `Some(None)`: reset to unspecified.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub done: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Url>>,
}

impl ConceptUpdate {
    pub fn new(id: IdeaId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pass `None` to reset `done` to unspecified.
    pub fn done(mut self, done: Option<bool>) -> Self {
        self.done = Some(done);
        self
    }

    pub fn references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Url>,
    {
        self.references = Some(references.into_iter().map(Into::into).collect());
        self
    }
}

/// Patch of any kind. The tag must match the stored idea's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IdeaUpdate {
    BasicIdea(BasicIdeaUpdate),
    ToDo(ToDoUpdate),
    Concept(ConceptUpdate),
}

impl IdeaUpdate {
    pub fn id(&self) -> IdeaId {
        match self {
            Self::BasicIdea(update) => update.id,
            Self::ToDo(update) => update.id,
            Self::Concept(update) => update.id,
        }
    }

    pub fn kind(&self) -> IdeaType {
        match self {
            Self::BasicIdea(_) => IdeaType::BasicIdea,
            Self::ToDo(_) => IdeaType::ToDo,
            Self::Concept(_) => IdeaType::Concept,
        }
    }
}

impl From<BasicIdeaUpdate> for IdeaUpdate {
    fn from(value: BasicIdeaUpdate) -> Self {
        Self::BasicIdea(value)
    }
}

impl From<ToDoUpdate> for IdeaUpdate {
    fn from(value: ToDoUpdate) -> Self {
        Self::ToDo(value)
    }
}

impl From<ConceptUpdate> for IdeaUpdate {
    fn from(value: ConceptUpdate) -> Self {
        Self::Concept(value)
    }
}

// A key that is present always yields `Some`, even when its value is `null`;
// a missing key falls back to `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
