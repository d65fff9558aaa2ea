//! Idea domain model.
//!
//! # Responsibility
//! - Define the persisted record for each idea kind.
//! - Provide the kind tag used to narrow an `Idea` to one variant.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another idea.
//! - An idea keeps the kind it was created with for its whole lifetime.
//! - `Concept::done == None` means "unspecified", which is not `Some(false)`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identifier. The first idea of a store gets `1`.
pub type IdeaId = u64;

/// Reference target kept by concepts.
pub type Url = String;

/// Kind tag shared by ideas, drafts and updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdeaType {
    /// Plain note with a title and description.
    BasicIdea,
    /// Actionable item with a `done` flag.
    ToDo,
    /// Note with an optional `done` flag and a list of references.
    Concept,
}

impl IdeaType {
    pub const ALL: [IdeaType; 3] = [IdeaType::BasicIdea, IdeaType::ToDo, IdeaType::Concept];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicIdea => "BasicIdea",
            Self::ToDo => "ToDo",
            Self::Concept => "Concept",
        }
    }
}

impl Display for IdeaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of one idea field, as reported by change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaField {
    Title,
    Description,
    Done,
    References,
}

impl IdeaField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Done => "done",
            Self::References => "references",
        }
    }
}

impl Display for IdeaField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields whose value actually changed during one update, in patch field order.
pub type Changes = Vec<IdeaField>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicIdea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    /// `None` when the concept never stated whether it is done.
    pub done: Option<bool>,
    /// Ordered, duplicates allowed.
    pub references: Vec<Url>,
}

/// Persisted idea of any kind.
///
/// Serialized with a `type` tag next to the variant fields so the wire shape
/// matches the kind names in [`IdeaType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Idea {
    BasicIdea(BasicIdea),
    ToDo(ToDo),
    Concept(Concept),
}

impl Idea {
    pub fn kind(&self) -> IdeaType {
        match self {
            Self::BasicIdea(_) => IdeaType::BasicIdea,
            Self::ToDo(_) => IdeaType::ToDo,
            Self::Concept(_) => IdeaType::Concept,
        }
    }

    pub fn id(&self) -> IdeaId {
        match self {
            Self::BasicIdea(idea) => idea.id,
            Self::ToDo(idea) => idea.id,
            Self::Concept(idea) => idea.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::BasicIdea(idea) => &idea.title,
            Self::ToDo(idea) => &idea.title,
            Self::Concept(idea) => &idea.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::BasicIdea(idea) => &idea.description,
            Self::ToDo(idea) => &idea.description,
            Self::Concept(idea) => &idea.description,
        }
    }

    /// Narrowing predicate: `true` when this idea carries the given kind tag.
    pub fn is_of_type(&self, kind: IdeaType) -> bool {
        self.kind() == kind
    }

    pub fn as_basic_idea(&self) -> Option<&BasicIdea> {
        match self {
            Self::BasicIdea(idea) => Some(idea),
            _ => None,
        }
    }

    pub fn as_to_do(&self) -> Option<&ToDo> {
        match self {
            Self::ToDo(idea) => Some(idea),
            _ => None,
        }
    }

    pub fn as_concept(&self) -> Option<&Concept> {
        match self {
            Self::Concept(idea) => Some(idea),
            _ => None,
        }
    }
}

impl From<BasicIdea> for Idea {
    fn from(value: BasicIdea) -> Self {
        Self::BasicIdea(value)
    }
}

impl From<ToDo> for Idea {
    fn from(value: ToDo) -> Self {
        Self::ToDo(value)
    }
}

impl From<Concept> for Idea {
    fn from(value: Concept) -> Self {
        Self::Concept(value)
    }
}
