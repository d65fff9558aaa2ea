//! Idea drafts: idea data before the store assigns an identifier.
//!
//! # Invariants
//! - A draft never carries an `id`; persisting attaches exactly one.
//! - Persisting keeps every draft field unchanged.

use crate::model::idea::{BasicIdea, Concept, Idea, IdeaId, IdeaType, ToDo, Url};
use serde::{Deserialize, Serialize};

/// Draft that can be turned into a persisted record once an id is known.
///
/// `Persisted` keeps the concrete record type, so storing a `ToDoDraft`
/// hands back a `ToDo` rather than a generic `Idea`.
pub trait Draft {
    type Persisted: Clone + Into<Idea>;

    fn kind(&self) -> IdeaType;

    fn persist(self, id: IdeaId) -> Self::Persisted;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicIdeaDraft {
    pub title: String,
    pub description: String,
}

impl BasicIdeaDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Draft for BasicIdeaDraft {
    type Persisted = BasicIdea;

    fn kind(&self) -> IdeaType {
        IdeaType::BasicIdea
    }

    fn persist(self, id: IdeaId) -> BasicIdea {
        BasicIdea {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

/// To-do draft. Starts as not done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoDraft {
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl ToDoDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

impl Draft for ToDoDraft {
    type Persisted = ToDo;

    fn kind(&self) -> IdeaType {
        IdeaType::ToDo
    }

    fn persist(self, id: IdeaId) -> ToDo {
        ToDo {
            id,
            title: self.title,
            description: self.description,
            done: self.done,
        }
    }
}

/// Concept draft. Starts with `done` unspecified and no references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDraft {
    pub title: String,
    pub description: String,
    pub done: Option<bool>,
    pub references: Vec<Url>,
}

impl ConceptDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: None,
            references: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Pass `None` to leave `done` unspecified.
    pub fn with_done(mut self, done: Option<bool>) -> Self {
        self.done = done;
        self
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Url>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }
}

impl Draft for ConceptDraft {
    type Persisted = Concept;

    fn kind(&self) -> IdeaType {
        IdeaType::Concept
    }

    fn persist(self, id: IdeaId) -> Concept {
        Concept {
            id,
            title: self.title,
            description: self.description,
            done: self.done,
            references: self.references,
        }
    }
}

/// Draft of any kind, tagged the same way as [`Idea`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IdeaDraft {
    BasicIdea(BasicIdeaDraft),
    ToDo(ToDoDraft),
    Concept(ConceptDraft),
}

impl Draft for IdeaDraft {
    type Persisted = Idea;

    fn kind(&self) -> IdeaType {
        match self {
            Self::BasicIdea(draft) => draft.kind(),
            Self::ToDo(draft) => draft.kind(),
            Self::Concept(draft) => draft.kind(),
        }
    }

    fn persist(self, id: IdeaId) -> Idea {
        match self {
            Self::BasicIdea(draft) => draft.persist(id).into(),
            Self::ToDo(draft) => draft.persist(id).into(),
            Self::Concept(draft) => draft.persist(id).into(),
        }
    }
}

impl From<BasicIdeaDraft> for IdeaDraft {
    fn from(value: BasicIdeaDraft) -> Self {
        Self::BasicIdea(value)
    }
}

impl From<ToDoDraft> for IdeaDraft {
    fn from(value: ToDoDraft) -> Self {
        Self::ToDo(value)
    }
}

impl From<ConceptDraft> for IdeaDraft {
    fn from(value: ConceptDraft) -> Self {
        Self::Concept(value)
    }
}
