//! Idea repository contract and in-memory implementations.
//!
//! # Responsibility
//! - Assign identifiers and keep every idea record in process memory.
//! - Apply partial updates and report which fields actually changed.
//!
//! # Invariants
//! - Identifiers start at 1, increase by one per stored idea and are never
//!   reused, not even after `truncate`.
//! - An update whose kind tag differs from the stored idea is rejected as a
//!   whole; nothing is merged.
//! - Change detection compares values structurally (`PartialEq`), so two
//!   reference lists are equal only with the same items in the same order.

use crate::model::draft::Draft;
use crate::model::idea::{Changes, Idea, IdeaField, IdeaId, IdeaType};
use crate::model::update::IdeaUpdate;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type RepoResult<T> = Result<T, UpdateError>;

/// Failure of an idea update. Neither variant leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// No idea is stored under the requested id.
    IdeaDoesNotExist(IdeaId),
    /// The patch kind tag does not match the stored idea's kind.
    InvalidDataForGivenType {
        id: IdeaId,
        stored: IdeaType,
        requested: IdeaType,
    },
}

impl Display for UpdateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdeaDoesNotExist(id) => write!(f, "idea does not exist: {id}"),
            Self::InvalidDataForGivenType {
                id,
                stored,
                requested,
            } => write!(
                f,
                "invalid data for idea {id}: stored as `{stored}`, update targets `{requested}`"
            ),
        }
    }
}

impl Error for UpdateError {}

/// Repository interface for idea storage.
pub trait IdeaRepository {
    /// Assigns the next id to `draft`, stores it and returns the record.
    fn store<D: Draft>(&mut self, draft: D) -> D::Persisted;
    /// Merges `update` into the stored idea and returns the changed fields.
    fn update(&mut self, update: &IdeaUpdate) -> RepoResult<Changes>;
    fn get(&self, id: IdeaId) -> Option<Idea>;
    /// All ideas in insertion order.
    fn all(&self) -> Vec<Idea>;
    /// Drops every record. The id counter keeps counting.
    fn truncate(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single-owner in-memory idea repository.
///
/// Ids grow monotonically, so the id-ordered map also iterates in insertion
/// order.
#[derive(Debug, Default)]
pub struct InMemoryIdeaRepository {
    ideas: BTreeMap<IdeaId, Idea>,
    last_id: IdeaId,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> IdeaId {
        self.last_id += 1;
        self.last_id
    }
}

impl IdeaRepository for InMemoryIdeaRepository {
    fn store<D: Draft>(&mut self, draft: D) -> D::Persisted {
        let id = self.next_id();
        let kind = draft.kind();
        let persisted = draft.persist(id);
        self.ideas.insert(id, persisted.clone().into());

        debug!("event=idea_store module=repo status=ok id={id} type={kind}");
        persisted
    }

    fn update(&mut self, update: &IdeaUpdate) -> RepoResult<Changes> {
        let id = update.id();
        let current = self
            .ideas
            .get(&id)
            .ok_or(UpdateError::IdeaDoesNotExist(id))?;

        let (merged, changes) = apply_update(current, update)?;
        self.ideas.insert(id, merged);
        Ok(changes)
    }

    fn get(&self, id: IdeaId) -> Option<Idea> {
        self.ideas.get(&id).cloned()
    }

    fn all(&self) -> Vec<Idea> {
        self.ideas.values().cloned().collect()
    }

    fn truncate(&mut self) {
        self.ideas.clear();
    }

    fn len(&self) -> usize {
        self.ideas.len()
    }
}

/// Thread-safe handle over one shared in-memory repository.
///
/// Clones point at the same store. One mutex guards both the id counter and
/// the record map, so an update's read-modify-write is atomic.
#[derive(Debug, Clone, Default)]
pub struct SharedIdeaRepository {
    inner: Arc<Mutex<InMemoryIdeaRepository>>,
}

impl SharedIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryIdeaRepository> {
        // Every repository method leaves the map and counter consistent
        // between statements, so state behind a poisoned lock is still valid.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IdeaRepository for SharedIdeaRepository {
    fn store<D: Draft>(&mut self, draft: D) -> D::Persisted {
        self.lock().store(draft)
    }

    fn update(&mut self, update: &IdeaUpdate) -> RepoResult<Changes> {
        self.lock().update(update)
    }

    fn get(&self, id: IdeaId) -> Option<Idea> {
        self.lock().get(id)
    }

    fn all(&self) -> Vec<Idea> {
        self.lock().all()
    }

    fn truncate(&mut self) {
        self.lock().truncate();
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Builds the merged idea and its change list without touching storage.
fn apply_update(current: &Idea, update: &IdeaUpdate) -> RepoResult<(Idea, Changes)> {
    let mut changes = Changes::new();

    let merged = match (current, update) {
        (Idea::BasicIdea(idea), IdeaUpdate::BasicIdea(patch)) => {
            let mut next = idea.clone();
            merge_field(IdeaField::Title, &mut next.title, patch.title.as_ref(), &mut changes);
            merge_field(
                IdeaField::Description,
                &mut next.description,
                patch.description.as_ref(),
                &mut changes,
            );
            Idea::BasicIdea(next)
        }
        (Idea::ToDo(idea), IdeaUpdate::ToDo(patch)) => {
            let mut next = idea.clone();
            merge_field(IdeaField::Title, &mut next.title, patch.title.as_ref(), &mut changes);
            merge_field(
                IdeaField::Description,
                &mut next.description,
                patch.description.as_ref(),
                &mut changes,
            );
            merge_field(IdeaField::Done, &mut next.done, patch.done.as_ref(), &mut changes);
            Idea::ToDo(next)
        }
        (Idea::Concept(idea), IdeaUpdate::Concept(patch)) => {
            let mut next = idea.clone();
            merge_field(IdeaField::Title, &mut next.title, patch.title.as_ref(), &mut changes);
            merge_field(
                IdeaField::Description,
                &mut next.description,
                patch.description.as_ref(),
                &mut changes,
            );
            merge_field(IdeaField::Done, &mut next.done, patch.done.as_ref(), &mut changes);
            merge_field(
                IdeaField::References,
                &mut next.references,
                patch.references.as_ref(),
                &mut changes,
            );
            Idea::Concept(next)
        }
        (stored, requested) => {
            return Err(UpdateError::InvalidDataForGivenType {
                id: stored.id(),
                stored: stored.kind(),
                requested: requested.kind(),
            });
        }
    };

    Ok((merged, changes))
}

fn merge_field<T>(field: IdeaField, current: &mut T, patch: Option<&T>, changes: &mut Changes)
where
    T: Clone + PartialEq,
{
    if let Some(value) = patch {
        if value != current {
            *current = value.clone();
            changes.push(field);
        }
    }
}
