//! Idea use-case service.
//!
//! # Responsibility
//! - Provide create/update/list-by-type entry points for core callers.
//! - Decide whether an update is worth a notification, per idea kind.
//!
//! # Invariants
//! - Failed updates are returned unchanged and never notify.
//! - A notification fires at most once per update, with the submitted patch.

use crate::model::draft::Draft;
use crate::model::idea::{Idea, IdeaField, IdeaId, IdeaType};
use crate::model::update::IdeaUpdate;
use crate::notification::NotificationService;
use crate::repo::idea_repo::{IdeaRepository, RepoResult};
use log::debug;

const BASIC_IDEA_NOTIFY_FIELDS: &[IdeaField] = &[IdeaField::Title];
const TO_DO_NOTIFY_FIELDS: &[IdeaField] = &[IdeaField::Done];
const CONCEPT_NOTIFY_FIELDS: &[IdeaField] = &[IdeaField::References];

/// Fields whose change on an idea of `kind` triggers a notification.
pub fn notify_on_changes_to(kind: IdeaType) -> &'static [IdeaField] {
    match kind {
        IdeaType::BasicIdea => BASIC_IDEA_NOTIFY_FIELDS,
        IdeaType::ToDo => TO_DO_NOTIFY_FIELDS,
        IdeaType::Concept => CONCEPT_NOTIFY_FIELDS,
    }
}

/// Use-case service over an idea repository and a notification sink.
pub struct IdeaService<N: NotificationService, R: IdeaRepository> {
    notification_service: N,
    repo: R,
}

impl<N: NotificationService, R: IdeaRepository> IdeaService<N, R> {
    pub fn new(notification_service: N, repo: R) -> Self {
        Self {
            notification_service,
            repo,
        }
    }

    /// Stores a new idea and returns it with its assigned id.
    pub fn create<D: Draft>(&mut self, draft: D) -> D::Persisted {
        self.repo.store(draft)
    }

    /// Applies a partial update.
    ///
    /// # Contract
    /// - Repository errors are returned as-is.
    /// - Notifies with the submitted patch when a watched field changed.
    pub fn update(&mut self, update: impl Into<IdeaUpdate>) -> RepoResult<()> {
        let update = update.into();
        let changes = self.repo.update(&update)?;

        let watched = notify_on_changes_to(update.kind());
        let should_notify = changes.iter().any(|field| watched.contains(field));
        debug!(
            "event=idea_update module=service status=ok id={} type={} changed={} notify={}",
            update.id(),
            update.kind(),
            join_fields(&changes),
            should_notify
        );

        if should_notify {
            self.notification_service.notify(&update);
        }
        Ok(())
    }

    /// Lists ideas of one kind, keeping repository order.
    pub fn get_all_by_type(&self, kind: IdeaType) -> Vec<Idea> {
        self.repo
            .all()
            .into_iter()
            .filter(|idea| idea.is_of_type(kind))
            .collect()
    }

    pub fn get(&self, id: IdeaId) -> Option<Idea> {
        self.repo.get(id)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }
}

fn join_fields(fields: &[IdeaField]) -> String {
    if fields.is_empty() {
        return "none".to_string();
    }
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::{join_fields, notify_on_changes_to};
    use crate::model::idea::{IdeaField, IdeaType};

    #[test]
    fn each_kind_watches_one_field() {
        assert_eq!(notify_on_changes_to(IdeaType::BasicIdea), &[IdeaField::Title]);
        assert_eq!(notify_on_changes_to(IdeaType::ToDo), &[IdeaField::Done]);
        assert_eq!(
            notify_on_changes_to(IdeaType::Concept),
            &[IdeaField::References]
        );
    }

    #[test]
    fn join_fields_formats_for_log_lines() {
        assert_eq!(join_fields(&[]), "none");
        assert_eq!(
            join_fields(&[IdeaField::Title, IdeaField::Done]),
            "title,done"
        );
    }
}
