//! Notification sinks for idea changes.
//!
//! # Responsibility
//! - Define the contract the idea service calls when a watched field changes.
//! - Provide a log-backed sink and an in-memory recording sink.
//!
//! # Invariants
//! - Sinks receive the update exactly as submitted, not the merged idea.
//! - `notify` has no return value; delivery is fire-and-forget.

use crate::model::update::IdeaUpdate;
use log::info;
use std::cell::RefCell;

/// Receiver of idea update notifications.
pub trait NotificationService {
    fn notify(&self, update: &IdeaUpdate);
}

impl<N: NotificationService + ?Sized> NotificationService for &N {
    fn notify(&self, update: &IdeaUpdate) {
        (**self).notify(update);
    }
}

/// Writes one metadata-only log line per notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationService;

impl NotificationService for LogNotificationService {
    fn notify(&self, update: &IdeaUpdate) {
        info!(
            "event=idea_notify module=notification status=ok id={} type={}",
            update.id(),
            update.kind()
        );
    }
}

/// Keeps every notified update in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotificationService {
    notified: RefCell<Vec<IdeaUpdate>>,
}

impl RecordingNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<IdeaUpdate> {
        self.notified.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.notified.borrow().len()
    }
}

impl NotificationService for RecordingNotificationService {
    fn notify(&self, update: &IdeaUpdate) {
        self.notified.borrow_mut().push(update.clone());
    }
}
