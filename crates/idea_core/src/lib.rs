//! Core domain logic for ideas: notes, to-dos and concepts.
//! This crate is the single source of truth for idea invariants.

pub mod logging;
pub mod model;
pub mod notification;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{BasicIdeaDraft, ConceptDraft, Draft, IdeaDraft, ToDoDraft};
pub use model::idea::{
    BasicIdea, Changes, Concept, Idea, IdeaField, IdeaId, IdeaType, ToDo, Url,
};
pub use model::update::{BasicIdeaUpdate, ConceptUpdate, IdeaUpdate, ToDoUpdate};
pub use notification::{
    LogNotificationService, NotificationService, RecordingNotificationService,
};
pub use repo::idea_repo::{
    IdeaRepository, InMemoryIdeaRepository, RepoResult, SharedIdeaRepository, UpdateError,
};
pub use service::idea_service::{notify_on_changes_to, IdeaService};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
