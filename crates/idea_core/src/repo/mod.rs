//! Repository layer: idea storage contracts and implementations.
//!
//! # Responsibility
//! - Define the storage contract the service layer depends on.
//! - Keep id assignment, merge and change detection out of the service.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`IdeaDoesNotExist`,
//!   `InvalidDataForGivenType`) as values; they never panic on bad input.

pub mod idea_repo;
