//! Domain model for ideas: basic notes, to-dos and concepts.
//!
//! # Responsibility
//! - Define one record type per idea kind plus the tagged `Idea` sum type.
//! - Define drafts (pre-id data) and partial updates for every kind.
//!
//! # Invariants
//! - Every idea is identified by a store-assigned `IdeaId`.
//! - Kind-specific fields live only on the kind that owns them.

pub mod draft;
pub mod idea;
pub mod update;
