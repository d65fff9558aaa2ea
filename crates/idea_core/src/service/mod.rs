//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Trigger change notifications without leaking storage details.

pub mod idea_service;
