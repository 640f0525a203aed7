//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage calls into use-case level APIs.
//! - Keep controller and rendering layers decoupled from storage details.

pub mod todo_service;
