//! Storage layer: one named JSON blob per todo collection.
//!
//! # Responsibility
//! - Define the injectable storage contract used by the service layer.
//! - Keep blob (de)serialization and id allocation inside the storage
//!   boundary.
//!
//! # Invariants
//! - Each operation fully completes before returning; callers never observe
//!   a half-applied mutation.
//! - Storage returns semantic errors (`NotFound`) in addition to transport
//!   errors.

pub mod todo_store;
