//! Domain model for transcripts and their extracted tasks.
//!
//! # Responsibility
//! - Define the canonical records shared by extraction, persistence and
//!   services.
//!
//! # Invariants
//! - Every task belongs to exactly one transcript.
//! - A transcript is immutable once created.

pub mod task;
pub mod transcript;
