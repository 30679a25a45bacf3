//! Flashcard study and creation workflow for Vocards
//!
//! This module provides:
//! - The in-memory card store (session-only, nothing is persisted)
//! - Manual and AI-assisted card creation
//! - The study session state machine (flip, next, previous)
//! - The workspace that owns all of the above

pub mod controller;
pub mod models;
pub mod session;
pub mod store;
pub mod workspace;

pub use controller::{CreationController, FlashcardError};
pub use models::*;
pub use session::{Face, StudyMode, StudySession};
pub use store::CardStore;
pub use workspace::Workspace;
