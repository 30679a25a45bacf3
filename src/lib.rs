//! Vocards: a bilingual Russian/English flashcard tool.
//!
//! Cards are created by hand (optionally auto-translated) or generated in
//! batches by a text-generation service, then studied one at a time.
//! Nothing is persisted except the sign-in session.

pub mod auth;
pub mod config;
pub mod flashcards;
pub mod gateway;

pub use config::AppConfig;
pub use flashcards::Workspace;
