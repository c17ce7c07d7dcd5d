//! # Dianovi Console
//!
//! Terminal UI layer for the dianovi patient API.
//!
//! Contains:
//! - The patient board: the client-side view state rebuilt from the server
//!   on every list fetch (`board`)
//! - Pure text rendering of the board and per-card recommendation regions
//!   (`render`)
//! - A modal prompt abstraction with a rustyline implementation (`prompt`)
//! - The event controller wiring user actions to API calls and board
//!   updates (`session`)
//! - The bulk import flow (`ingest`)
//!
//! The board is the only client-side cache; nothing here persists state.

#![warn(rust_2018_idioms)]

pub mod board;
pub mod ingest;
pub mod prompt;
pub mod render;
pub mod session;

pub use board::{BoardState, PatientBoard, PatientCard, RecommendationPanel};
pub use prompt::{PromptError, Prompter, ReadlinePrompter, ScriptedPrompter};
pub use session::ConsoleSession;
