//! Generation engine for SpecBook, specification-driven development for books.
//!
//! Character and setting specs live as structured files inside a project
//! tree. This crate locates the project, resolves which specs to use (by name
//! or by asking the operator), renders narrative fragments from them and
//! writes each fragment exactly once.

/// Project configuration.
pub mod config;
/// Entity kinds and identities.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Spec file formats.
pub mod format;
/// Fragment generation.
pub mod generate;
/// Project directory layout.
pub mod layout;
/// Project location and spec file access.
pub mod project;
/// Interactive prompts.
pub mod prompt;
/// Spec records.
pub mod record;
/// Fragment templates.
pub mod render;
/// Entity resolution.
pub mod resolver;
/// Creating new specs.
pub mod specify;

pub use config::BookConfig;
pub use entity::{EntityKind, identity_of};
pub use error::{BookError, BookResult};
pub use format::RecordFormat;
pub use generate::{FragmentKind, GenerateRequest, Generated, generate};
pub use layout::Layout;
pub use project::Project;
pub use prompt::{LinePrompter, Prompter};
pub use record::Record;
