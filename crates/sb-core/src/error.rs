use std::path::PathBuf;

use crate::entity::EntityKind;

/// Alias for `Result<T, BookError>`.
pub type BookResult<T> = Result<T, BookError>;

/// Errors raised while working with a book project.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// The project root does not exist on disk.
    #[error("project not found at {}; run 'specbook init' first", .0.display())]
    ProjectNotFound(PathBuf),

    /// A spec file exists but could not be parsed.
    #[error("failed to read {}: {reason}", path.display())]
    MalformedRecord {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// An explicitly named entity has no spec file.
    #[error("{kind} '{name}' not found")]
    EntityNotFound {
        /// Kind of the missing entity.
        kind: EntityKind,
        /// The name as the operator gave it.
        name: String,
    },

    /// Interactive selection was requested but there is nothing to choose from.
    #[error("no {0} found to generate a scene")]
    NoCandidates(EntityKind),

    /// The requested fragment kind is not implemented.
    #[error("unknown generation type: {0}")]
    UnknownFragmentKind(String),

    /// The operator did not pick a valid option.
    #[error("invalid selection '{answer}': expected a number between 1 and {count}")]
    InvalidSelection {
        /// The last answer given.
        answer: String,
        /// Number of options offered.
        count: usize,
    },

    /// A name that cannot be used as a spec file name.
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        /// Kind of entity being named.
        kind: EntityKind,
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A spec with the same identity already exists.
    #[error("{kind} '{name}' already exists at {}", path.display())]
    EntityExists {
        /// Kind of the existing entity.
        kind: EntityKind,
        /// The name as the operator gave it.
        name: String,
        /// Location of the existing spec.
        path: PathBuf,
    },

    /// A record could not be serialized.
    #[error("cannot encode record: {0}")]
    Encode(String),

    /// Reading operator input failed.
    #[error("cannot read operator input: {0}")]
    Prompt(#[source] std::io::Error),

    /// A filesystem operation failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl BookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
