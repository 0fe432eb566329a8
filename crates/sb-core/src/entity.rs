//! Entity kinds and identity derivation.

use std::fmt;

use crate::layout::Layout;

/// The kinds of spec entities that feed fragment generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A character spec (`name`, `desire`, `fear`).
    Character,
    /// A setting spec (`world.name`, `world.mood`).
    Setting,
}

impl EntityKind {
    /// Directory holding this kind's spec files.
    pub fn dir(self) -> Layout {
        match self {
            Self::Character => Layout::Characters,
            Self::Setting => Layout::Settings,
        }
    }

    /// Heading shown above the numbered list during interactive selection.
    pub fn selection_title(self) -> String {
        format!("Select a {self}:")
    }

    /// Question asked after the numbered list.
    pub fn selection_question(self) -> String {
        match self {
            Self::Character => "Character number:".to_string(),
            Self::Setting => "Setting number:".to_string(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Setting => write!(f, "setting"),
        }
    }
}

/// Canonical identity for a display name: lower-cased, spaces replaced by
/// underscores. Used for spec file stems and fragment filenames.
pub fn identity_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
