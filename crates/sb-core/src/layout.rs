//! Fixed directory layout of a book project.

/// A well-known directory inside a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Root of all specs.
    Specs,
    /// Character specs.
    Characters,
    /// Setting specs.
    Settings,
    /// Writing plans.
    Plans,
    /// Task lists.
    Tasks,
    /// Generated fragments.
    Fragments,
    /// Scene skeletons.
    Scenes,
    /// Dialogue fragments.
    Dialogues,
    /// Chapter drafts.
    Drafts,
    /// Review reports.
    Reviews,
}

impl Layout {
    /// Every directory, in creation order.
    pub const ALL: [Layout; 10] = [
        Self::Specs,
        Self::Characters,
        Self::Settings,
        Self::Plans,
        Self::Tasks,
        Self::Fragments,
        Self::Scenes,
        Self::Dialogues,
        Self::Drafts,
        Self::Reviews,
    ];

    /// Path relative to the project root, `/`-separated.
    pub fn relative(self) -> &'static str {
        match self {
            Self::Specs => "specs",
            Self::Characters => "specs/characters",
            Self::Settings => "specs/settings",
            Self::Plans => "plans",
            Self::Tasks => "tasks",
            Self::Fragments => "fragments",
            Self::Scenes => "fragments/scenes",
            Self::Dialogues => "fragments/dialogues",
            Self::Drafts => "drafts",
            Self::Reviews => "reviews",
        }
    }
}
