//! Fragment generation: resolve specs, render, write once.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::BookConfig;
use crate::entity::EntityKind;
use crate::error::{BookError, BookResult};
use crate::layout::Layout;
use crate::project::{Project, write_new};
use crate::prompt::Prompter;
use crate::render::{render_scene, scene_filename};
use crate::resolver::resolve;

/// Kinds of fragments that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A scene skeleton for one character in one setting.
    Scene,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene => write!(f, "scene"),
        }
    }
}

impl FromStr for FragmentKind {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scene" => Ok(Self::Scene),
            other => Err(BookError::UnknownFragmentKind(other.to_string())),
        }
    }
}

/// What to generate. Unset names are chosen interactively.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Requested fragment kind, e.g. `"scene"`.
    pub kind: String,
    /// Explicit character name.
    pub character: Option<String>,
    /// Explicit setting name.
    pub setting: Option<String>,
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Kind of fragment produced.
    pub kind: FragmentKind,
    /// Location of the fragment file.
    pub path: PathBuf,
    /// `false` when the fragment already existed and was kept as is.
    pub written: bool,
}

/// Generate a fragment inside the project at `project_path`.
///
/// Stops at the first failure; nothing is written before every spec has been
/// resolved. An existing fragment for the same pair is never overwritten.
pub fn generate<P: Prompter + ?Sized>(
    project_path: &Path,
    config: &BookConfig,
    request: &GenerateRequest,
    prompter: &mut P,
) -> BookResult<Generated> {
    let project = Project::open(project_path, config.clone())?;
    match request.kind.parse::<FragmentKind>()? {
        FragmentKind::Scene => generate_scene(
            &project,
            request.character.as_deref(),
            request.setting.as_deref(),
            prompter,
        ),
    }
}

/// Generate a scene skeleton for a character/setting pair.
pub fn generate_scene<P: Prompter + ?Sized>(
    project: &Project,
    character: Option<&str>,
    setting: Option<&str>,
    prompter: &mut P,
) -> BookResult<Generated> {
    let character = resolve(project, EntityKind::Character, character, prompter)?;
    let setting = resolve(project, EntityKind::Setting, setting, prompter)?;

    let text = render_scene(&character.record, &setting.record);
    let path = project
        .dir(Layout::Scenes)
        .join(scene_filename(&character.identity, &setting.identity));
    let written = write_new(&path, &text)?;

    if written {
        tracing::info!(path = %path.display(), "wrote scene");
    } else {
        tracing::info!(path = %path.display(), "scene already exists, kept");
    }
    Ok(Generated {
        kind: FragmentKind::Scene,
        path,
        written,
    })
}
