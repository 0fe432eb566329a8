//! Writing new character, setting and seed specs.
//!
//! Fields not given up front are asked for through a [`Prompter`].

use std::path::PathBuf;

use crate::entity::{EntityKind, identity_of};
use crate::error::{BookError, BookResult};
use crate::project::{Project, seed_record};
use crate::prompt::Prompter;
use crate::record::Record;

/// Fields for a new character spec. Unset fields are asked for.
#[derive(Debug, Clone, Default)]
pub struct CharacterSpec {
    /// Display name.
    pub name: Option<String>,
    /// What the character wants.
    pub desire: Option<String>,
    /// What the character fears.
    pub fear: Option<String>,
}

/// Fields for a new setting spec. Unset fields are asked for.
#[derive(Debug, Clone, Default)]
pub struct SettingSpec {
    /// Display name.
    pub name: Option<String>,
    /// Atmosphere of the place.
    pub mood: Option<String>,
}

/// Write a new character spec and return its path.
pub fn specify_character<P: Prompter + ?Sized>(
    project: &Project,
    spec: &CharacterSpec,
    prompter: &mut P,
) -> BookResult<PathBuf> {
    let kind = EntityKind::Character;
    let name = answer(prompter, spec.name.as_deref(), "Character name:")?;
    let path = free_path(project, kind, &name)?;
    let desire = answer(prompter, spec.desire.as_deref(), "What does the character desire?")?;
    let fear = answer(prompter, spec.fear.as_deref(), "What does the character fear?")?;

    let record = Record::new()
        .with("name", name.trim())
        .with("desire", desire)
        .with("fear", fear);
    write_spec(project, kind, &name, path, &record)
}

/// Write a new setting spec and return its path.
pub fn specify_setting<P: Prompter + ?Sized>(
    project: &Project,
    spec: &SettingSpec,
    prompter: &mut P,
) -> BookResult<PathBuf> {
    let kind = EntityKind::Setting;
    let name = answer(prompter, spec.name.as_deref(), "Setting name:")?;
    let path = free_path(project, kind, &name)?;
    let mood = answer(prompter, spec.mood.as_deref(), "What is the mood of this place?")?;

    let world = Record::new().with("name", name.trim()).with("mood", mood);
    write_spec(project, kind, &name, path, &Record::new().with("world", world))
}

/// Set the book idea in the seed spec, creating the seed if needed.
///
/// Without a description the operator is asked, with the current idea as
/// the default answer.
pub fn specify_seed<P: Prompter + ?Sized>(
    project: &Project,
    description: Option<&str>,
    prompter: &mut P,
) -> BookResult<PathBuf> {
    let path = project.spec_path("seed");
    let mut seed = project.load(&path)?;
    if seed.is_empty() {
        seed = seed_record();
    }

    let idea = match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d.to_string(),
        None => {
            let current = seed.text("idea").filter(|i| !i.is_empty());
            prompter
                .ask("Describe the book idea:", current.as_deref())
                .map_err(BookError::Prompt)?
        }
    };
    seed.insert("idea", idea);
    project.save(&path, &seed)?;
    tracing::info!(path = %path.display(), "updated seed spec");
    Ok(path)
}

fn answer<P: Prompter + ?Sized>(
    prompter: &mut P,
    given: Option<&str>,
    question: &str,
) -> BookResult<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None => prompter.ask(question, None).map_err(BookError::Prompt),
    }
}

/// Spec path for `name`, if the name is usable and no spec exists there yet.
fn free_path(project: &Project, kind: EntityKind, name: &str) -> BookResult<PathBuf> {
    check_name(kind, name)?;
    let path = project.record_path(kind, &identity_of(name.trim()));
    if path.exists() {
        return Err(BookError::EntityExists {
            kind,
            name: name.to_string(),
            path,
        });
    }
    Ok(path)
}

fn check_name(kind: EntityKind, name: &str) -> BookResult<()> {
    let reason = if name.trim().is_empty() {
        "name is blank"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else if name.contains("..") {
        "name contains '..'"
    } else {
        return Ok(());
    };
    Err(BookError::InvalidName {
        kind,
        name: name.to_string(),
        reason,
    })
}

fn write_spec(
    project: &Project,
    kind: EntityKind,
    name: &str,
    path: PathBuf,
    record: &Record,
) -> BookResult<PathBuf> {
    if !project.save_new(&path, record)? {
        return Err(BookError::EntityExists {
            kind,
            name: name.to_string(),
            path,
        });
    }
    tracing::info!(%kind, path = %path.display(), "wrote spec");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::config::BookConfig;
    use crate::format::RecordFormat;
    use crate::layout::Layout;
    use crate::prompt::LinePrompter;

    fn project(dir: &TempDir, format: RecordFormat) -> Project {
        Project::init(dir.path(), BookConfig::default().with_format(format)).unwrap()
    }

    fn input(text: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    fn named(name: &str) -> CharacterSpec {
        CharacterSpec {
            name: Some(name.into()),
            desire: Some(String::new()),
            fear: Some(String::new()),
        }
    }

    #[test]
    fn character_spec_written_under_identity() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        let spec = CharacterSpec {
            name: Some("Old Mira".into()),
            desire: Some("go home".into()),
            fear: Some(String::new()),
        };
        let path = specify_character(&p, &spec, &mut input("")).unwrap();
        assert!(path.ends_with("specs/characters/old_mira.yaml"));
        let rec = p.load(&path).unwrap();
        assert_eq!(rec.keys().collect::<Vec<_>>(), ["name", "desire", "fear"]);
        assert_eq!(rec.text("fear").as_deref(), Some(""));
    }

    #[test]
    fn missing_character_fields_are_asked() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        let mut prompter = input("Luna\nfind the relic\nthe dark\n");
        let path = specify_character(&p, &CharacterSpec::default(), &mut prompter).unwrap();

        let rec = p.load(&path).unwrap();
        assert_eq!(rec.text("name").as_deref(), Some("Luna"));
        assert_eq!(rec.text("desire").as_deref(), Some("find the relic"));
        assert_eq!(rec.text("fear").as_deref(), Some("the dark"));
        let shown = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(shown.contains("Character name:"));
        assert!(shown.contains("What does the character fear?"));
    }

    #[test]
    fn setting_spec_nests_world() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Json);
        let spec = SettingSpec {
            name: Some("Aethelgard".into()),
            mood: None,
        };
        let path = specify_setting(&p, &spec, &mut input("grim\n")).unwrap();
        assert!(path.ends_with("specs/settings/aethelgard.json"));
        let world = p.load(&path).unwrap().section("world").unwrap();
        assert_eq!(world.text("mood").as_deref(), Some("grim"));
    }

    #[test]
    fn existing_spec_is_not_replaced() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        specify_character(&p, &named("Luna"), &mut input("")).unwrap();
        let err = specify_character(&p, &named("LUNA"), &mut input("")).unwrap_err();
        assert!(matches!(err, BookError::EntityExists { .. }));
        let rec = p.load(&p.record_path(EntityKind::Character, "luna")).unwrap();
        assert_eq!(rec.text("name").as_deref(), Some("Luna"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        let err = specify_character(&p, &named("  "), &mut input("")).unwrap_err();
        assert!(matches!(err, BookError::InvalidName { .. }));

        let err = specify_setting(&p, &SettingSpec::default(), &mut input("\n")).unwrap_err();
        assert!(matches!(err, BookError::InvalidName { kind: EntityKind::Setting, .. }));
        assert_eq!(
            std::fs::read_dir(p.dir(Layout::Characters)).unwrap().count(),
            0
        );
    }

    #[test]
    fn path_like_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        for name in ["../../escape", "a/b", "a\\b", "..", "x..y"] {
            let err = specify_character(&p, &named(name), &mut input("")).unwrap_err();
            assert!(
                matches!(err, BookError::InvalidName { .. }),
                "{name} accepted"
            );
        }
        assert!(!dir.path().parent().unwrap().join("escape.yaml").exists());
        assert_eq!(
            std::fs::read_dir(p.dir(Layout::Characters)).unwrap().count(),
            0
        );
    }

    #[test]
    fn seed_idea_from_description() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        let path = specify_seed(&p, Some("A lighthouse keeper"), &mut input("")).unwrap();
        let seed = p.load(&path).unwrap();
        assert_eq!(seed.text("idea").as_deref(), Some("A lighthouse keeper"));
        assert_eq!(seed.text("status").as_deref(), Some("seeded"));
        assert_eq!(
            seed.keys().collect::<Vec<_>>(),
            ["idea", "genre", "themes", "status"]
        );
    }

    #[test]
    fn seed_prompt_defaults_to_current_idea() {
        let dir = TempDir::new().unwrap();
        let p = project(&dir, RecordFormat::Yaml);
        specify_seed(&p, Some("A lighthouse keeper"), &mut input("")).unwrap();

        let mut prompter = input("\n");
        let path = specify_seed(&p, None, &mut prompter).unwrap();
        assert_eq!(
            p.load(&path).unwrap().text("idea").as_deref(),
            Some("A lighthouse keeper")
        );
        let shown = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(shown.contains("(Default: A lighthouse keeper)"));
    }

    #[test]
    fn seed_created_when_missing() {
        let dir = TempDir::new().unwrap();
        let p = Project::open(dir.path(), BookConfig::default()).unwrap();
        let path = specify_seed(&p, None, &mut input("Two sisters\n")).unwrap();
        assert!(path.ends_with("specs/seed.yaml"));
        assert_eq!(
            p.load(&path).unwrap().text("idea").as_deref(),
            Some("Two sisters")
        );
    }
}
