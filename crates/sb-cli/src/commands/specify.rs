use std::io;
use std::path::Path;

use sb_core::specify::{
    CharacterSpec, SettingSpec, specify_character, specify_seed, specify_setting,
};
use sb_core::{BookConfig, LinePrompter, Project};

pub fn seed(project: &Path, config: &BookConfig, description: Option<&str>) -> Result<String, String> {
    let project = Project::open(project, config.clone()).map_err(|e| e.to_string())?;
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let path = specify_seed(&project, description, &mut prompter).map_err(|e| e.to_string())?;
    Ok(format!("Seed spec written to: {}", path.display()))
}

pub fn character(
    project: &Path,
    config: &BookConfig,
    name: Option<String>,
    desire: Option<String>,
    fear: Option<String>,
) -> Result<String, String> {
    let project = Project::open(project, config.clone()).map_err(|e| e.to_string())?;
    let spec = CharacterSpec { name, desire, fear };
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let path = specify_character(&project, &spec, &mut prompter).map_err(|e| e.to_string())?;
    Ok(format!("Character spec written to: {}", path.display()))
}

pub fn setting(
    project: &Path,
    config: &BookConfig,
    name: Option<String>,
    mood: Option<String>,
) -> Result<String, String> {
    let project = Project::open(project, config.clone()).map_err(|e| e.to_string())?;
    let spec = SettingSpec { name, mood };
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let path = specify_setting(&project, &spec, &mut prompter).map_err(|e| e.to_string())?;
    Ok(format!("Setting spec written to: {}", path.display()))
}
