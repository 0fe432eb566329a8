use std::path::Path;

use sb_core::{BookConfig, Project};

pub fn run(path: &Path, config: &BookConfig) -> Result<String, String> {
    let project = Project::init(path, config.clone()).map_err(|e| e.to_string())?;
    Ok(format!("Project initialized at: {}", project.root().display()))
}
