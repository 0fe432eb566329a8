use std::io;
use std::path::Path;

use sb_core::{BookConfig, FragmentKind, GenerateRequest, LinePrompter};

pub fn run(
    project: &Path,
    config: &BookConfig,
    kind: String,
    character: Option<String>,
    setting: Option<String>,
) -> Result<String, String> {
    let request = GenerateRequest {
        kind,
        character,
        setting,
    };
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());

    let generated =
        sb_core::generate(project, config, &request, &mut prompter).map_err(|e| e.to_string())?;

    let label = match generated.kind {
        FragmentKind::Scene => "Scene",
    };
    Ok(format!("{label} generated at: {}", generated.path.display()))
}
