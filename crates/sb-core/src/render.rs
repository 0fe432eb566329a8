//! Fragment templates.

use crate::entity::identity_of;
use crate::record::Record;

/// Placeholder for spec fields that are absent.
pub const MISSING: &str = "N/A";

/// Render a scene skeleton for a character in a setting.
///
/// Reads `name`, `desire` and `fear` from the character and `world.name`,
/// `world.mood` from the setting. The output depends only on the inputs.
pub fn render_scene(character: &Record, setting: &Record) -> String {
    let world = setting.section("world").unwrap_or_default();
    let field = |rec: &Record, key: &str| rec.text(key).unwrap_or_else(|| MISSING.to_string());

    let char_name = field(character, "name");
    let desire = field(character, "desire");
    let fear = field(character, "fear");
    let setting_name = field(&world, "name");
    let mood = field(&world, "mood");

    format!(
        "# Scene: {char_name} in {setting_name}

## Influence Specs
- **Character:** {char_name} (Desire: {desire}, Fear: {fear})
- **Setting:** {setting_name} (Mood: {mood})

## Scene Goal
- *What does the character want to achieve in this scene?*

## Scene Draft
> (Start writing here)
"
    )
}

/// File name of the scene for a character/setting pair.
pub fn scene_filename(character: &str, setting: &str) -> String {
    format!(
        "scene_{}_em_{}.md",
        identity_of(character),
        identity_of(setting)
    )
}
