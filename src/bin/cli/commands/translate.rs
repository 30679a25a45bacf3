use anyhow::{Context, Result};

use vocards_lib::flashcards::LanguagePair;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    word: &str,
    direction: Option<LanguagePair>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut draft = app.manual_draft();
    draft.front = word.to_string();
    draft.language_pair = app.language_pair(direction);

    let mut workspace = app.new_workspace();
    app.runtime
        .block_on(workspace.auto_translate(&mut draft))
        .context(format!("Failed to translate '{}'", word.trim()))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": draft.front.trim(),
                "translation": draft.back,
                "direction": draft.language_pair.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint(&draft.back, Color::GREEN, use_color));
        }
    }

    Ok(())
}
