use anyhow::{Context, Result};

use vocards_lib::flashcards::LanguagePair;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    topic: &str,
    count: Option<u8>,
    direction: Option<LanguagePair>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let count = count.unwrap_or(app.config.defaults.card_count);
    let pair = app.language_pair(direction);

    let mut workspace = app.new_workspace();
    let added = app
        .runtime
        .block_on(workspace.add_generated(topic, count, pair))
        .context(format!("Failed to generate cards for '{}'", topic.trim()))?;

    let cards = workspace.store().cards();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cards)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_cards(cards, use_color));
            println!(
                "\n{}",
                terminal::paint(
                    &format!("{} cards ({}) on \"{}\"", added, pair, topic.trim()),
                    Color::DIM,
                    use_color
                )
            );
        }
    }

    Ok(())
}
