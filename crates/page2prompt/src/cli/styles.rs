//! `style-random` command handler.

use page2prompt::{Page2PromptConfig, Page2PromptResult, StyleCatalog, StyleTable};
use tracing::instrument;

/// Generate a random style, store it and print it.
#[instrument(skip(config))]
pub async fn run_style_random(config: &Page2PromptConfig) -> Page2PromptResult<()> {
    let table = StyleTable::new(config.storage.styles_path());
    let mut catalog = StyleCatalog::from_styles(table.load_or_create().await?);

    let style = catalog.generate_random();
    table.save(catalog.styles()).await?;

    println!("Name:        {}", style.name);
    println!("Prefix:      {}", style.prefix);
    println!("Suffix:      {}", style.suffix);
    if let Some(genre) = &style.genre {
        println!("Genre:       {}", genre);
    }
    if let Some(descriptors) = &style.descriptors {
        println!("Descriptors: {}", descriptors);
    }
    Ok(())
}
