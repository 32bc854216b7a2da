//! `notes` command handler.

use crate::cli::context::{cancel_on_ctrl_c, gateway, log_progress};
use page2prompt::{
    DirectorCatalog, DirectorNotesGenerator, DirectorStyleTable, Page2PromptConfig,
    Page2PromptResult, ShotTable, StyleCatalog, StyleTable, SubjectRegistry, SubjectTable,
};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Write director's notes for every shot of a shot list, in place.
#[instrument(skip(config), fields(shots = %shots.display()))]
pub async fn run_notes(
    config: &Page2PromptConfig,
    shots: &Path,
    style: Option<&str>,
    director: Option<&str>,
) -> Page2PromptResult<()> {
    let table = ShotTable::new(shots);
    let shot_list = table.load().await?;

    let registry = SubjectRegistry::from_subjects(
        SubjectTable::new(config.storage.subjects_path())
            .load_or_create()
            .await?,
    );
    let styles = StyleCatalog::from_styles(
        StyleTable::new(config.storage.styles_path())
            .load_or_create()
            .await?,
    );
    let directors = DirectorCatalog::load(
        DirectorStyleTable::new(config.storage.director_styles_path())
            .load_or_create()
            .await?,
    );

    let style = style.and_then(|name| {
        let found = styles.get(name);
        if found.is_none() {
            warn!(name, "Unknown style");
        }
        found
    });
    let director = director.and_then(|name| directors.get(name));

    let generator = DirectorNotesGenerator::new(gateway(config)?).with_timeout(config.gateway.timeout());
    let progress = log_progress("notes");
    let annotated = generator
        .generate_bulk(&shot_list, style, director, &registry, &progress, &cancel_on_ctrl_c())
        .await;

    table.save(&annotated).await?;
    let written = annotated.iter().filter(|s| s.directors_notes.is_some()).count();
    info!(written, total = annotated.len(), "Director's notes saved");

    println!("Wrote notes for {} of {} shots", written, annotated.len());
    Ok(())
}
