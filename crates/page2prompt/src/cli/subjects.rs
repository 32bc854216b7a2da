//! `subjects` command handler.

use crate::cli::context::{gateway, read_text};
use page2prompt::{
    Page2PromptConfig, Page2PromptResult, ShotTable, SubjectExtractor, SubjectRegistry,
    SubjectTable,
};
use std::path::Path;
use tracing::{info, instrument};

/// Extract subjects from a script and merge them into the subject table.
///
/// Extracted records replace stored records of the same name; shot-list
/// names still missing afterwards get inactive placeholders.
#[instrument(skip(config), fields(script = %script.display(), shots = %shots.display()))]
pub async fn run_subjects(
    config: &Page2PromptConfig,
    script: &Path,
    shots: &Path,
) -> Page2PromptResult<()> {
    let text = read_text(script).await?;
    let shot_list = ShotTable::new(shots).load().await?;

    let table = SubjectTable::new(config.storage.subjects_path());
    let mut registry = SubjectRegistry::from_subjects(table.load_or_create().await?);

    let extractor = SubjectExtractor::new(gateway(config)?).with_timeout(config.gateway.timeout());
    let before = registry.len();
    let outcome = extractor.extract(&text, &shot_list, &mut registry).await;
    table.save(registry.subjects()).await?;
    info!(
        extracted = outcome.subjects.len(),
        placeholders = outcome.placeholders,
        dropped = outcome.dropped,
        total = registry.len(),
        "Subjects merged"
    );

    println!(
        "Merged {} subjects ({} new) into {}",
        outcome.subjects.len(),
        registry.len() - before,
        table.path().display()
    );
    for subject in registry.subjects() {
        println!("  [{}] {}: {}", subject.kind, subject.name, subject.description);
    }
    Ok(())
}
