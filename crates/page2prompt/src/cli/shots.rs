//! `shots` command handler.

use crate::cli::context::{gateway, read_text};
use page2prompt::{Page2PromptConfig, Page2PromptResult, ShotListGenerator, ShotTable};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Generate a shot list for a script and write it as CSV.
#[instrument(skip(config), fields(script = %script.display(), out = %out.display()))]
pub async fn run_shots(config: &Page2PromptConfig, script: &Path, out: &Path) -> Page2PromptResult<()> {
    let text = read_text(script).await?;
    let generator = ShotListGenerator::new(gateway(config)?)
        .with_timeout(config.gateway.timeout())
        .with_temperature(config.gateway.temperature);

    let outcome = generator.generate(&text).await;
    if let Some(error) = &outcome.error {
        warn!(error = %error, "Shot list generation failed");
    }

    ShotTable::new(out).save(&outcome.shots).await?;
    info!(shots = outcome.shots.len(), dropped = outcome.dropped, "Shot list written");

    println!("Wrote {} shots to {}", outcome.shots.len(), out.display());
    if outcome.dropped > 0 {
        println!("Skipped {} malformed lines", outcome.dropped);
    }
    Ok(())
}
