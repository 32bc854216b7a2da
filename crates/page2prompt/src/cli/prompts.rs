//! `prompts` command handler.

use crate::cli::commands::PromptsArgs;
use crate::cli::context::{cancel_on_ctrl_c, gateway, log_progress, read_text};
use page2prompt::{
    DirectorCatalog, DirectorStyleTable, Page2PromptConfig, Page2PromptResult, Project,
    ProjectStore, PromptAssembler, PromptOptions, PromptSession, ShotTable, StyleCatalog,
    StyleTable, SubjectRegistry, SubjectTable,
};
use tracing::{info, instrument, warn};

/// Generate prompts for every shot, print them and optionally save a
/// project.
#[instrument(skip(config, args), fields(shots = %args.shots.display(), project = ?args.project))]
pub async fn run_prompts(config: &Page2PromptConfig, args: &PromptsArgs) -> Page2PromptResult<()> {
    let shot_list = ShotTable::new(&args.shots).load().await?;
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

    let full_script = match &args.script {
        Some(path) => read_text(path).await?,
        None => String::new(),
    };
    if args.stick_to_script && full_script.is_empty() {
        warn!("--stick-to-script without --script sends only the shot excerpts");
    }

    let mut options = PromptOptions::default()
        .with_end_parameters(args.end_params.as_str())
        .with_stick_to_script(args.stick_to_script)
        .with_full_script(full_script.as_str())
        .with_temperature(config.gateway.temperature);
    if let Some(name) = &args.style {
        match styles.get(name) {
            Some(style) => options = options.with_style(style.clone()),
            None => warn!(name = %name, "Unknown style"),
        }
    }
    if let Some(director) = args.director.as_deref().and_then(|name| directors.get(name)) {
        options = options.with_director_style(director.clone());
    }

    let assembler = PromptAssembler::new(gateway(config)?).with_timeout(config.gateway.timeout());
    let mut session = PromptSession::default();
    let progress = log_progress("prompts");
    let bundles = assembler
        .generate_bulk(
            &shot_list,
            registry.subjects(),
            &options,
            &mut session,
            &progress,
            &cancel_on_ctrl_c(),
        )
        .await;

    for (shot, bundle) in shot_list.iter().zip(&bundles) {
        println!("Scene {} / Shot {}", shot.scene, shot.shot);
        println!("  Concise:  {}", bundle.concise);
        println!("  Normal:   {}", bundle.normal);
        println!("  Detailed: {}", bundle.detailed);
    }

    if let Some(name) = &args.project {
        let store = ProjectStore::new(config.storage.projects_path());
        let mut project = Project::new(name.as_str(), full_script);
        project.shot_list = shot_list;
        project.subjects = registry.into_subjects();
        project.prompts = session.flattened();
        let snapshot = store.save(&mut project).await?;
        let export = store.export_prompts(name, &project.prompts).await?;
        info!(
            snapshot = %snapshot.display(),
            export = %export.display(),
            "Project saved"
        );
        println!("Saved project to {}", snapshot.display());
        println!("Exported prompts to {}", export.display());
    }

    Ok(())
}
