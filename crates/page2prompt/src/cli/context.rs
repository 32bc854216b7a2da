//! Shared setup for command handlers.

use page2prompt::{OpenAiGateway, Page2PromptConfig, Page2PromptResult, StorageError, StorageErrorKind};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Build the completion gateway described by the configuration.
///
/// The API key comes from `OPENAI_API_KEY`.
pub fn gateway(config: &Page2PromptConfig) -> Page2PromptResult<OpenAiGateway> {
    let settings = &config.gateway;
    let mut gateway = OpenAiGateway::from_env(&settings.model)?
        .with_base_url(settings.base_url.as_str())
        .with_temperature(settings.temperature);
    if let Some(max_tokens) = settings.max_tokens {
        gateway = gateway.with_max_tokens(max_tokens);
    }
    Ok(gateway)
}

/// Read a whole text file.
pub async fn read_text(path: &Path) -> Page2PromptResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e))).into()
    })
}

/// A token cancelled on Ctrl-C.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing current shot");
            child.cancel();
        }
    });
    token
}

/// Progress reporter that logs each completed fraction.
pub fn log_progress(label: &'static str) -> impl Fn(f32) + Send + Sync {
    move |fraction: f32| {
        tracing::info!(task = label, percent = (fraction * 100.0).round() as u32, "Progress");
    }
}
