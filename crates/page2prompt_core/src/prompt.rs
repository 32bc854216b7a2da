//! Generated prompt bundles and the session that collects them.

use serde::{Deserialize, Serialize};

/// The three prompt lengths requested from the completion service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PromptLength {
    /// About twenty words
    Concise,
    /// About fifty words
    Normal,
    /// About one hundred words
    Detailed,
}

impl PromptLength {
    /// Approximate word count asked of the model.
    pub fn target_words(self) -> u32 {
        match self {
            PromptLength::Concise => 20,
            PromptLength::Normal => 50,
            PromptLength::Detailed => 100,
        }
    }
}

/// The output of one prompt generation call.
///
/// `structured` holds the raw completion text; the other three fields are
/// the post-processed paragraphs extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptBundle {
    /// About twenty words
    pub concise: String,
    /// About fifty words
    pub normal: String,
    /// About one hundred words
    pub detailed: String,
    /// Raw completion text
    pub structured: String,
}

impl PromptBundle {
    /// A bundle whose four fields all carry the same message.
    ///
    /// Used when generation fails so the failure is visible whichever field
    /// the caller reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use page2prompt_core::PromptBundle;
    ///
    /// let bundle = PromptBundle::uniform("Error generating prompt: timeout");
    /// assert_eq!(bundle.concise, bundle.structured);
    /// ```
    pub fn uniform(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            concise: message.clone(),
            normal: message.clone(),
            detailed: message.clone(),
            structured: message,
        }
    }

    /// The post-processed prompt for a given length.
    pub fn get(&self, length: PromptLength) -> &str {
        match length {
            PromptLength::Concise => &self.concise,
            PromptLength::Normal => &self.normal,
            PromptLength::Detailed => &self.detailed,
        }
    }
}

/// Ordered record of the bundles generated during one working session.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{PromptBundle, PromptSession};
///
/// let mut session = PromptSession::default();
/// session.record(PromptBundle {
///     concise: "A dock at dawn".to_string(),
///     ..Default::default()
/// });
///
/// assert_eq!(session.flattened(), vec!["A dock at dawn".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptSession {
    bundles: Vec<PromptBundle>,
}

impl PromptSession {
    /// Append a bundle.
    pub fn record(&mut self, bundle: PromptBundle) {
        self.bundles.push(bundle);
    }

    /// Bundles in generation order.
    pub fn bundles(&self) -> &[PromptBundle] {
        &self.bundles
    }

    /// Number of recorded bundles.
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Every non-empty concise, normal and detailed prompt, in order.
    pub fn flattened(&self) -> Vec<String> {
        self.bundles
            .iter()
            .flat_map(|b| [&b.concise, &b.normal, &b.detailed])
            .filter(|p| !p.is_empty())
            .cloned()
            .collect()
    }

    /// Forget every recorded bundle.
    pub fn clear(&mut self) {
        self.bundles.clear();
    }
}
