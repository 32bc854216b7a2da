//! Project snapshots.

use crate::{Shot, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything needed to resume work on a screenplay.
///
/// # Examples
///
/// ```
/// use page2prompt_core::Project;
///
/// let project = Project::new("pilot", "INT. DOCK - NIGHT");
/// assert!(project.shot_list.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name, also the snapshot file stem
    pub name: String,
    /// Full screenplay text
    pub full_script: String,
    /// Normalized shot list
    pub shot_list: Vec<Shot>,
    /// Subject registry contents
    pub subjects: Vec<Subject>,
    /// Flattened generated prompts
    pub prompts: Vec<String>,
    /// Time of the last save
    pub last_modified: DateTime<Utc>,
}

impl Project {
    /// Create an empty project stamped with the current time.
    pub fn new(name: impl Into<String>, full_script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_script: full_script.into(),
            shot_list: Vec::new(),
            subjects: Vec::new(),
            prompts: Vec::new(),
            last_modified: Utc::now(),
        }
    }

    /// Refresh `last_modified` to now.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
