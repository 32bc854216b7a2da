//! Project snapshots stored as JSON files.

use chrono::{DateTime, Utc};
use page2prompt_core::Project;
use page2prompt_error::{JsonError, Page2PromptResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Name and save time of a stored project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Project name
    pub name: String,
    /// Time of the last save
    pub last_modified: DateTime<Utc>,
}

/// Directory of `<name>.json` project snapshots.
///
/// # Example Structure
///
/// ```text
/// projects/
/// ├── pilot.json
/// ├── pilot_prompts.txt
/// └── finale.json
/// ```
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    /// A store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, name: &str, suffix: &str) -> Result<PathBuf, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::new(StorageErrorKind::EmptyName));
        }
        if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
            return Err(StorageError::new(StorageErrorKind::InvalidRecord(format!(
                "project name '{}' is not a plain file name",
                name
            ))));
        }
        Ok(self.dir.join(format!("{}{}", name, suffix)))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })
    }

    /// Stamp `project` with the current time and write it.
    ///
    /// # Errors
    ///
    /// [`StorageErrorKind::EmptyName`] for an empty project name.
    #[tracing::instrument(skip(self, project), fields(name = %project.name))]
    pub async fn save(&self, project: &mut Project) -> Page2PromptResult<PathBuf> {
        let path = self.file_for(&project.name, ".json")?;
        project.touch();

        let json = serde_json::to_string_pretty(project)
            .map_err(|e| JsonError::new(format!("Failed to serialize project: {}", e)))?;

        self.ensure_dir().await?;
        tokio::fs::write(&path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
        })?;

        tracing::info!(path = %path.display(), "Project saved");
        Ok(path)
    }

    /// Read a project by name.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, name: &str) -> Page2PromptResult<Project> {
        let path = self.file_for(name, ".json")?;
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(format!("project '{}'", name)))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
            }
        })?;

        let project = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, "Project file may be corrupted");
            JsonError::new(format!("Failed to parse project '{}': {}", name, e))
        })?;
        Ok(project)
    }

    /// Delete a project snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Page2PromptResult<()> {
        let path = self.file_for(name, ".json")?;
        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(format!("project '{}'", name)))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;
        tracing::info!("Project deleted");
        Ok(())
    }

    /// Every readable project, sorted by name. Unreadable files are skipped.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn list(&self) -> Page2PromptResult<Vec<ProjectSummary>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.dir.display(),
                    e
                )))
                .into());
            }
        };

        let mut projects = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", self.dir.display(), e)))
        })? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let parsed = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| e.to_string())
                .and_then(|text| serde_json::from_str::<Project>(&text).map_err(|e| e.to_string()));
            match parsed {
                Ok(project) => projects.push(ProjectSummary {
                    name: project.name,
                    last_modified: project.last_modified,
                }),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable project"),
            }
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    /// Write prompts to `<name>_prompts.txt`, separated by blank lines.
    #[tracing::instrument(skip(self, prompts), fields(prompts = prompts.len()))]
    pub async fn export_prompts(&self, name: &str, prompts: &[String]) -> Page2PromptResult<PathBuf> {
        let path = self.file_for(name, "_prompts.txt")?;
        self.ensure_dir().await?;
        tokio::fs::write(&path, prompts.join("\n\n")).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
        })?;
        tracing::info!(path = %path.display(), "Prompts exported");
        Ok(path)
    }
}
