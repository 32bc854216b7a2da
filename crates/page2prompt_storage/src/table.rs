//! CSV tables of records.

use crate::records::TableRecord;
use crate::schema::SchemaRow;
use page2prompt_core::{DirectorStyle, Shot, Style, Subject};
use page2prompt_error::{Page2PromptResult, StorageError, StorageErrorKind};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Subjects table.
pub type SubjectTable = Table<Subject>;
/// Styles table.
pub type StyleTable = Table<Style>;
/// Director styles table.
pub type DirectorStyleTable = Table<DirectorStyle>;
/// Shot list table.
pub type ShotTable = Table<Shot>;

/// A CSV file holding records of one type.
///
/// Reads accept legacy headers; writes always use the canonical header.
/// Rows that cannot be decoded are skipped with a warning.
#[derive(Debug, Clone)]
pub struct Table<T: TableRecord> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: TableRecord> Table<T> {
    /// A table backed by `path`. Nothing is touched until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record.
    ///
    /// # Errors
    ///
    /// [`StorageErrorKind::NotFound`] when the file is missing,
    /// [`StorageErrorKind::UnknownSchema`] when the header is unrecognized.
    #[tracing::instrument(skip(self), fields(table = T::SCHEMA.name, path = %self.path.display()))]
    pub async fn load(&self) -> Page2PromptResult<Vec<T>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(self.path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        })?;

        let (records, canonical) = decode::<T>(&text)?;
        if !canonical {
            tracing::info!("Read legacy header; next save writes the canonical header");
        }
        tracing::debug!(records = records.len(), "Loaded table");
        Ok(records)
    }

    /// Read every record, creating an empty table when the file is missing.
    pub async fn load_or_create(&self) -> Page2PromptResult<Vec<T>> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return self.load().await;
        }
        tracing::info!(path = %self.path.display(), table = T::SCHEMA.name, "Creating empty table");
        self.save(&[]).await?;
        Ok(Vec::new())
    }

    /// Replace the file contents with `records` under the canonical header.
    #[tracing::instrument(
        skip(self, records),
        fields(table = T::SCHEMA.name, path = %self.path.display(), records = records.len())
    )]
    pub async fn save(&self, records: &[T]) -> Page2PromptResult<()> {
        let text = encode(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("csv.tmp");
        tokio::fs::write(&temp_path, text).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Saved table");
        Ok(())
    }

    /// Rewrite a table stored under a legacy header.
    ///
    /// Returns `true` when the file was rewritten.
    pub async fn migrate(&self) -> Page2PromptResult<bool> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        let (records, canonical) = decode::<T>(&text)?;
        if canonical {
            return Ok(false);
        }
        self.save(&records).await?;
        tracing::info!(path = %self.path.display(), "Migrated table header");
        Ok(true)
    }
}

/// Decode CSV text, reporting whether its header was already canonical.
fn decode<T: TableRecord>(text: &str) -> Result<(Vec<T>, bool), StorageError> {
    if text.trim().is_empty() {
        return Ok((Vec::new(), false));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader
        .headers()
        .map_err(|e| StorageError::new(StorageErrorKind::InvalidRecord(e.to_string())))?
        .clone();
    let columns = T::SCHEMA.resolve_header(header.iter())?;
    let canonical = T::SCHEMA.is_canonical(header.iter());

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row = index + 1, error = %e, "Skipping unreadable CSV row");
                continue;
            }
        };

        let mut row = SchemaRow::default();
        for (column, cell) in columns.iter().zip(record.iter()) {
            if let Some(column) = column {
                row.set(*column, cell);
            }
        }

        match T::from_row(&row) {
            Ok(value) => records.push(value),
            Err(reason) => {
                tracing::warn!(row = index + 1, reason = %reason, "Skipping invalid record");
            }
        }
    }

    Ok((records, canonical))
}

fn encode<T: TableRecord>(records: &[T]) -> Result<String, StorageError> {
    let write_err = |e: &dyn std::fmt::Display| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{} table: {}",
            T::SCHEMA.name,
            e
        )))
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(T::SCHEMA.columns)
        .map_err(|e| write_err(&e))?;
    for record in records {
        writer.write_record(record.to_row()).map_err(|e| write_err(&e))?;
    }

    let bytes = writer.into_inner().map_err(|e| write_err(&e))?;
    String::from_utf8(bytes).map_err(|e| write_err(&e))
}
