use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{number_field, string_field, FieldMap, Record};
use crate::types::errors::{FileError, ValidationError};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Upper bound of the progress percentage.
pub const PROGRESS_MAX: f64 = 100.0;

/// Extensions accepted by the file picker, audio first, then video.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "flac", "ogg", "m4a", "mp4", "mkv", "avi", "mov",
];

/// Lifecycle state of a file in a transcription batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Pending,
    Processing,
    Done,
    Failed,
    Cancelled,
}

impl FileStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Pending => "pending",
            FileStatus::Processing => "processing",
            FileStatus::Done => "done",
            FileStatus::Failed => "error",
            FileStatus::Cancelled => "cancelled",
        }
    }

    /// Whether no further transition is allowed without a reset.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FileStatus::Done | FileStatus::Failed | FileStatus::Cancelled
        )
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FileStatus::Pending),
            "processing" => Ok(FileStatus::Processing),
            "done" => Ok(FileStatus::Done),
            "error" => Ok(FileStatus::Failed),
            "cancelled" => Ok(FileStatus::Cancelled),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// One file enqueued for transcription, as exchanged with the UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FieldMap")]
pub struct FileItem {
    pub id: String,
    pub path: String,
    pub name: String,
    pub size_mb: f64,
    pub status: String,
    pub progress: f64,
    pub error: String,
}

impl Record for FileItem {
    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            id: string_field(fields, "id"),
            path: string_field(fields, "path"),
            name: string_field(fields, "name"),
            size_mb: number_field(fields, "sizeMb"),
            status: string_field(fields, "status"),
            progress: number_field(fields, "progress"),
            error: string_field(fields, "error"),
        }
    }
}

impl From<FieldMap> for FileItem {
    fn from(fields: FieldMap) -> Self {
        Self::from_fields(&fields)
    }
}

impl FileItem {
    /// Creates a fresh `pending` record for a file of the given size.
    pub fn pending(path: &Path, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            path: path.to_string_lossy().to_string(),
            name,
            size_mb: size_bytes as f64 / BYTES_PER_MB,
            status: FileStatus::Pending.as_str().to_string(),
            progress: 0.0,
            error: String::new(),
        }
    }

    /// Stats `path` and creates a `pending` record for it.
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        let display = path.to_string_lossy().to_string();
        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FileError::NotFound(display.clone()),
            _ => FileError::Io(format!("{}: {}", display, e)),
        })?;
        if !meta.is_file() {
            return Err(FileError::NotAFile(display));
        }
        Ok(Self::pending(path, meta.len()))
    }

    /// Creates records for every path that is an existing regular file.
    pub fn scan<I, P>(paths: I) -> Vec<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter_map(|p| match Self::from_path(p.as_ref()) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::debug!("skipping input: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Typed view of `status`.
    pub fn status_kind(&self) -> Result<FileStatus, ValidationError> {
        self.status.parse()
    }

    /// Moves a pending file into `processing`.
    pub fn start_processing(&self) -> Result<Self, ValidationError> {
        let current = self.transition_from(FileStatus::Processing)?;
        let progress = if current == FileStatus::Processing {
            clamp_progress(self.progress)
        } else {
            0.0
        };
        Ok(self.with_state(FileStatus::Processing, progress, ""))
    }

    /// Reports progress on a `processing` file. Progress never goes backwards.
    pub fn with_progress(&self, progress: f64) -> Result<Self, ValidationError> {
        let current = self.status_kind()?;
        if current != FileStatus::Processing {
            return Err(ValidationError::InvalidTransition {
                from: current.to_string(),
                to: "progress".to_string(),
            });
        }
        let next = clamp_progress(progress).max(clamp_progress(self.progress));
        Ok(self.with_state(FileStatus::Processing, next, ""))
    }

    /// Marks the file as successfully transcribed.
    pub fn complete(&self) -> Result<Self, ValidationError> {
        self.transition_from(FileStatus::Done)?;
        Ok(self.with_state(FileStatus::Done, PROGRESS_MAX, ""))
    }

    /// Marks the file as failed with a human readable message.
    pub fn fail(&self, message: &str) -> Result<Self, ValidationError> {
        self.transition_from(FileStatus::Failed)?;
        let progress = clamp_progress(self.progress);
        Ok(self.with_state(FileStatus::Failed, progress, message.trim()))
    }

    /// Marks the file as cancelled, keeping the progress reached so far.
    pub fn cancel(&self) -> Result<Self, ValidationError> {
        self.transition_from(FileStatus::Cancelled)?;
        let progress = clamp_progress(self.progress);
        Ok(self.with_state(FileStatus::Cancelled, progress, ""))
    }

    /// Returns the file to `pending` so it can be run again.
    pub fn reset(&self) -> Self {
        self.with_state(FileStatus::Pending, 0.0, "")
    }

    /// Checks the lifecycle invariants of a received record.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        let status = self.status_kind()?;

        if !self.error.is_empty() && status != FileStatus::Failed {
            return Err(ValidationError::Inconsistent(format!(
                "error message set while status is {}",
                status
            )));
        }
        if !self.progress.is_finite() || !(0.0..=PROGRESS_MAX).contains(&self.progress) {
            return Err(ValidationError::Inconsistent(format!(
                "progress {} outside 0..=100",
                self.progress
            )));
        }
        if status == FileStatus::Done && self.progress != PROGRESS_MAX {
            return Err(ValidationError::Inconsistent(format!(
                "done with progress {}",
                self.progress
            )));
        }
        if !self.size_mb.is_finite() || self.size_mb < 0.0 {
            return Err(ValidationError::Inconsistent(format!(
                "negative or non-finite size {}",
                self.size_mb
            )));
        }
        Ok(())
    }

    fn transition_from(&self, to: FileStatus) -> Result<FileStatus, ValidationError> {
        let current = self.status_kind()?;
        if current.is_terminal() {
            return Err(ValidationError::InvalidTransition {
                from: current.to_string(),
                to: to.to_string(),
            });
        }
        Ok(current)
    }

    fn with_state(&self, status: FileStatus, progress: f64, error: &str) -> Self {
        Self {
            status: status.as_str().to_string(),
            progress,
            error: error.to_string(),
            ..self.clone()
        }
    }
}

/// Whether the path has an extension the transcriber can decode.
pub fn is_supported_media(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, PROGRESS_MAX)
    }
}
