//! Upload session state
//!
//! The upload screen is modelled as an immutable [`SessionState`] that moves
//! forward only through [`SessionState::update`]. Timers live with the caller;
//! this module only decides what each event does.

use serde::{Deserialize, Serialize};
use shared_types::{AnalysisResult, Language};
use thiserror::Error;

/// Progress added per tick, in percent
pub const PROGRESS_STEP: u8 = 10;
/// Interval between progress ticks
pub const PROGRESS_TICK_MS: u64 = 200;
/// Cosmetic delay before the analysis is produced
pub const ANALYSIS_DELAY_MS: u64 = 3000;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TXT_MEDIA_TYPE: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Pdf,
    Docx,
    Txt,
}

impl FileFormat {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.trim().to_lowercase().as_str() {
            PDF_MEDIA_TYPE => Some(FileFormat::Pdf),
            DOCX_MEDIA_TYPE => Some(FileFormat::Docx),
            TXT_MEDIA_TYPE => Some(FileFormat::Txt),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "pdf" => Some(FileFormat::Pdf),
            "docx" => Some(FileFormat::Docx),
            "txt" => Some(FileFormat::Txt),
            _ => None,
        }
    }
}

/// A file handed over by the drop zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
    pub name: String,
    #[serde(default)]
    pub media_type: String,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    /// Accepts PDF, DOCX and TXT by declared media type, then by extension
    pub fn format(&self) -> Result<FileFormat, UploadError> {
        if self.name.trim().is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        FileFormat::from_media_type(&self.media_type)
            .or_else(|| FileFormat::from_file_name(&self.name))
            .ok_or_else(|| UploadError::UnsupportedFileType(self.name.clone()))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported file type: {0}. Upload a PDF, DOCX, or TXT file")]
    UnsupportedFileType(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Analyzing {
        file: DroppedFile,
        format: FileFormat,
        progress: u8,
    },
    Complete {
        file: DroppedFile,
        result: AnalysisResult,
    },
    Rejected {
        file_name: String,
        error: UploadError,
    },
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// `None` when the picker closed without a file
    FileDropped(Option<DroppedFile>),
    ProgressTick,
    AnalysisFinished(AnalysisResult),
    Reset,
    LanguageChanged(Language),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub language: Language,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            language: Language::default(),
        }
    }
}

impl SessionState {
    pub fn update(self, event: SessionEvent) -> Self {
        match (self.phase, event) {
            // Drop zone is disabled while analyzing
            (phase @ Phase::Analyzing { .. }, SessionEvent::FileDropped(_)) => Self { phase, ..self },

            (phase, SessionEvent::FileDropped(None)) => Self { phase, ..self },

            (phase, SessionEvent::FileDropped(Some(file))) => {
                let phase = match file.format() {
                    Ok(format) => Phase::Analyzing {
                        file,
                        format,
                        progress: 0,
                    },
                    Err(UploadError::NoFileSelected) => phase,
                    Err(error) => Phase::Rejected {
                        file_name: file.name,
                        error,
                    },
                };
                Self { phase, ..self }
            }

            (
                Phase::Analyzing {
                    file,
                    format,
                    progress,
                },
                SessionEvent::ProgressTick,
            ) => Self {
                phase: Phase::Analyzing {
                    file,
                    format,
                    progress: progress.saturating_add(PROGRESS_STEP).min(100),
                },
                ..self
            },

            (Phase::Analyzing { file, .. }, SessionEvent::AnalysisFinished(result)) => Self {
                phase: Phase::Complete { file, result },
                ..self
            },

            (_, SessionEvent::Reset) => Self {
                phase: Phase::Idle,
                ..self
            },

            (phase, SessionEvent::LanguageChanged(language)) => Self { phase, language },

            // Ticks and late results outside of an analysis are stale
            (phase, SessionEvent::ProgressTick | SessionEvent::AnalysisFinished(_)) => {
                Self { phase, ..self }
            }
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing { .. })
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            Phase::Analyzing { progress, .. } => progress,
            _ => 0,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Complete { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Heading shown above the drop zone
    pub fn heading(&self) -> &'static str {
        if self.is_analyzing() {
            "Analyzing Contract..."
        } else {
            "Upload Legal Document"
        }
    }

    /// Line under the progress bar, only while analyzing
    pub fn progress_text(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Analyzing { progress, .. } if progress < 100 => {
                Some("Uploading and processing...")
            }
            Phase::Analyzing { .. } => Some("Analyzing contract clauses..."),
            _ => None,
        }
    }
}
