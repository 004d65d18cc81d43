//! Upload policy checks.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted upload (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted as audio uploads.
const ALLOWED_MIME_TYPES: [&str; 4] = ["audio/mpeg", "audio/wav", "audio/x-wav", "audio/mp3"];

/// Extensions accepted when the reported MIME type is missing or wrong.
const ALLOWED_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

/// Reasons a selected file is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload an MP3 or WAV audio file.")]
    InvalidType { mime_type: String, extension: String },

    #[error("File is too large. Maximum size is 10MB.")]
    TooLarge { byte_size: u64 },
}

/// A file the user picked, as reported before any policy check.
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub name: String,
    pub byte_size: u64,
    /// MIME type as reported for the file; may be empty
    pub mime_type: String,
    pub path: PathBuf,
}

impl AudioFile {
    /// Describes a file on disk without reading its contents.
    ///
    /// The MIME type is derived from the extension, which is what a browser
    /// reports for local files as well.
    ///
    /// # Errors
    /// - If the file does not exist or its metadata cannot be read
    /// - If the path is a directory
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Cannot read audio file '{}': {e}", path.display()))?;
        if metadata.is_dir() {
            return Err(anyhow::anyhow!("'{}' is a directory", path.display()));
        }

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime_type = mime_for_extension(&extension_of(&name)).to_string();

        Ok(Self {
            name,
            byte_size: metadata.len(),
            mime_type,
            path: path.to_path_buf(),
        })
    }
}

/// A file that passed validation and may be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadCandidate {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
    /// Lower-cased extension without the dot
    pub extension: String,
    pub path: PathBuf,
}

impl UploadCandidate {
    /// MIME type to declare for the multipart file part.
    ///
    /// Prefers the reported type when it is an accepted audio type, otherwise
    /// falls back to the type implied by the extension.
    pub fn upload_mime_type(&self) -> &str {
        if ALLOWED_MIME_TYPES.contains(&self.mime_type.as_str()) {
            &self.mime_type
        } else {
            mime_for_extension(&self.extension)
        }
    }
}

/// Checks a file against the upload policy.
///
/// The file type is accepted if either the reported MIME type or the extension
/// is allowed, since reported audio types are unreliable. Type is checked
/// before size.
pub fn validate(file: &AudioFile) -> Result<UploadCandidate, ValidationError> {
    let extension = extension_of(&file.name);

    let mime_ok = ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str());
    let extension_ok = ALLOWED_EXTENSIONS.contains(&extension.as_str());
    if !mime_ok && !extension_ok {
        return Err(ValidationError::InvalidType {
            mime_type: file.mime_type.clone(),
            extension,
        });
    }

    if file.byte_size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge {
            byte_size: file.byte_size,
        });
    }

    Ok(UploadCandidate {
        name: file.name.clone(),
        byte_size: file.byte_size,
        mime_type: file.mime_type.clone(),
        extension,
        path: file.path.clone(),
    })
}

/// Lower-cased text after the last dot, or empty if the name has none.
fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "txt" => "text/plain",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime_type: &str, byte_size: u64) -> AudioFile {
        AudioFile {
            name: name.to_string(),
            byte_size,
            mime_type: mime_type.to_string(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_accepts_mp3() {
        let candidate = validate(&file("clip.mp3", "audio/mpeg", 500 * 1024)).unwrap();
        assert_eq!(candidate.name, "clip.mp3");
        assert_eq!(candidate.extension, "mp3");
        assert_eq!(candidate.byte_size, 500 * 1024);
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = validate(&file("clip.mp3", "audio/mpeg", 11 * 1024 * 1024)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                byte_size: 11 * 1024 * 1024
            }
        );
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        assert!(validate(&file("clip.wav", "audio/wav", MAX_FILE_SIZE)).is_ok());
        assert!(validate(&file("clip.wav", "audio/wav", MAX_FILE_SIZE + 1)).is_err());
    }

    #[test]
    fn test_rejects_text_file() {
        let err = validate(&file("clip.txt", "text/plain", 100)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));
        assert_eq!(err.to_string(), "Please upload an MP3 or WAV audio file.");
    }

    #[test]
    fn test_extension_fallback() {
        assert!(validate(&file("voice.wav", "", 2048)).is_ok());
        assert!(validate(&file("voice.wav", "application/octet-stream", 2048)).is_ok());
        assert!(validate(&file("VOICE.MP3", "", 2048)).is_ok());
    }

    #[test]
    fn test_mime_fallback() {
        let candidate = validate(&file("recording", "audio/x-wav", 2048)).unwrap();
        assert_eq!(candidate.extension, "");
        assert_eq!(candidate.upload_mime_type(), "audio/x-wav");
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = validate(&file("huge.txt", "text/plain", MAX_FILE_SIZE * 2)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType { .. }));
    }

    #[test]
    fn test_upload_mime_type_from_extension() {
        let candidate = validate(&file("voice.wav", "", 10)).unwrap();
        assert_eq!(candidate.upload_mime_type(), "audio/wav");
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.mp3");
        std::fs::write(&path, [0u8; 64]).unwrap();

        let audio = AudioFile::from_path(&path).unwrap();
        assert_eq!(audio.name, "note.mp3");
        assert_eq!(audio.byte_size, 64);
        assert_eq!(audio.mime_type, "audio/mpeg");

        assert!(AudioFile::from_path(&dir.path().join("missing.wav")).is_err());
        assert!(AudioFile::from_path(dir.path()).is_err());
    }
}
