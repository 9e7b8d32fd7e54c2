//! Turning a file the teacher supplies into lesson material.
//!
//! Document OCR and audio transcription are placeholders: they report which
//! file they were given and return fixed text.

use crate::error::IntakeError;
use crate::logger;
use crate::models::ContentOrigin;
use std::path::Path;

const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];
const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];

pub const TRANSCRIPTION_PLACEHOLDER: &str = "Transcribed text from audio would appear here.";

pub fn detect_origin(path: &Path) -> ContentOrigin {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        ContentOrigin::Pdf
    } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        ContentOrigin::Audio
    } else {
        ContentOrigin::Text
    }
}

pub async fn process_ocr(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    format!(
        "Content extracted from {}. This would contain the actual text from the uploaded file.",
        name
    )
}

pub async fn process_speech_to_text(_path: &Path) -> String {
    TRANSCRIPTION_PLACEHOLDER.to_string()
}

/// Material text and its origin, ready for the compose screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub text: String,
    pub origin: ContentOrigin,
}

pub async fn load_material(path: &Path) -> Result<Material, IntakeError> {
    let origin = detect_origin(path);
    logger::log(&format!(
        "Loading material from {} as {}",
        path.display(),
        origin.label()
    ));

    let text = match origin {
        ContentOrigin::Pdf => process_ocr(path).await,
        ContentOrigin::Audio => process_speech_to_text(path).await,
        ContentOrigin::Text => {
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| IntakeError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
            if text.trim().is_empty() {
                return Err(IntakeError::Empty(path.to_path_buf()));
            }
            text
        }
    };

    Ok(Material { text, origin })
}

/// [`load_material`] for callers outside an async context, such as the UI thread.
pub fn load_material_blocking(path: &Path) -> Result<Material, IntakeError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(IntakeError::Runtime)?
        .block_on(load_material(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_origin() {
        assert_eq!(detect_origin(Path::new("notes.PDF")), ContentOrigin::Pdf);
        assert_eq!(detect_origin(Path::new("board.jpeg")), ContentOrigin::Pdf);
        assert_eq!(detect_origin(Path::new("lecture.m4a")), ContentOrigin::Audio);
        assert_eq!(detect_origin(Path::new("lesson.txt")), ContentOrigin::Text);
        assert_eq!(detect_origin(Path::new("README")), ContentOrigin::Text);
    }

    #[tokio::test]
    async fn test_ocr_placeholder_names_file() {
        let text = process_ocr(&PathBuf::from("/tmp/chapter-3.pdf")).await;
        assert_eq!(
            text,
            "Content extracted from chapter-3.pdf. This would contain the actual text from the uploaded file."
        );
    }

    #[tokio::test]
    async fn test_load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.txt");
        std::fs::write(&path, "Plants need sunlight and water.").unwrap();

        let material = load_material(&path).await.unwrap();
        assert_eq!(material.origin, ContentOrigin::Text);
        assert_eq!(material.text, "Plants need sunlight and water.");
    }

    #[tokio::test]
    async fn test_load_audio_uses_transcription_stub() {
        let material = load_material(Path::new("does-not-need-to-exist.wav"))
            .await
            .unwrap();
        assert_eq!(material.origin, ContentOrigin::Audio);
        assert_eq!(material.text, TRANSCRIPTION_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_load_missing_or_blank_text_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_material(&missing).await,
            Err(IntakeError::Read { .. })
        ));

        let blank = dir.path().join("blank.txt");
        std::fs::write(&blank, "  \n").unwrap();
        assert!(matches!(
            load_material(&blank).await,
            Err(IntakeError::Empty(_))
        ));
    }

    #[test]
    fn test_blocking_load_outside_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magnets.md");
        std::fs::write(&path, "Magnets attract iron.").unwrap();

        let material = load_material_blocking(&path).unwrap();
        assert_eq!(material.text, "Magnets attract iron.");
        assert_eq!(
            load_material_blocking(&dir.path().join("scan.png")).unwrap().origin,
            ContentOrigin::Pdf
        );
    }
}
