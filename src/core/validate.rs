//! Pre-flight checks for a candidate file.
//!
//! Pure functions of their inputs; no network or DOM access happens here.

use crate::config::MAX_UPLOAD_BYTES;
use crate::core::catalog::{FormatSpec, lookup};
use crate::core::error::ValidationError;
use crate::models::{Direction, FileCategory, SelectedFile};

/// Gate a candidate file against its category's rules.
///
/// Rules run in order and the first failure wins: catalog membership,
/// input type (MIME, falling back to extension when the browser reports
/// none), compressed-extension suffix, size ceiling. On success the
/// catalog entry is returned so callers can proceed without a second
/// lookup.
pub fn validate(
    file: &SelectedFile,
    category: FileCategory,
    direction: Direction,
) -> Result<&'static FormatSpec, ValidationError> {
    let spec = lookup(category).ok_or(ValidationError::UnsupportedCategory)?;

    match direction {
        Direction::Compress => {
            let accepted = if file.mime_type.is_empty() {
                let name = file.name.to_lowercase();
                spec.upload_extensions.iter().any(|ext| name.ends_with(ext))
            } else {
                spec.upload_mime_types.contains(&file.mime_type.as_str())
            };
            if !accepted {
                return Err(ValidationError::InvalidInputType(category));
            }
            if file.size > MAX_UPLOAD_BYTES {
                return Err(ValidationError::FileTooLarge);
            }
        }
        Direction::Decompress => {
            let name = file.name.to_lowercase();
            if !spec
                .compressed_extensions
                .iter()
                .any(|ext| name.ends_with(ext))
            {
                return Err(ValidationError::InvalidCompressedExtension(category));
            }
        }
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, mime: &str) -> SelectedFile {
        SelectedFile::new(name, size, mime)
    }

    #[test]
    fn test_accepts_declared_mime_type() {
        let plain = file("report.txt", 10 * 1024, "text/plain");
        assert!(validate(&plain, FileCategory::Text, Direction::Compress).is_ok());

        let png = file("photo.png", 1024, "image/png");
        assert!(validate(&png, FileCategory::Image, Direction::Compress).is_ok());

        let wav = file("song.wav", 2_000_000, "audio/x-wav");
        assert!(validate(&wav, FileCategory::Audio, Direction::Compress).is_ok());
    }

    #[test]
    fn test_rejects_wrong_input_type_before_any_request() {
        // Scenario: a .txt file offered to the image workflow.
        let wrong = file("photo.txt", 1024, "text/plain");
        assert_eq!(
            validate(&wrong, FileCategory::Image, Direction::Compress),
            Err(ValidationError::InvalidInputType(FileCategory::Image))
        );
    }

    #[test]
    fn test_extension_fallback_when_mime_missing() {
        let unknown = file("notes.txt", 1024, "");
        assert!(validate(&unknown, FileCategory::Text, Direction::Compress).is_ok());

        let misnamed = file("notes.pdf", 1024, "");
        assert_eq!(
            validate(&misnamed, FileCategory::Text, Direction::Compress),
            Err(ValidationError::InvalidInputType(FileCategory::Text))
        );
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let at_limit = file("big.txt", MAX_UPLOAD_BYTES, "text/plain");
        assert!(validate(&at_limit, FileCategory::Text, Direction::Compress).is_ok());

        let over = file("big.txt", MAX_UPLOAD_BYTES + 1, "text/plain");
        assert_eq!(
            validate(&over, FileCategory::Text, Direction::Compress),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn test_size_ceiling_only_applies_to_compression() {
        let huge = file("big.huff", MAX_UPLOAD_BYTES * 2, "");
        assert!(validate(&huge, FileCategory::Audio, Direction::Decompress).is_ok());
    }

    #[test]
    fn test_compressed_extension_suffixes() {
        let double = file("photo.bmp.huff.huff", 1024, "");
        assert!(validate(&double, FileCategory::Image, Direction::Decompress).is_ok());

        let single = file("photo.huff", 1024, "");
        assert!(validate(&single, FileCategory::Image, Direction::Decompress).is_ok());

        let stray = file("photo.zip", 1024, "");
        assert_eq!(
            validate(&stray, FileCategory::Image, Direction::Decompress),
            Err(ValidationError::InvalidCompressedExtension(
                FileCategory::Image
            ))
        );

        let text = file("report.compressed", 1024, "");
        assert!(validate(&text, FileCategory::Text, Direction::Decompress).is_ok());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let upper = file("REPORT.COMPRESSED", 1024, "");
        assert!(validate(&upper, FileCategory::Text, Direction::Decompress).is_ok());
    }
}
