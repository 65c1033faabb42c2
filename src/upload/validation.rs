//! File validation
//!
//! Client-side checks run before a file is staged: the declared MIME type
//! must be on the allow-list and the size must not exceed 20 MiB.

use std::path::Path;

use super::UploadError;

/// MIME types accepted for study material
pub const SUPPORTED_TYPES: [&str; 6] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "text/plain",
];

/// Largest accepted file, in bytes (20 MiB)
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Extensions offered by the file picker
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.ppt,.pptx,.txt";

const MIB: f64 = 1024.0 * 1024.0;

pub fn is_supported(mime: &str) -> bool {
    SUPPORTED_TYPES.contains(&mime)
}

/// Check one file. The type is checked before the size.
pub fn validate(mime: &str, size: u64) -> Result<(), UploadError> {
    if !is_supported(mime) {
        return Err(UploadError::UnsupportedType(mime.to_string()));
    }

    if size > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge {
            size_mb: size as f64 / MIB,
            max_mb: MAX_FILE_SIZE / (1024 * 1024),
        });
    }

    Ok(())
}

/// MIME type for a path, from its extension. Browsers report the type
/// themselves; the CLI has only the file name to go on.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime)
}

/// Human-readable size: bytes, then KB and MB with one decimal
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB)
    }
}

/// Broad document family, used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Word,
    Presentation,
    Text,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("pdf") {
            FileKind::Pdf
        } else if mime.contains("word") {
            FileKind::Word
        } else if mime.contains("presentation") || mime.contains("powerpoint") {
            FileKind::Presentation
        } else if mime.contains("text") {
            FileKind::Text
        } else {
            FileKind::Pdf
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Word => "📝",
            FileKind::Presentation => "📊",
            FileKind::Text => "📃",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_supported_type_at_limit() {
        for mime in SUPPORTED_TYPES {
            assert!(validate(mime, MAX_FILE_SIZE).is_ok(), "{}", mime);
            assert!(validate(mime, 0).is_ok());
        }
    }

    #[test]
    fn test_rejects_one_byte_over() {
        let err = validate("application/pdf", MAX_FILE_SIZE + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File too large: 20.00MB. Maximum size is 20MB."
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let err = validate("image/png", 10).unwrap_err();
        assert_eq!(err.to_string(), "File type not supported: image/png");

        // type is checked first
        let err = validate("", MAX_FILE_SIZE * 2).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType(_)));
    }

    #[test]
    fn test_too_large_message_uses_two_decimals() {
        let err = validate("text/plain", 25 * 1024 * 1024 + 512 * 1024).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File too large: 25.50MB. Maximum size is 20MB."
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("notes.PDF")), Some("application/pdf"));
        assert_eq!(mime_for_path(Path::new("a/b/slides.pptx")), SUPPORTED_TYPES.get(4).copied());
        assert_eq!(mime_for_path(Path::new("readme.txt")), Some("text/plain"));
        assert_eq!(mime_for_path(Path::new("photo.jpg")), None);
        assert_eq!(mime_for_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_file_kind_icons() {
        assert_eq!(FileKind::from_mime(SUPPORTED_TYPES[2]), FileKind::Word);
        assert_eq!(FileKind::from_mime(SUPPORTED_TYPES[4]), FileKind::Presentation);
        assert_eq!(FileKind::from_mime("text/plain").icon(), "📃");
        assert_eq!(FileKind::from_mime("application/octet-stream"), FileKind::Pdf);
    }
}
