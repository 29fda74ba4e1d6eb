use std::fmt;

use bytes::Bytes;

use crate::input::ValidationError;

/// Upload cap for resumes: 10 MiB.
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Where a file came from on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileSource {
    #[default]
    Picker,
    Drop,
}

impl FileSource {
    /// Reads the `source` form field. Anything other than `drop` counts as the picker.
    pub fn from_form_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("drop") {
            FileSource::Drop
        } else {
            FileSource::Picker
        }
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Picker => f.write_str("picker"),
            FileSource::Drop => f.write_str("drop"),
        }
    }
}

/// A file the user offered but that has not been checked yet.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub contents: Bytes,
    pub source: FileSource,
}

/// A file that passed the PDF and size checks and may be submitted.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    mime_type: String,
    contents: Bytes,
    source: FileSource,
}

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> usize {
        self.contents.len()
    }

    pub fn contents(&self) -> &Bytes {
        &self.contents
    }

    pub fn source(&self) -> FileSource {
        self.source
    }

    /// Human-readable size, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / (1024.0 * 1024.0))
    }
}

impl TryFrom<FileCandidate> for SelectedFile {
    type Error = ValidationError;

    /// Type is checked before size, so a large non-PDF reports the type problem.
    fn try_from(candidate: FileCandidate) -> Result<Self, Self::Error> {
        if candidate.name.trim().is_empty() && candidate.contents.is_empty() {
            return Err(ValidationError::NoFile);
        }
        if !candidate.mime_type.to_ascii_lowercase().contains("pdf") {
            return Err(ValidationError::NotPdf);
        }
        if candidate.contents.len() > MAX_FILE_BYTES {
            return Err(ValidationError::TooLarge);
        }
        Ok(SelectedFile {
            name: candidate.name,
            mime_type: candidate.mime_type,
            contents: candidate.contents,
            source: candidate.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime: &str, size: usize) -> FileCandidate {
        FileCandidate {
            name: "cv.pdf".to_string(),
            mime_type: mime.to_string(),
            contents: Bytes::from(vec![0u8; size]),
            source: FileSource::Picker,
        }
    }

    #[test]
    fn test_accepts_pdf_under_limit() {
        let file = SelectedFile::try_from(candidate("application/pdf", 2048)).unwrap();
        assert_eq!(file.name(), "cv.pdf");
        assert_eq!(file.size(), 2048);
        assert_eq!(file.source(), FileSource::Picker);
    }

    #[test]
    fn test_accepts_exactly_ten_mib() {
        assert!(SelectedFile::try_from(candidate("application/pdf", MAX_FILE_BYTES)).is_ok());
    }

    #[test]
    fn test_rejects_one_byte_over_limit() {
        let err = SelectedFile::try_from(candidate("application/pdf", MAX_FILE_BYTES + 1))
            .unwrap_err();
        assert_eq!(err, ValidationError::TooLarge);
        assert_eq!(err.to_string(), "File size must be less than 10MB.");
    }

    #[test]
    fn test_rejects_non_pdf_types() {
        for mime in ["image/png", "text/plain", "application/msword", ""] {
            let err = SelectedFile::try_from(candidate(mime, 10)).unwrap_err();
            assert_eq!(err, ValidationError::NotPdf, "mime {mime:?}");
        }
    }

    #[test]
    fn test_pdf_match_ignores_case_and_variants() {
        assert!(SelectedFile::try_from(candidate("Application/PDF", 10)).is_ok());
        assert!(SelectedFile::try_from(candidate("application/x-pdf", 10)).is_ok());
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = SelectedFile::try_from(candidate("image/png", MAX_FILE_BYTES + 1)).unwrap_err();
        assert_eq!(err, ValidationError::NotPdf);
    }

    #[test]
    fn test_empty_part_is_no_file() {
        let empty = FileCandidate {
            name: String::new(),
            mime_type: "application/octet-stream".to_string(),
            contents: Bytes::new(),
            source: FileSource::Picker,
        };
        assert_eq!(
            SelectedFile::try_from(empty).unwrap_err(),
            ValidationError::NoFile
        );
    }

    #[test]
    fn test_size_label() {
        let file = SelectedFile::try_from(candidate("application/pdf", 1024 * 1024 * 3 / 2)).unwrap();
        assert_eq!(file.size_label(), "1.50 MB");
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(FileSource::from_form_value("drop"), FileSource::Drop);
        assert_eq!(FileSource::from_form_value(" DROP "), FileSource::Drop);
        assert_eq!(FileSource::from_form_value(""), FileSource::Picker);
        assert_eq!(FileSource::from_form_value("clipboard"), FileSource::Picker);
    }
}
