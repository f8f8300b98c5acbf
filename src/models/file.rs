//! Metadata for the file selected in a workflow panel.

/// What the session knows about the chosen file.
///
/// The browser `File` handle itself stays in the view layer next to the
/// input element; the session only tracks the metadata that validation
/// and statistics need, which keeps the state machine free of JS types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename as reported by the picker.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type; empty when the browser has no idea.
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}
