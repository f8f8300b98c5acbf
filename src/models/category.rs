//! Content categories and transfer directions.

/// Kind of content handled by a workflow.
///
/// Selected once when the user leaves the category grid; fixed for the
/// lifetime of that workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Text,
    Image,
    Audio,
}

impl FileCategory {
    /// Every supported category, in grid order.
    pub const ALL: [FileCategory; 3] = [Self::Text, Self::Image, Self::Audio];

    /// Human label ("Text", "Image", "Audio").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Audio => "Audio",
        }
    }

    /// Lower-case noun used inside validation and prompt messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
        }
    }
}

/// Whether a panel compresses a fresh file or decompresses an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    /// Noun used in headings and failure messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Compress => "Compression",
            Self::Decompress => "Decompression",
        }
    }

    /// Label for the idle submit control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Compress => "Compress File",
            Self::Decompress => "Decompress File",
        }
    }

    /// Label for the submit control while a transfer is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            Self::Compress => "Compressing...",
            Self::Decompress => "Decompressing...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(FileCategory::Text.label(), "Text");
        assert_eq!(FileCategory::Audio.noun(), "audio");
        assert_eq!(FileCategory::ALL.len(), 3);
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::Compress.title(), "Compression");
        assert_eq!(Direction::Decompress.label(), "Decompress File");
        assert_eq!(Direction::Decompress.busy_label(), "Decompressing...");
    }
}
