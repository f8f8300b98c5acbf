//! Static transfer rules, one entry per file category.
//!
//! Everything that varies between categories - accepted inputs, endpoint
//! paths, multipart field names, response encodings, output naming - lives
//! in this table. Adding a category means adding a data entry, not code.

use crate::models::{Direction, FileCategory};

/// How an endpoint returns its artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseEncoding {
    /// JSON body carrying a base64 payload field plus statistics.
    JsonBase64,
    /// Raw bytes in the response body.
    RawBinary,
}

/// Where the statistics shown to the user come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsSource {
    /// Sizes are taken from the response body.
    ServerReported,
    /// Sizes are measured from the local payloads; the endpoint reports none.
    ComputedLocally,
}

/// Wire details for one (category, direction) endpoint.
#[derive(Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Path under the API base, e.g. `compress/text`.
    pub path: &'static str,
    /// Multipart field name the service expects.
    ///
    /// The service is inconsistent here: text decompression reads
    /// `compressedFile` while every other endpoint reads `file`. Kept as
    /// data to preserve wire compatibility.
    pub field: &'static str,
    /// Extension appended to the output filename.
    pub output_extension: &'static str,
    /// MIME type given to the downloaded blob.
    pub output_mime: &'static str,
}

/// Transfer rules for one file category.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub category: FileCategory,
    /// MIME types accepted as fresh (uncompressed) input.
    pub upload_mime_types: &'static [&'static str],
    /// Extensions offered by the picker for fresh input; also the fallback
    /// check when the browser reports no MIME type.
    pub upload_extensions: &'static [&'static str],
    /// Name suffixes accepted as decompression input.
    pub compressed_extensions: &'static [&'static str],
    pub compress: Endpoint,
    pub decompress: Endpoint,
    pub response_encoding: ResponseEncoding,
    pub stats_source: StatsSource,
}

impl FormatSpec {
    /// Wire details for the given direction.
    pub fn endpoint(&self, direction: Direction) -> &Endpoint {
        match direction {
            Direction::Compress => &self.compress,
            Direction::Decompress => &self.decompress,
        }
    }

    /// `accept` attribute for the file picker in the given direction.
    pub fn accept_attr(&self, direction: Direction) -> String {
        let extensions = match direction {
            Direction::Compress => self.upload_extensions,
            Direction::Decompress => self.compressed_extensions,
        };
        extensions.join(",")
    }
}

/// Transfer rules for every supported category.
pub const CATALOG: [FormatSpec; 3] = [
    FormatSpec {
        category: FileCategory::Text,
        upload_mime_types: &["text/plain"],
        upload_extensions: &[".txt"],
        compressed_extensions: &[".compressed"],
        compress: Endpoint {
            path: "compress/text",
            field: "file",
            output_extension: ".compressed",
            output_mime: "application/octet-stream",
        },
        decompress: Endpoint {
            path: "decompress/text",
            field: "compressedFile",
            output_extension: ".txt",
            output_mime: "text/plain",
        },
        response_encoding: ResponseEncoding::JsonBase64,
        stats_source: StatsSource::ServerReported,
    },
    FormatSpec {
        category: FileCategory::Image,
        upload_mime_types: &["image/jpeg", "image/png", "image/gif", "image/bmp"],
        upload_extensions: &[".jpg", ".jpeg", ".png", ".gif", ".bmp"],
        compressed_extensions: &[".huff", ".huff.huff", ".bmp.huff.huff"],
        compress: Endpoint {
            path: "image/compress",
            field: "file",
            output_extension: ".huff",
            output_mime: "application/octet-stream",
        },
        decompress: Endpoint {
            path: "image/decompress",
            field: "file",
            output_extension: ".bmp",
            output_mime: "image/bmp",
        },
        response_encoding: ResponseEncoding::JsonBase64,
        stats_source: StatsSource::ServerReported,
    },
    FormatSpec {
        category: FileCategory::Audio,
        upload_mime_types: &["audio/wav", "audio/wave", "audio/x-wav"],
        upload_extensions: &[".wav"],
        compressed_extensions: &[".huff"],
        compress: Endpoint {
            path: "audio/compress",
            field: "file",
            output_extension: ".huff",
            output_mime: "application/octet-stream",
        },
        decompress: Endpoint {
            path: "audio/decompress",
            field: "file",
            output_extension: ".wav",
            output_mime: "audio/wav",
        },
        response_encoding: ResponseEncoding::RawBinary,
        stats_source: StatsSource::ComputedLocally,
    },
];

/// Rules for a category, if the catalog carries an entry for it.
pub fn lookup(category: FileCategory) -> Option<&'static FormatSpec> {
    CATALOG.iter().find(|spec| spec.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_an_entry() {
        for category in FileCategory::ALL {
            assert!(lookup(category).is_some(), "no entry for {:?}", category);
        }
    }

    #[test]
    fn test_endpoint_paths() {
        let text = lookup(FileCategory::Text).unwrap();
        let image = lookup(FileCategory::Image).unwrap();
        let audio = lookup(FileCategory::Audio).unwrap();

        assert_eq!(text.endpoint(Direction::Compress).path, "compress/text");
        assert_eq!(text.endpoint(Direction::Decompress).path, "decompress/text");
        assert_eq!(image.endpoint(Direction::Compress).path, "image/compress");
        assert_eq!(image.endpoint(Direction::Decompress).path, "image/decompress");
        assert_eq!(audio.endpoint(Direction::Compress).path, "audio/compress");
        assert_eq!(audio.endpoint(Direction::Decompress).path, "audio/decompress");
    }

    #[test]
    fn test_field_names_preserve_service_quirk() {
        for spec in &CATALOG {
            assert_eq!(spec.endpoint(Direction::Compress).field, "file");
        }
        assert_eq!(
            lookup(FileCategory::Text)
                .unwrap()
                .endpoint(Direction::Decompress)
                .field,
            "compressedFile"
        );
        assert_eq!(
            lookup(FileCategory::Image)
                .unwrap()
                .endpoint(Direction::Decompress)
                .field,
            "file"
        );
    }

    #[test]
    fn test_response_encodings() {
        assert_eq!(
            lookup(FileCategory::Text).unwrap().response_encoding,
            ResponseEncoding::JsonBase64
        );
        assert_eq!(
            lookup(FileCategory::Image).unwrap().response_encoding,
            ResponseEncoding::JsonBase64
        );
        assert_eq!(
            lookup(FileCategory::Audio).unwrap().response_encoding,
            ResponseEncoding::RawBinary
        );
        assert_eq!(
            lookup(FileCategory::Audio).unwrap().stats_source,
            StatsSource::ComputedLocally
        );
    }

    #[test]
    fn test_accept_attr_joins_extensions() {
        let image = lookup(FileCategory::Image).unwrap();
        assert_eq!(
            image.accept_attr(Direction::Compress),
            ".jpg,.jpeg,.png,.gif,.bmp"
        );
        assert_eq!(
            image.accept_attr(Direction::Decompress),
            ".huff,.huff.huff,.bmp.huff.huff"
        );
    }
}
