//! One-shot downloads through a transient object URL.
//!
//! The decoded artifact becomes a `Blob`, the blob gets an object URL, and
//! a throwaway anchor element clicks itself. The URL must be revoked once
//! the click has been dispatched or the blob stays live for the rest of
//! the session; a drop guard makes that unconditional.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::core::catalog::FormatSpec;
use crate::core::error::TransferError;
use crate::core::transfer::TransferResult;
use crate::models::Direction;
use crate::utils::dom;

/// Object URL that revokes itself when dropped, on every exit path.
struct ObjectUrl(String);

impl ObjectUrl {
    fn new(blob: &Blob) -> Result<Self, TransferError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|_| TransferError::Download("could not create object URL".into()))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Full name of the download: the result's stem plus the category's
/// output extension for the direction.
pub fn output_filename(
    result: &TransferResult,
    direction: Direction,
    spec: &FormatSpec,
) -> String {
    format!(
        "{}{}",
        result.filename,
        spec.endpoint(direction).output_extension
    )
}

/// Decode the artifact and hand it to the browser as a named download.
pub fn materialize(
    result: TransferResult,
    direction: Direction,
    spec: &'static FormatSpec,
) -> Result<(), TransferError> {
    let filename = output_filename(&result, direction, spec);
    let mime = spec.endpoint(direction).output_mime;
    let bytes = result.artifact.into_bytes()?;
    trigger_download(&bytes, &filename, mime)
}

/// Wrap bytes in a blob and click a transient anchor pointing at it.
fn trigger_download(bytes: &[u8], filename: &str, mime: &str) -> Result<(), TransferError> {
    let document =
        dom::document().ok_or_else(|| TransferError::Download("document not available".into()))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| TransferError::Download("could not build blob".into()))?;

    let url = ObjectUrl::new(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| TransferError::Download("could not create anchor".into()))?
        .unchecked_into();
    anchor.set_href(&url.0);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| TransferError::Download("document body not available".into()))?;
    body.append_child(&anchor)
        .map_err(|_| TransferError::Download("could not attach anchor".into()))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::lookup;
    use crate::core::transfer::Artifact;
    use crate::models::FileCategory;

    fn result(filename: &str) -> TransferResult {
        TransferResult {
            artifact: Artifact::Bytes(Vec::new()),
            filename: filename.into(),
            original_size: None,
            compressed_size: None,
        }
    }

    #[test]
    fn test_output_filenames_per_category() {
        let text = lookup(FileCategory::Text).unwrap();
        let image = lookup(FileCategory::Image).unwrap();
        let audio = lookup(FileCategory::Audio).unwrap();

        assert_eq!(
            output_filename(&result("report"), Direction::Compress, text),
            "report.compressed"
        );
        assert_eq!(
            output_filename(&result("report"), Direction::Decompress, text),
            "report.txt"
        );
        assert_eq!(
            output_filename(&result("photo"), Direction::Decompress, image),
            "photo.bmp"
        );
        assert_eq!(
            output_filename(&result("song"), Direction::Compress, audio),
            "song.huff"
        );
        assert_eq!(
            output_filename(&result("song"), Direction::Decompress, audio),
            "song.wav"
        );
    }
}
