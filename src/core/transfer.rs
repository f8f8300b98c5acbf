//! Exchange with the remote compression service.
//!
//! One POST per submission, multipart form body, no retry and no timeout
//! beyond the transport's own. The service speaks two dialects: the text
//! and image endpoints answer JSON with a base64 payload, the audio
//! endpoints answer raw bytes. Which dialect applies is catalog data, so
//! the decoding here branches on configuration rather than on category.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::FormData;

use crate::config::API_BASE_URL;
use crate::core::catalog::{FormatSpec, ResponseEncoding, StatsSource};
use crate::core::error::{TransferError, ValidationError};
use crate::core::validate::validate;
use crate::models::{Direction, FileCategory, SelectedFile, TransferStats};

// =============================================================================
// Result Types
// =============================================================================

/// Payload returned by the service, in whichever encoding the endpoint uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// Base64 text from a JSON endpoint, decoded at download time.
    Encoded(String),
    /// Raw bytes from a binary endpoint.
    Bytes(Vec<u8>),
}

impl Artifact {
    /// Decode into the byte buffer that will be downloaded.
    pub fn into_bytes(self) -> Result<Vec<u8>, TransferError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Encoded(text) => BASE64.decode(text.as_bytes()).map_err(|err| {
                TransferError::MalformedResponse(format!("Invalid base64 payload: {}", err))
            }),
        }
    }

    /// Payload length, known up front only for raw bytes.
    fn byte_len(&self) -> Option<u64> {
        match self {
            Self::Bytes(bytes) => Some(bytes.len() as u64),
            Self::Encoded(_) => None,
        }
    }
}

/// Decoded outcome of one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferResult {
    pub artifact: Artifact,
    /// Output name stem, without the category's output extension.
    pub filename: String,
    pub original_size: Option<u64>,
    pub compressed_size: Option<u64>,
}

impl TransferResult {
    /// User-visible statistics for this exchange.
    ///
    /// The ratio is always computed here from the two sizes; no endpoint
    /// reports one, and it only means anything when compressing.
    pub fn stats(&self, direction: Direction) -> TransferStats {
        let ratio = match (direction, self.original_size, self.compressed_size) {
            (Direction::Compress, Some(original), Some(compressed)) if original > 0 => {
                Some((1.0 - compressed as f64 / original as f64) * 100.0)
            }
            _ => None,
        };
        TransferStats {
            original_size: self.original_size,
            compressed_size: self.compressed_size,
            ratio,
        }
    }
}

// =============================================================================
// Wire Shapes
// =============================================================================

/// Body of a successful answer from a JSON endpoint.
///
/// Which payload field is present depends on the direction; sizes are only
/// reported by the compress endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncodedBody {
    compressed_data: Option<String>,
    decompressed_data: Option<String>,
    filename: String,
    original_size: Option<u64>,
    compressed_size: Option<u64>,
}

/// Body of a JSON error answer. Some paths answer plain text instead;
/// [`rejection_message`] accepts both.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// TransferRequest
// =============================================================================

/// A validated exchange, ready to send.
///
/// Only [`TransferRequest::new`] can build one, and it runs the validator,
/// so holding a value of this type is proof the file passed its category's
/// rules.
#[derive(Debug)]
pub struct TransferRequest {
    spec: &'static FormatSpec,
    direction: Direction,
    file: SelectedFile,
}

impl TransferRequest {
    /// Gate the file through the validator and capture its catalog entry.
    pub fn new(
        category: FileCategory,
        direction: Direction,
        file: SelectedFile,
    ) -> Result<Self, ValidationError> {
        let spec = validate(&file, category, direction)?;
        Ok(Self {
            spec,
            direction,
            file,
        })
    }

    pub fn spec(&self) -> &'static FormatSpec {
        self.spec
    }

    /// POST the file and decode the answer into a [`TransferResult`].
    pub async fn send(&self, handle: &web_sys::File) -> Result<TransferResult, TransferError> {
        let endpoint = self.spec.endpoint(self.direction);
        let url = format!("{}/{}", API_BASE_URL, endpoint.path);

        let form = FormData::new().map_err(|_| TransferError::RequestCreationFailed)?;
        form.append_with_blob_and_filename(endpoint.field, handle, &self.file.name)
            .map_err(|_| TransferError::RequestCreationFailed)?;

        let accept = match self.spec.response_encoding {
            ResponseEncoding::RawBinary => "application/octet-stream",
            ResponseEncoding::JsonBase64 => "application/json",
        };

        let response = Request::post(&url)
            .header("Accept", accept)
            .body(form)
            .map_err(|_| TransferError::RequestCreationFailed)?
            .send()
            .await
            .map_err(|err| TransferError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        let result = match self.spec.response_encoding {
            ResponseEncoding::RawBinary => {
                let bytes = response
                    .binary()
                    .await
                    .map_err(|err| TransferError::Network(err.to_string()))?;
                TransferResult {
                    filename: output_stem(&self.file.name, self.direction, self.spec),
                    artifact: Artifact::Bytes(bytes),
                    original_size: None,
                    compressed_size: None,
                }
            }
            ResponseEncoding::JsonBase64 => {
                let text = response
                    .text()
                    .await
                    .map_err(|err| TransferError::Network(err.to_string()))?;
                decode_encoded_body(&text, self.direction)?
            }
        };

        Ok(apply_stats_policy(self.spec, self.file.size, result))
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode the JSON answer from a base64 endpoint.
fn decode_encoded_body(body: &str, direction: Direction) -> Result<TransferResult, TransferError> {
    let parsed: EncodedBody = serde_json::from_str(body).map_err(|err| {
        TransferError::MalformedResponse(format!("Unreadable response body: {}", err))
    })?;

    let payload = match direction {
        Direction::Compress => parsed.compressed_data,
        Direction::Decompress => parsed.decompressed_data,
    };
    let payload = payload.ok_or_else(|| {
        TransferError::MalformedResponse(match direction {
            Direction::Compress => "No compression data received".to_string(),
            Direction::Decompress => "No decompression data received".to_string(),
        })
    })?;

    Ok(TransferResult {
        artifact: Artifact::Encoded(payload),
        filename: parsed.filename,
        original_size: parsed.original_size,
        compressed_size: parsed.compressed_size,
    })
}

/// Derive the output name stem from the input filename.
///
/// Compression keeps everything before the first dot, matching the
/// service's own `filename` values on the JSON endpoints; decompression
/// strips the compressed suffix that admitted the file.
fn output_stem(name: &str, direction: Direction, spec: &FormatSpec) -> String {
    match direction {
        Direction::Compress => name.split('.').next().unwrap_or(name).to_string(),
        Direction::Decompress => {
            let lower = name.to_lowercase();
            spec.compressed_extensions
                .iter()
                .find(|ext| lower.ends_with(*ext))
                .map(|ext| name[..name.len() - ext.len()].to_string())
                .unwrap_or_else(|| name.to_string())
        }
    }
}

/// Fill statistics according to the category's policy.
///
/// Binary endpoints report nothing, so sizes are measured from the local
/// payloads; JSON endpoints are trusted to report their own.
fn apply_stats_policy(
    spec: &FormatSpec,
    input_size: u64,
    mut result: TransferResult,
) -> TransferResult {
    if spec.stats_source == StatsSource::ComputedLocally {
        result.original_size = Some(input_size);
        result.compressed_size = result.artifact.byte_len();
    }
    result
}

/// Normalize a non-2xx answer.
///
/// The service answers `{"message": ...}` on some paths and plain text on
/// others; both collapse into [`TransferError::Rejected`].
async fn rejection(response: Response) -> TransferError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    TransferError::Rejected {
        status,
        message: rejection_message(&body),
    }
}

/// Pull the message out of a JSON error body, pass raw text through.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::lookup;

    #[test]
    fn test_artifact_encodings_decode_to_identical_bytes() {
        let bytes = b"huffman tree goes here".to_vec();
        let encoded = Artifact::Encoded(BASE64.encode(&bytes));
        let raw = Artifact::Bytes(bytes.clone());
        assert_eq!(encoded.into_bytes().unwrap(), raw.into_bytes().unwrap());
    }

    #[test]
    fn test_artifact_rejects_garbage_base64() {
        let err = Artifact::Encoded("not base64!!!".into()).into_bytes();
        assert!(matches!(err, Err(TransferError::MalformedResponse(_))));
    }

    #[test]
    fn test_invalid_file_never_becomes_a_request() {
        // Scenario: photo.txt offered to the image workflow; no request
        // value exists, so no network call can be built from it.
        let file = SelectedFile::new("photo.txt", 1024, "text/plain");
        let request = TransferRequest::new(FileCategory::Image, Direction::Compress, file);
        assert_eq!(
            request.err(),
            Some(ValidationError::InvalidInputType(FileCategory::Image))
        );
    }

    #[test]
    fn test_decode_text_compression_body() {
        // Scenario: 10 KB report.txt compressed to 6000 bytes.
        let body = r#"{
            "compressedData": "aHVmZg==",
            "filename": "report",
            "originalSize": 10240,
            "compressedSize": 6000
        }"#;
        let result = decode_encoded_body(body, Direction::Compress).unwrap();
        assert_eq!(result.filename, "report");
        assert_eq!(result.artifact, Artifact::Encoded("aHVmZg==".into()));

        let stats = result.stats(Direction::Compress);
        assert_eq!(stats.original_size, Some(10_240));
        assert_eq!(stats.compressed_size, Some(6_000));
        let ratio = stats.ratio.unwrap();
        assert!((ratio - 41.40625).abs() < 1e-9);
    }

    #[test]
    fn test_decode_decompression_body_without_sizes() {
        let body = r#"{"decompressedData": "aGVsbG8=", "filename": "photo"}"#;
        let result = decode_encoded_body(body, Direction::Decompress).unwrap();
        assert_eq!(result.filename, "photo");
        assert_eq!(result.original_size, None);
        assert!(result.stats(Direction::Decompress).is_empty());
    }

    #[test]
    fn test_missing_payload_field_is_malformed() {
        // A decompression body offered where compression data is expected.
        let body = r#"{"decompressedData": "aGVsbG8=", "filename": "photo"}"#;
        assert_eq!(
            decode_encoded_body(body, Direction::Compress).err(),
            Some(TransferError::MalformedResponse(
                "No compression data received".into()
            ))
        );

        let body = r#"{"filename": "photo"}"#;
        assert_eq!(
            decode_encoded_body(body, Direction::Decompress).err(),
            Some(TransferError::MalformedResponse(
                "No decompression data received".into()
            ))
        );
    }

    #[test]
    fn test_unreadable_body_is_malformed() {
        let err = decode_encoded_body("<html>502</html>", Direction::Compress);
        assert!(matches!(err, Err(TransferError::MalformedResponse(_))));
    }

    #[test]
    fn test_output_stem_for_raw_endpoints() {
        let audio = lookup(FileCategory::Audio).unwrap();
        assert_eq!(output_stem("song.wav", Direction::Compress, audio), "song");
        assert_eq!(
            output_stem("song.huff", Direction::Decompress, audio),
            "song"
        );
        // Suffix matching is case-insensitive but keeps the original casing.
        assert_eq!(
            output_stem("Song.HUFF", Direction::Decompress, audio),
            "Song"
        );
    }

    #[test]
    fn test_local_stats_policy_measures_payloads() {
        // Scenario: 2,000,000-byte song.wav compressed to 1,500,000 bytes.
        let audio = lookup(FileCategory::Audio).unwrap();
        let result = TransferResult {
            artifact: Artifact::Bytes(vec![0u8; 1_500_000]),
            filename: "song".into(),
            original_size: None,
            compressed_size: None,
        };
        let result = apply_stats_policy(audio, 2_000_000, result);
        let stats = result.stats(Direction::Compress);
        assert_eq!(stats.original_size, Some(2_000_000));
        assert_eq!(stats.compressed_size, Some(1_500_000));
        assert_eq!(stats.ratio, Some(25.0));
    }

    #[test]
    fn test_server_stats_policy_trusts_the_body() {
        let text = lookup(FileCategory::Text).unwrap();
        let result = TransferResult {
            artifact: Artifact::Encoded("aHVmZg==".into()),
            filename: "report".into(),
            original_size: Some(10_240),
            compressed_size: Some(6_000),
        };
        let result = apply_stats_policy(text, 999, result);
        assert_eq!(result.original_size, Some(10_240));
        assert_eq!(result.compressed_size, Some(6_000));
    }

    #[test]
    fn test_rejection_message_accepts_both_body_shapes() {
        assert_eq!(
            rejection_message(r#"{"message": "Huffman table missing"}"#),
            "Huffman table missing"
        );
        assert_eq!(
            rejection_message("corrupt archive\n"),
            "corrupt archive"
        );
    }
}
