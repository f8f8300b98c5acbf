//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "huffbox";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the compression service API.
pub const API_BASE_URL: &str = "http://localhost:8080/api";

// =============================================================================
// Upload Limits
// =============================================================================

/// Size ceiling for fresh (uncompressed) uploads.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;
