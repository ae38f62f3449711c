//! API Error Module
//!
//! This module defines the error type shared by every handler in the service.
//! Errors carry the HTTP status they map to and can be converted directly
//! into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `InvalidInput` - Required request fields missing or empty
//! - `DuplicateAccount` - Registration against an email or username already in use
//! - `InvalidCredentials` - Login or session verification failure
//! - `NotFound` - A referenced account or record does not exist
//! - `InvalidOperation` - The request is well-formed but not allowed
//! - `Database` / `Token` / `Hash` / `Internal` - Infrastructure failures
//! - `Upload` - The asset store rejected or failed a picture upload
//!
//! # HTTP Response Conversion
//!
//! All variants implement `IntoResponse` from Axum, allowing handlers to
//! return `Result<T, ApiError>` and bubble errors with `?`. The response body
//! is always the JSON envelope `{"message": ..., "success": false}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
