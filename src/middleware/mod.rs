//! Middleware Module
//!
//! Request middleware applied to protected routes.
//!
//! # Module Structure
//!
//! ```text
//! middleware/
//! ├── mod.rs  - Module exports and documentation
//! └── auth.rs - Session-checking middleware and the AuthUser extractor
//! ```

/// Session-checking middleware
pub mod auth;

// Re-export commonly used types
pub use auth::{require_session, AuthUser, SessionUser};
