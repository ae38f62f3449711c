//! Authentication Module
//!
//! Credential handling for the service: registration, login, logout, and
//! the session tokens that the rest of the API trusts.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`sessions`** - JWT session tokens and the cookie that carries them
//! - **`handlers`** - HTTP handlers for the credential endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── sessions.rs - Token create/verify, session cookie helpers
//! └── handlers/   - register, login, logout handlers
//! ```
//!
//! # Session Model
//!
//! Sessions are stateless. Login signs a JWT carrying the account id and a
//! one-day expiry and installs it in an HttpOnly cookie; logout simply
//! clears the cookie. Nothing is recorded server-side, so a token that has
//! not expired keeps verifying after logout. Protected endpoints re-check
//! that the account still exists before trusting a token.

/// Session tokens and cookies
pub mod sessions;

/// HTTP handlers for credential endpoints
pub mod handlers;
