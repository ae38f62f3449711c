//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the credential endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Account registration handler
//! ├── login.rs    - Credential verification handler
//! └── logout.rs   - Session teardown handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - Create an account
//! - **`login`** - POST /api/auth/login - Verify credentials, start a session
//! - **`logout`** - POST /api/auth/logout - Clear the session cookie
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → account created → acknowledgement only
//! 2. **Login**: email, password → credentials verified → session cookie + token + profile
//! 3. **Logout**: no input → session cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Registration returns no token and no profile, only an acknowledgement
//! - Unknown email and wrong password answer with one identical message,
//!   so responses do not reveal which accounts exist
//! - The session cookie is HttpOnly and SameSite=Strict

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use register::register;
