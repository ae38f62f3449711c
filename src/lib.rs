//! xfgram - Main Library
//!
//! xfgram is a social networking backend built with Rust, featuring
//! account management with cookie sessions, profile editing with remote
//! picture storage, and a follow graph between accounts.
//!
//! # Overview
//!
//! This library provides the core functionality for xfgram, including:
//! - Account registration and credential verification (bcrypt + JWT)
//! - Profile reads and partial multipart edits
//! - Follow/unfollow toggling over a single-row edge table
//! - Direct message storage between accounts
//! - SQLite persistence via sqlx with embedded migrations
//!
//! # Module Structure
//!
//! The library is organized by domain:
//!
//! - **`users`** - Account model, sanitized profile view, SQLite store
//! - **`auth`** - Session tokens, cookies, and the credential handlers
//! - **`middleware`** - Session-checking middleware for protected routes
//! - **`profiles`** - Profile read, partial edit, and suggestion handlers
//! - **`relationships`** - Follow/unfollow toggle over the edge table
//! - **`messaging`** - Direct message model and store
//! - **`uploads`** - Asset store seam for profile picture uploads
//! - **`error`** - The `ApiError` type and its JSON response envelope
//! - **`routes`** - Router assembly, CORS, fallback
//! - **`server`** - Configuration, shared state, initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfgram::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, ApiError>`. `ApiError` implements
//! `IntoResponse`, so handlers bubble errors up with `?` and every failure
//! leaves the server as the same JSON envelope: `{ "message", "success" }`.
//! Internal detail (SQL text, token parsing) is logged, never sent to
//! clients.

/// Account model and storage
pub mod users;

/// Session tokens and credential handlers
pub mod auth;

/// Session-checking middleware
pub mod middleware;

/// Profile read and edit handlers
pub mod profiles;

/// Follow graph handlers
pub mod relationships;

/// Direct message model and storage
pub mod messaging;

/// Asset store seam for picture uploads
pub mod uploads;

/// Error type and response envelope
pub mod error;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

// Re-export the error type used across module boundaries
pub use error::ApiError;
