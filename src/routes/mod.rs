//! Routes Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation (health, CORS, fallback)
//! └── api_routes.rs - API endpoint configuration
//! ```
//!
//! # Route Groups
//!
//! - **Public**: health check plus the credential endpoints under
//!   `/api/auth`
//! - **Protected**: the account endpoints under `/api/users`, guarded by
//!   the session middleware

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
