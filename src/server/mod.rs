//! Server Module
//!
//! Configuration, shared state, and startup wiring for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment configuration and database connection
//! ├── state.rs  - AppState and FromRef extraction impls
//! └── init.rs   - create_app: wire config, stores, and routes together
//! ```

/// Environment configuration and database connection
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
