//! Messaging Module
//!
//! Direct messages between accounts. Only the data model and its store
//! exist for now; there are no HTTP endpoints yet.
//!
//! # Module Structure
//!
//! ```text
//! messaging/
//! ├── mod.rs   - Module exports and documentation
//! ├── model.rs - Message record
//! └── store.rs - MessageStore database operations
//! ```

/// Message record
pub mod model;

/// Database operations for messages
pub mod store;

// Re-export commonly used types
pub use model::Message;
pub use store::MessageStore;
