//! Users Module
//!
//! Account data and the database-backed account store.
//!
//! # Architecture
//!
//! The users module is organized into focused submodules:
//!
//! - **`model`** - The `User` record, the sanitized `UserProfile` projection,
//!   and the `Gender` enum
//! - **`store`** - `UserStore`, the pooled database handle every service
//!   borrows for account reads and writes
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs   - Module exports and documentation
//! ├── model.rs - User, UserProfile, Gender
//! └── store.rs - UserStore database operations
//! ```
//!
//! # Sanitization
//!
//! `User` carries the bcrypt password hash and deliberately does not
//! implement `Serialize`. Anything leaving the service goes through
//! [`User::sanitized`], which produces a [`UserProfile`] that has no
//! password field at all.

/// Account record and projection types
pub mod model;

/// Database operations for accounts
pub mod store;

// Re-export commonly used types
pub use model::{Gender, User, UserProfile};
pub use store::UserStore;
