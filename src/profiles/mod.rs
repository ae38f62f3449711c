//! Profiles Module
//!
//! Reading and editing account profiles.
//!
//! # Architecture
//!
//! The profiles module is organized into focused submodules:
//!
//! - **`update`** - The partial-update value, multipart parsing, and the
//!   update application logic
//! - **`handlers`** - HTTP handlers for profile reads, edits, and the
//!   suggestion list
//!
//! # Module Structure
//!
//! ```text
//! profiles/
//! ├── mod.rs      - Module exports and documentation
//! ├── update.rs   - ProfileUpdate parsing and application
//! └── handlers.rs - get_profile, edit_profile, suggested_users
//! ```
//!
//! # Partial Updates
//!
//! Profile edits arrive as `multipart/form-data` with any subset of `bio`,
//! `gender`, and `picture` fields. Only submitted fields change; omitted
//! fields keep their stored values. A picture is first pushed to the asset
//! store and only its returned URL lands on the account, so a failed
//! upload leaves the profile untouched.

/// Partial-update value and application logic
pub mod update;

/// HTTP handlers for profile endpoints
pub mod handlers;

// Re-export commonly used types
pub use handlers::{edit_profile, get_profile, suggested_users};
pub use update::{apply_update, ProfileUpdate};
