//! Relationships Module
//!
//! The follow graph between accounts.
//!
//! # Module Structure
//!
//! ```text
//! relationships/
//! ├── mod.rs      - Module exports and documentation
//! └── handlers.rs - Follow/unfollow toggle handler
//! ```
//!
//! # Follow Model
//!
//! "A follows B" is one row in the `follows` table keyed by the ordered
//! pair. The pair `(A, B)` is independent of `(B, A)`; mutual follows are
//! two rows. A single toggle endpoint flips the edge: absent becomes
//! present (follow), present becomes absent (unfollow). Because the edge
//! is one row, follower and following views can never disagree.

/// Follow/unfollow HTTP handler
pub mod handlers;

// Re-export commonly used types
pub use handlers::{follow_or_unfollow, FollowResponse};
