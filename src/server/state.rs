/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - Account storage (users, follow edges, post references)
 * - Message storage (direct messages between accounts)
 * - Optional services (remote asset store for picture uploads)
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `UserStore` and `MessageStore` wrap a `SqlitePool`, which is an `Arc`
 *   internally and cheap to clone
 * - `Option<SharedAssetStore>` is an `Arc<dyn AssetStore>` behind an
 *   `Option` for deployments without an upload collaborator
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use xfgram::users::UserStore;
 *
 * async fn handler(State(store): State<UserStore>) {
 *     let _ = store.count().await;
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::messaging::MessageStore;
use crate::uploads::SharedAssetStore;
use crate::users::UserStore;

/// Application state shared across all request handlers
///
/// This struct serves as the central state container for the Axum application.
/// It implements `FromRef` for its field types to allow handlers to extract
/// specific parts of the state without needing the entire `AppState`.
///
/// # Fields
///
/// * `store` - Account storage (users, follow edges, post references)
/// * `messages` - Direct message storage
/// * `assets` - Optional remote asset store for profile picture uploads
#[derive(Clone)]
pub struct AppState {
    /// Account storage backed by the SQLite pool
    ///
    /// Cloning is cheap: the underlying pool is reference counted.
    pub store: UserStore,

    /// Direct message storage backed by the same SQLite pool
    pub messages: MessageStore,

    /// Remote asset store for profile picture uploads
    ///
    /// This is `None` if no upload collaborator is configured (e.g. if the
    /// `ASSET_STORE_URL` environment variable is not set). Handlers reject
    /// picture uploads when the store is absent.
    pub assets: Option<SharedAssetStore>,
}

/// Implement FromRef for UserStore
///
/// This allows Axum handlers to extract `UserStore` directly from
/// `AppState` using `State(UserStore)`.
impl FromRef<AppState> for UserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for MessageStore
///
/// This allows Axum handlers to extract `MessageStore` directly from
/// `AppState` using `State(MessageStore)`.
impl FromRef<AppState> for MessageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

/// Implement FromRef for Option<SharedAssetStore>
///
/// This allows Axum handlers to extract the optional asset store
/// directly from `AppState`.
impl FromRef<AppState> for Option<SharedAssetStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.assets.clone()
    }
}
