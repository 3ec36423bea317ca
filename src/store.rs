//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::LocationFeature;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Transient render of the last fetch; the remote store stays
    /// authoritative
    pub locations: Vec<LocationFeature>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
