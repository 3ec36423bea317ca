//! GeoPin Frontend App
//!
//! Root component: provides the shared context and store, reloads the
//! collection on mount and after every successful write, and lays out the
//! form, table, and map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ConfirmDialog, LocationForm, LocationTable, MapView, NotificationHost};
use crate::context::{AppContext, NoticeKind};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    let store = Store::new(AppState::default());
    provide_context(ctx);
    provide_context(store);

    // Load locations on mount and on every reload trigger.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::fetch_locations().await {
                Ok(collection) => {
                    web_sys::console::log_1(
                        &format!(
                            "[APP] Loaded {} locations, trigger={}",
                            collection.features.len(),
                            trigger
                        )
                        .into(),
                    );
                    store.locations().set(collection.features);
                }
                Err(err) => {
                    // Keep whatever was rendered last; just report.
                    web_sys::console::error_1(&format!("[APP] Load failed: {err}").into());
                    ctx.notify(NoticeKind::Error, "Load failed", err.to_string());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"GeoPin"</h1>
                <LocationForm />
                <LocationTable />
            </main>

            <MapView />

            <NotificationHost />
            <ConfirmDialog />
        </div>
    }
}
