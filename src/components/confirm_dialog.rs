//! Delete Confirmation Dialog
//!
//! Blocking yes/no prompt shown before any delete request is issued.
//! Declining aborts silently.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, NoticeKind};

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let confirm = move |_| {
        let Some(feature) = ctx.pending_delete.get_untracked() else {
            return;
        };
        ctx.pending_delete.set(None);
        let Some(id) = feature.id else {
            return;
        };
        spawn_local(async move {
            match api::delete_location(&id).await {
                Ok(()) => {
                    ctx.notify(NoticeKind::Success, "Deleted", "The location has been removed.");
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SYNC] Delete failed: {err}").into());
                    ctx.notify(NoticeKind::Error, "Delete failed", err.to_string());
                }
            }
        });
    };

    view! {
        {move || ctx.pending_delete.get().map(|feature| view! {
            <div class="modal-overlay">
                <div class=format!("confirm-modal {}", NoticeKind::Warning.class())>
                    <h3 class="notice-title">"Delete this location?"</h3>
                    <p class="notice-text">
                        {format!("\"{}\" cannot be restored once deleted.", feature.properties.name)}
                    </p>
                    <div class="confirm-actions">
                        <button class="confirm-btn danger" on:click=confirm>
                            "Yes, delete"
                        </button>
                        <button class="cancel-btn" on:click=move |_| ctx.pending_delete.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
