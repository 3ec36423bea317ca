//! Location Form Component
//!
//! Create/update form. The heading, submit label, and cancel visibility
//! follow the edit session; the position invariant is checked before any
//! request is built.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, NoticeKind};

#[component]
pub fn LocationForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let name_ref = NodeRef::<leptos::html::Input>::new();

    // Entering edit mode pulls focus to the name field.
    Effect::new(move |_| {
        if ctx.session.get().is_editing() {
            if let Some(input) = name_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let staged = ctx.staged.get_untracked();
        if staged.name.trim().is_empty() {
            return;
        }
        let feature = match staged.validate() {
            Ok(feature) => feature,
            Err(err) => {
                ctx.notify(NoticeKind::Info, "Position missing", err.to_string());
                return;
            }
        };
        let session = ctx.session.get_untracked();

        spawn_local(async move {
            let result = match session.target() {
                Some(id) => api::update_location(id, &feature).await,
                None => api::create_location(&feature).await,
            };
            match result {
                Ok(()) => {
                    let text = if session.is_editing() {
                        "The location has been updated."
                    } else {
                        "The location has been saved."
                    };
                    ctx.notify(NoticeKind::Success, "Done", text);
                    ctx.clear_session();
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SYNC] Save failed: {err}").into());
                    // Session and staged values stay put so the same
                    // submit can be retried.
                    ctx.notify(NoticeKind::Error, "Save failed", err.to_string());
                }
            }
        });
    };

    view! {
        <form class="location-form" on:submit=on_submit>
            <h2 class="form-title">{move || ctx.session.get().form_title()}</h2>

            <input
                type="text"
                placeholder="Name"
                required=true
                node_ref=name_ref
                prop:value=move || ctx.staged.get().name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.staged.update(|staged| staged.name = value);
                }
            />
            <textarea
                placeholder="Description"
                prop:value=move || ctx.staged.get().description
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.staged.update(|staged| staged.description = value);
                }
            ></textarea>

            <div class="coordinate-row">
                <input
                    type="text"
                    placeholder="Latitude (click the map)"
                    prop:value=move || ctx.staged.get().lat
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.staged.update(|staged| staged.lat = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Longitude (click the map)"
                    prop:value=move || ctx.staged.get().lon
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.staged.update(|staged| staged.lon = value);
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="submit-btn">
                    {move || ctx.session.get().submit_label()}
                </button>
                <Show when=move || ctx.session.get().shows_cancel()>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.clear_session()>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
