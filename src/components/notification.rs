//! Notification Modal
//!
//! Renders the current notice as a modal. Success notices dismiss
//! themselves after a short delay; everything else waits for the user.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, NoticeKind};

/// How long a success notice stays up.
const SUCCESS_DISMISS_MS: u32 = 1_500;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = ctx.notice();

    // Arm the auto-dismiss timer each time a success notice appears.
    Effect::new(move |_| {
        if let Some(current) = notice.get() {
            if current.kind == NoticeKind::Success {
                let seq = current.seq;
                spawn_local(async move {
                    TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
                    ctx.dismiss_notice_if(seq);
                });
            }
        }
    });

    view! {
        {move || notice.get().map(|current| {
            let dismissible = current.kind != NoticeKind::Success;
            view! {
                <div class="modal-overlay">
                    <div class=format!("notice-modal {}", current.kind.class())>
                        <h3 class="notice-title">{current.title}</h3>
                        <p class="notice-text">{current.text}</p>
                        <Show when=move || dismissible>
                            <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>
                                "OK"
                            </button>
                        </Show>
                    </div>
                </div>
            }
        })}
    }
}
