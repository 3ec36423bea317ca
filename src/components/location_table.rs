//! Location Table Component
//!
//! Lists every stored location with inline edit/delete actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LocationTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="table-panel">
            <table class="location-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Coordinates"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.locations().get()
                        key=|feature| feature.row_key()
                        children=move |feature| {
                            let edit_target = feature.clone();
                            let delete_target = feature.clone();
                            view! {
                                <tr>
                                    <td class="cell-name">{feature.properties.name.clone()}</td>
                                    <td class="cell-description">{feature.properties.description.clone()}</td>
                                    <td class="cell-coordinates">
                                        {format!("{:.5}, {:.5}", feature.lat(), feature.lon())}
                                    </td>
                                    <td>
                                        <button
                                            class="btn-sm edit-btn"
                                            on:click=move |_| ctx.begin_edit(&edit_target)
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-sm delete-btn"
                                            on:click=move |_| ctx.request_delete(delete_target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <p class="location-count">
                {move || format!("{} locations", store.locations().get().len())}
            </p>
        </div>
    }
}
