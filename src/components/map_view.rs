//! Map View Component
//!
//! Owns the Leaflet widget: one marker per stored location, a popup per
//! marker with edit/delete actions, and click capture into the staged
//! form position. Every store change is a full, idempotent redraw.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::leaflet::{self, LayerGroup, LeafletMap, LeafletMouseEvent};
use crate::models::LocationFeature;
use crate::store::{use_app_store, AppStateStoreFields};

const INITIAL_CENTER: (f64, f64) = (-6.9175, 107.6191);
const INITIAL_ZOOM: f64 = 13.0;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_MAX_ZOOM: u8 = 19;
const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Live Leaflet handles plus the popup listeners of the current render.
/// Replacing `popup_listeners` drops the previous render's closures along
/// with the markers they were attached to.
struct MapHandles {
    map: LeafletMap,
    markers: LayerGroup,
    _click_listener: Closure<dyn FnMut(LeafletMouseEvent)>,
    popup_listeners: Vec<Closure<dyn FnMut()>>,
}

thread_local! {
    static MAP: RefCell<Option<MapHandles>> = RefCell::new(None);
}

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Redraw whenever the collection changes. The first run also creates
    // the map, once the container div is in the DOM.
    Effect::new(move |_| {
        let locations = store.locations().get();
        MAP.with(|slot| {
            let mut slot = slot.borrow_mut();
            let handles = slot.get_or_insert_with(|| init_map(ctx));
            render_markers(handles, ctx, &locations);
        });
    });

    view! { <div id="map" class="map-panel"></div> }
}

fn init_map(ctx: AppContext) -> MapHandles {
    let map = leaflet::new_map("map");
    map.set_view(
        &leaflet::lat_lng(INITIAL_CENTER.0, INITIAL_CENTER.1),
        INITIAL_ZOOM,
    );
    leaflet::tile_layer(
        TILE_URL,
        &leaflet::tile_layer_options(TILE_MAX_ZOOM, TILE_ATTRIBUTION),
    )
    .add_to(&map);
    let markers = leaflet::layer_group();
    markers.add_to(&map);

    let click_listener =
        Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |event: LeafletMouseEvent| {
            let latlng = event.latlng();
            ctx.set_picked_position(latlng.lat(), latlng.lng());
        });
    map.on("click", click_listener.as_ref().unchecked_ref());

    MapHandles {
        map,
        markers,
        _click_listener: click_listener,
        popup_listeners: Vec::new(),
    }
}

/// Idempotent redraw: clear the group, then one marker per record.
fn render_markers(handles: &mut MapHandles, ctx: AppContext, locations: &[LocationFeature]) {
    handles.markers.clear_layers();
    let mut listeners = Vec::new();
    for feature in locations {
        let marker = leaflet::marker(&leaflet::lat_lng(feature.lat(), feature.lon()));
        marker.add_to(&handles.markers);
        match popup_content(ctx, feature, &mut listeners) {
            Ok(content) => {
                marker.bind_popup(&content);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[MAP] Popup build failed: {err:?}").into());
            }
        }
    }
    handles.popup_listeners = listeners;
}

/// Build the popup DOM for one record. Actions are wired with explicit
/// listeners; record text only ever lands in text nodes.
fn popup_content(
    ctx: AppContext,
    feature: &LocationFeature,
    listeners: &mut Vec<Closure<dyn FnMut()>>,
) -> Result<web_sys::Element, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let container = document.create_element("div")?;
    container.set_class_name("marker-popup");

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&feature.properties.name));
    container.append_child(&title)?;

    let text = document.create_element("p")?;
    text.set_text_content(Some(&feature.properties.description));
    container.append_child(&text)?;

    let actions = document.create_element("div")?;
    actions.set_class_name("popup-actions");

    let edit_target = feature.clone();
    let edit = action_button(&document, "Edit", "btn-sm edit-btn", listeners, move || {
        close_popup();
        ctx.begin_edit(&edit_target);
    })?;
    actions.append_child(&edit)?;

    let delete_target = feature.clone();
    let delete = action_button(&document, "Delete", "btn-sm delete-btn", listeners, move || {
        close_popup();
        ctx.request_delete(delete_target.clone());
    })?;
    actions.append_child(&delete)?;

    container.append_child(&actions)?;
    Ok(container)
}

fn action_button(
    document: &web_sys::Document,
    label: &str,
    class: &str,
    listeners: &mut Vec<Closure<dyn FnMut()>>,
    on_click: impl FnMut() + 'static,
) -> Result<web_sys::Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_class_name(class);
    button.set_text_content(Some(label));
    let listener = Closure::<dyn FnMut()>::new(on_click);
    button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    listeners.push(listener);
    Ok(button)
}

fn close_popup() {
    MAP.with(|slot| {
        if let Some(handles) = slot.borrow().as_ref() {
            handles.map.close_popup();
        }
    });
}
