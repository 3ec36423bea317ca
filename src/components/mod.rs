//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod location_form;
mod location_table;
mod map_view;
mod notification;

pub use confirm_dialog::ConfirmDialog;
pub use location_form::LocationForm;
pub use location_table::LocationTable;
pub use map_view::MapView;
pub use notification::NotificationHost;
