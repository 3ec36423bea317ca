//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger, the
//! edit session with its staged form values, the visible notice, and the
//! record awaiting delete confirmation.

use leptos::prelude::*;

use crate::models::LocationFeature;
use crate::session::{EditSession, StagedLocation};

/// Notice severity, mirrored in the modal's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notice-info",
            Self::Warning => "notice-warning",
            Self::Success => "notice-success",
            Self::Error => "notice-error",
        }
    }
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Monotonic sequence number; lets a timed dismissal tell whether the
    /// notice it was armed for is still the visible one.
    pub seq: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload locations from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload locations from the store - write
    set_reload_trigger: WriteSignal<u32>,
    /// Which record the form currently targets
    pub session: RwSignal<EditSession>,
    /// Staged form values
    pub staged: RwSignal<StagedLocation>,
    /// Record awaiting delete confirmation
    pub pending_delete: RwSignal<Option<LocationFeature>>,
    notice: RwSignal<Option<Notice>>,
    notice_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            session: RwSignal::new(EditSession::Idle),
            staged: RwSignal::new(StagedLocation::default()),
            pending_delete: RwSignal::new(None),
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
        }
    }

    /// Trigger a reload of locations
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Stage an existing record and switch the form to update mode.
    pub fn begin_edit(&self, feature: &LocationFeature) {
        let Some(id) = feature.id.clone() else {
            return;
        };
        self.staged.set(StagedLocation::from_feature(feature));
        self.session.set(EditSession::Editing(id));
    }

    /// Drop any active session and clear the form.
    pub fn clear_session(&self) {
        self.session.set(EditSession::Idle);
        self.staged.set(StagedLocation::default());
    }

    /// Record the latest map click as the staged position.
    pub fn set_picked_position(&self, lat: f64, lon: f64) {
        self.staged.update(|staged| staged.set_position(lat, lon));
    }

    /// Ask for confirmation before deleting `feature`.
    pub fn request_delete(&self, feature: LocationFeature) {
        self.pending_delete.set(Some(feature));
    }

    pub fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice.read_only()
    }

    /// Show a notice, replacing whatever was visible.
    pub fn notify(&self, kind: NoticeKind, title: &str, text: impl Into<String>) {
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notice.set(Some(Notice {
            seq,
            kind,
            title: title.to_string(),
            text: text.into(),
        }));
    }

    /// Close the visible notice.
    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    /// Timed dismissal: only closes the notice it was armed for.
    pub fn dismiss_notice_if(&self, seq: u32) {
        let current = self.notice.get_untracked();
        if current.is_some_and(|notice| notice.seq == seq) {
            self.notice.set(None);
        }
    }
}
