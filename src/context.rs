//! Application Context
//!
//! Store, config, and overlay signals, provided via Leptos Context API.
//! Built once in `App` before any component attaches listeners.

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::forms::{AddOrderForm, EditOrderForm};
use crate::overlay::Overlay;
use crate::store::BoardStore;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Orders and drag state
    pub store: BoardStore,
    /// Startup configuration
    pub config: StoredValue<BoardConfig>,
    /// Add overlay - read
    pub add_overlay: ReadSignal<Overlay>,
    set_add_overlay: WriteSignal<Overlay>,
    /// Edit overlay - read
    pub edit_overlay: ReadSignal<Overlay>,
    set_edit_overlay: WriteSignal<Overlay>,
    /// Help overlay - read
    pub help_overlay: ReadSignal<Overlay>,
    set_help_overlay: WriteSignal<Overlay>,
    /// Add form fields
    pub add_form: RwSignal<AddOrderForm>,
    /// Edit form fields
    pub edit_form: RwSignal<EditOrderForm>,
}

impl AppContext {
    pub fn new(store: BoardStore, config: BoardConfig) -> Self {
        let (add_overlay, set_add_overlay) = signal(Overlay::Closed);
        let (edit_overlay, set_edit_overlay) = signal(Overlay::Closed);
        let (help_overlay, set_help_overlay) = signal(Overlay::Closed);
        Self {
            store,
            config: StoredValue::new(config),
            add_overlay,
            set_add_overlay,
            edit_overlay,
            set_edit_overlay,
            help_overlay,
            set_help_overlay,
            add_form: RwSignal::new(AddOrderForm::default()),
            edit_form: RwSignal::new(EditOrderForm::default()),
        }
    }

    /// Toggle the add overlay. Closing clears both inputs.
    /// Returns the new state.
    pub fn toggle_add(&self) -> Overlay {
        if self.add_overlay.get_untracked().is_open() {
            self.add_form.update(AddOrderForm::clear);
        }
        self.set_add_overlay.update(|o| *o = o.toggled());
        self.add_overlay.get_untracked()
    }

    /// Show the edit overlay with populated fields
    pub fn open_edit(&self, form: EditOrderForm) {
        self.edit_form.set(form);
        self.set_edit_overlay.set(Overlay::Open);
    }

    pub fn close_edit(&self) {
        self.set_edit_overlay.set(Overlay::Closed);
    }

    /// Returns the new state
    pub fn toggle_help(&self) -> Overlay {
        self.set_help_overlay.update(|o| *o = o.toggled());
        self.help_overlay.get_untracked()
    }

    pub fn commit_on_drop(&self) -> bool {
        self.config.with_value(|c| c.commit_on_drop)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
