//! UI Controller
//!
//! One `Copy` handle over the UI store, the form signals and the draft
//! autosave. Built by the bootstrapper, provided via context to components and
//! registered for the window-global entry points.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use form_drafts::{Debouncer, DraftStore, Drafts, LocalStorageStore};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::capture::{CaptureState, CaptureTab};
use crate::config::FocusConfig;
use crate::dom;
use crate::forms::{reconcile_project_selection, Fields, FormKind, PROJECT_COLORS};
use crate::models::Project;
use crate::store::{toggled, UiState, UiStateStoreFields, UiStore};
use crate::toast::ToastKind;

/// Draft snapshots over whichever backend the controller was built with
pub type SharedDrafts = Drafts<Rc<dyn DraftStore>>;

thread_local! {
    static CONTROLLER: Cell<Option<UiController>> = const { Cell::new(None) };
}

/// Field signals of every app-owned form
#[derive(Clone, Copy)]
struct FormSignals {
    task: RwSignal<Fields>,
    idea: RwSignal<Fields>,
    link: RwSignal<Fields>,
    note: RwSignal<Fields>,
    project: RwSignal<Fields>,
}

impl FormSignals {
    fn new() -> Self {
        Self {
            task: RwSignal::new(FormKind::Task.defaults()),
            idea: RwSignal::new(FormKind::Idea.defaults()),
            link: RwSignal::new(FormKind::Link.defaults()),
            note: RwSignal::new(FormKind::Note.defaults()),
            project: RwSignal::new(FormKind::Project.defaults()),
        }
    }

    fn get(&self, kind: FormKind) -> RwSignal<Fields> {
        match kind {
            FormKind::Task => self.task,
            FormKind::Idea => self.idea,
            FormKind::Link => self.link,
            FormKind::Note => self.note,
            FormKind::Project => self.project,
        }
    }
}

/// Per-form debounced draft writer
struct Autosave {
    drafts: SharedDrafts,
    debouncers: HashMap<FormKind, Debouncer>,
}

impl Autosave {
    fn new(config: &FocusConfig, store: Rc<dyn DraftStore>) -> Self {
        let debouncers = FormKind::ALL
            .iter()
            .map(|kind| (*kind, Debouncer::new(config.autosave_debounce_ms)))
            .collect();
        Self {
            drafts: Drafts::new(store, config.draft_key_prefix.clone()),
            debouncers,
        }
    }

    /// Re-arm the form's timer; the snapshot is read when it fires
    fn schedule(&self, kind: FormKind, fields: RwSignal<Fields>) {
        let Some(debouncer) = self.debouncers.get(&kind) else {
            return;
        };
        let drafts = self.drafts.clone();
        debouncer.schedule(move || {
            let snapshot = fields.get_untracked();
            if let Err(error) = drafts.save(kind.form_id(), &snapshot) {
                tracing::error!(form = kind.form_id(), %error, "saving draft failed");
            }
        });
    }
}

/// App-wide controller
#[derive(Clone, Copy)]
pub struct UiController {
    pub store: UiStore,
    forms: FormSignals,
    config: StoredValue<FocusConfig>,
    autosave: StoredValue<Autosave, LocalStorage>,
}

impl UiController {
    pub fn new(config: FocusConfig) -> Self {
        Self::with_store(config, Rc::new(LocalStorageStore))
    }

    /// Controller whose drafts go to `store` instead of `localStorage`
    pub fn with_store(config: FocusConfig, store: Rc<dyn DraftStore>) -> Self {
        let autosave = Autosave::new(&config, store);
        Self {
            store: Store::new(UiState::default()),
            forms: FormSignals::new(),
            config: StoredValue::new(config),
            autosave: StoredValue::new_local(autosave),
        }
    }

    /// Register as the target of the window-global entry points
    pub fn install(self) {
        CONTROLLER.with(|slot| slot.set(Some(self)));
    }

    pub fn current() -> Option<Self> {
        let controller = CONTROLLER.with(Cell::get);
        if controller.is_none() {
            tracing::warn!("UI controller used before the app was mounted");
        }
        controller
    }

    pub fn config(&self) -> FocusConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.api_base.clone()))
    }

    // ========================
    // Forms & drafts
    // ========================

    pub fn fields(&self, kind: FormKind) -> RwSignal<Fields> {
        self.forms.get(kind)
    }

    /// Reactive read of one field
    pub fn field(&self, kind: FormKind, name: &'static str) -> String {
        self.forms.get(kind).with(|fields| fields.get(name).cloned().unwrap_or_default())
    }

    /// Store a user edit and schedule the form's draft save
    pub fn edit_field(&self, kind: FormKind, name: &'static str, value: String) {
        let fields = self.forms.get(kind);
        fields.update(|f| {
            f.insert(name.to_string(), value);
        });
        self.autosave.with_value(|autosave| autosave.schedule(kind, fields));
    }

    /// Write saved drafts back into the app-owned forms
    pub fn restore_drafts(&self) {
        let drafts = self.autosave.with_value(|a| a.drafts.clone());
        for kind in FormKind::ALL {
            match drafts.load(kind.form_id()) {
                Ok(Some(draft)) => {
                    self.forms.get(kind).set(kind.restore(&draft));
                    tracing::debug!(form = kind.form_id(), "restored draft");
                }
                Ok(None) => {}
                Err(error) => tracing::error!(form = kind.form_id(), %error, "error restoring form data"),
            }
        }
    }

    pub fn clear_draft(&self, form_id: &str) {
        let drafts = self.autosave.with_value(|a| a.drafts.clone());
        if let Err(error) = drafts.clear(form_id) {
            tracing::warn!(form = form_id, %error, "clearing draft failed");
        }
    }

    pub fn drafts(&self) -> SharedDrafts {
        self.autosave.with_value(|a| a.drafts.clone())
    }

    fn reset_form(&self, kind: FormKind) {
        self.forms.get(kind).set(kind.defaults());
    }

    // ========================
    // Quick capture
    // ========================

    /// Show the modal on `tab` and focus its first field once laid out
    pub fn open_quick_capture(&self, tab: CaptureTab) {
        self.store.capture().set(CaptureState::open(tab));
        tracing::debug!(%tab, "quick capture opened");

        let delay = self.config.with_value(|c| c.focus_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            dom::focus_first_field(&tab.panel_id());
        });
    }

    pub fn switch_tab(&self, tab: CaptureTab) {
        self.store.capture().update(|state| *state = state.switch_tab(tab));
    }

    /// Hide the modal and reset all four capture forms
    pub fn close_quick_capture(&self) {
        self.store.capture().update(|state| *state = state.close());
        for tab in CaptureTab::ALL {
            self.reset_form(tab.into());
        }
    }

    // ========================
    // Panels & modals
    // ========================

    /// Returns whether the panel is open afterwards
    pub fn set_suggestions_open(&self, force: Option<bool>) -> bool {
        let open = toggled(self.store.suggestions_open().get_untracked(), force);
        self.store.suggestions_open().set(open);
        open
    }

    /// Show the project modal and focus its name field once laid out
    pub fn open_project_modal(&self) {
        self.store.project_modal_open().set(true);

        let delay = self.config.with_value(|c| c.focus_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            dom::focus_by_id("project-name");
        });
    }

    /// Hide the project modal, reset its form and reselect the first color
    pub fn close_project_modal(&self) {
        self.store.project_modal_open().set(false);
        self.reset_form(FormKind::Project);
    }

    pub fn select_color(&self, color: &str) {
        if !PROJECT_COLORS.contains(&color) {
            tracing::debug!(color, "selecting a color outside the palette");
        }
        self.edit_field(FormKind::Project, "color", color.to_string());
    }

    /// Escape: close everything that can be closed
    pub fn dismiss_all(&self) {
        self.close_quick_capture();
        self.close_project_modal();
        self.set_suggestions_open(Some(false));
    }

    // ========================
    // Projects
    // ========================

    /// Replace the project list, dropping selections of projects that vanished
    pub fn set_projects(&self, projects: Vec<Project>) {
        for kind in FormKind::ALL.into_iter().filter(FormKind::has_project_select) {
            self.forms.get(kind).update(|fields| {
                if let Some(selected) = fields.get_mut("project_id") {
                    *selected = reconcile_project_selection(selected, &projects);
                }
            });
        }
        tracing::debug!(count = projects.len(), "project list loaded");
        self.store.projects().set(projects);
    }

    // ========================
    // Toasts
    // ========================

    /// Append a toast; it fades after the visible period and is then removed
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let toasts = self.store.toasts();
        let mut id = 0;
        toasts.update(|list| id = list.push(message, kind));

        let (visible, fade) = self.config.with_value(|c| (c.toast_visible_ms, c.toast_fade_ms));
        spawn_local(async move {
            TimeoutFuture::new(visible).await;
            toasts.update(|list| list.start_leaving(id));
            TimeoutFuture::new(fade).await;
            toasts.update(|list| list.remove(id));
        });
    }
}

/// Get the controller from context
pub fn use_controller() -> UiController {
    expect_context::<UiController>()
}

#[cfg(test)]
pub(crate) fn test_controller() -> (Owner, UiController, form_drafts::MemoryStore) {
    // Spawned timers are queued and never polled off the browser
    let _ = any_spawner::Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();

    let store = form_drafts::MemoryStore::new();
    let config = FocusConfig { autosave_debounce_ms: 0, ..FocusConfig::default() };
    let ctrl = UiController::with_store(config, Rc::new(store.clone()));
    (owner, ctrl, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::DEFAULT_SWATCH;

    #[test]
    fn test_dismiss_all_closes_everything_and_resets_forms() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.open_quick_capture(CaptureTab::Idea);
        ctrl.edit_field(FormKind::Idea, "title", "Rooftop garden".to_string());
        ctrl.open_project_modal();
        ctrl.edit_field(FormKind::Project, "name", "Thesis".to_string());
        ctrl.select_color("#059669");
        ctrl.set_suggestions_open(Some(true));

        ctrl.dismiss_all();

        assert_eq!(ctrl.store.capture().get_untracked(), CaptureState::Closed);
        assert!(!ctrl.store.project_modal_open().get_untracked());
        assert!(!ctrl.store.suggestions_open().get_untracked());
        assert_eq!(ctrl.fields(FormKind::Idea).get_untracked(), FormKind::Idea.defaults());
        assert_eq!(ctrl.fields(FormKind::Project).get_untracked().get("color").map(String::as_str), Some(DEFAULT_SWATCH));
    }

    #[test]
    fn test_dismiss_all_keeps_suggestions_closed() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.dismiss_all();
        assert!(!ctrl.store.suggestions_open().get_untracked());
        assert!(ctrl.set_suggestions_open(None));
    }

    #[test]
    fn test_close_quick_capture_resets_the_four_capture_forms() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.open_quick_capture(CaptureTab::Link);
        ctrl.edit_field(FormKind::Task, "title", "Call bank".to_string());
        ctrl.edit_field(FormKind::Task, "priority", "urgent".to_string());
        ctrl.edit_field(FormKind::Idea, "title", "App".to_string());
        ctrl.edit_field(FormKind::Link, "url", "https://example.org".to_string());
        ctrl.edit_field(FormKind::Note, "content", "Milk".to_string());
        ctrl.edit_field(FormKind::Project, "name", "Garden".to_string());

        ctrl.close_quick_capture();

        assert!(!ctrl.store.capture().get_untracked().is_open());
        for tab in CaptureTab::ALL {
            let kind = FormKind::from(tab);
            assert_eq!(ctrl.fields(kind).get_untracked(), kind.defaults(), "{:?} not reset", kind);
        }
        assert_eq!(ctrl.field(FormKind::Project, "name"), "Garden");
    }

    #[test]
    fn test_switch_tab_needs_an_open_modal() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.switch_tab(CaptureTab::Note);
        assert_eq!(ctrl.store.capture().get_untracked(), CaptureState::Closed);

        ctrl.open_quick_capture(CaptureTab::Task);
        ctrl.switch_tab(CaptureTab::Note);
        assert_eq!(ctrl.store.capture().get_untracked(), CaptureState::Open(CaptureTab::Note));
    }

    #[test]
    fn test_set_projects_drops_vanished_selection() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.set_projects(vec![Project::new("1", "Home", None), Project::new("2", "Garden", None)]);
        ctrl.edit_field(FormKind::Task, "project_id", "2".to_string());
        ctrl.edit_field(FormKind::Idea, "project_id", "1".to_string());

        ctrl.set_projects(vec![Project::new("1", "Home", None)]);

        assert_eq!(ctrl.field(FormKind::Task, "project_id"), "");
        assert_eq!(ctrl.field(FormKind::Idea, "project_id"), "1");
        assert_eq!(ctrl.store.projects().get_untracked().len(), 1);
    }

    #[test]
    fn test_select_color_saves_project_draft() {
        let (_owner, ctrl, store) = test_controller();
        ctrl.select_color("#dc2626");

        let draft = ctrl.drafts().load(FormKind::Project.form_id()).unwrap().unwrap();
        assert_eq!(draft.get("color").map(String::as_str), Some("#dc2626"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_restore_drafts_fills_forms() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.edit_field(FormKind::Note, "content", "Buy seeds".to_string());
        ctrl.close_quick_capture();
        assert_eq!(ctrl.field(FormKind::Note, "content"), "");

        ctrl.restore_drafts();
        assert_eq!(ctrl.field(FormKind::Note, "content"), "Buy seeds");

        ctrl.clear_draft(FormKind::Note.form_id());
        assert_eq!(ctrl.drafts().load(FormKind::Note.form_id()).unwrap(), None);
    }

    #[test]
    fn test_open_project_modal_only_sets_flag() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.open_project_modal();
        assert!(ctrl.store.project_modal_open().get_untracked());

        ctrl.close_project_modal();
        assert!(!ctrl.store.project_modal_open().get_untracked());
    }

    #[test]
    fn test_show_toast_appends_in_order() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.show_toast("Saved", ToastKind::Success);
        ctrl.show_toast("Saved", ToastKind::Success);

        assert_eq!(ctrl.store.toasts().get_untracked().len(), 2);
    }
}
