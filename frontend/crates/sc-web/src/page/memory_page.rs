use crate::page::{Banner, BannerId, BannerSlot, Container, FormId, FormValues, ListContent, Page, Tab};
use crate::CropTarget;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct PageState {
    lists: HashMap<Container, ListContent>,
    banners: Vec<Banner>,
    alerts: Vec<String>,
    forms: HashMap<FormId, FormValues>,
    previews: HashMap<CropTarget, String>,
    modal: Option<String>,
    active_tab: Tab,
}

/// In-memory page.
///
/// Keeps the same invariants a browser page has: one active tab, one banner
/// in the top slot, one crop modal.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Type into a form field, as a user would
    pub fn fill(&self, form: FormId, field: &str, value: &str) {
        self.set_form_field(form, field, value);
    }

    pub fn list(&self, container: Container) -> Option<ListContent> {
        self.state().lists.get(&container).cloned()
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.state().banners.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }

    pub fn field(&self, form: FormId, field: &str) -> String {
        self.form_values(form).get(field).to_string()
    }

    pub fn preview(&self, target: CropTarget) -> Option<String> {
        self.preview_source(target)
    }

    /// Image loaded in the crop modal, `None` while hidden
    pub fn modal_image(&self) -> Option<String> {
        self.state().modal.clone()
    }

    pub fn active_tab(&self) -> Tab {
        self.state().active_tab
    }
}

impl Page for MemoryPage {
    fn render_list(&self, container: Container, content: ListContent) {
        self.state().lists.insert(container, content);
    }

    fn show_banner(&self, banner: &Banner) {
        let mut state = self.state();
        if banner.slot == BannerSlot::Top {
            state.banners.retain(|shown| shown.slot != BannerSlot::Top);
        }
        state.banners.push(banner.clone());
    }

    fn dismiss_banner(&self, id: BannerId) {
        self.state().banners.retain(|shown| shown.id != id);
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }

    fn form_values(&self, form: FormId) -> FormValues {
        self.state().forms.get(&form).cloned().unwrap_or_default()
    }

    fn set_form_field(&self, form: FormId, field: &str, value: &str) {
        self.state()
            .forms
            .entry(form)
            .or_default()
            .set(field, value);
    }

    fn reset_form(&self, form: FormId) {
        if let Some(values) = self.state().forms.get_mut(&form) {
            values.clear();
        }
    }

    fn show_preview(&self, target: CropTarget, src: &str) {
        self.state().previews.insert(target, src.to_string());
    }

    fn hide_preview(&self, target: CropTarget) {
        self.state().previews.remove(&target);
    }

    fn preview_source(&self, target: CropTarget) -> Option<String> {
        self.state().previews.get(&target).cloned()
    }

    fn show_crop_modal(&self, src: &str) {
        self.state().modal = Some(src.to_string());
    }

    fn hide_crop_modal(&self) {
        self.state().modal = None;
    }

    fn activate_tab(&self, tab: Tab) {
        self.state().active_tab = tab;
    }
}
