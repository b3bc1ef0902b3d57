use crate::page::{Page, Tab};

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

/// Admin tab switching
pub struct TabNavigator {
    page: Arc<dyn Page>,
    active: Mutex<Tab>,
}

impl TabNavigator {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self {
            page,
            active: Mutex::new(Tab::default()),
        }
    }

    pub fn active(&self) -> Tab {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make `tab` the only active tab.
    ///
    /// Returns true when the tab's list has to be fetched now. Contacts and
    /// newsletters are fetched on every activation, even when already active.
    pub fn activate(&self, tab: Tab) -> bool {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = tab;
        self.page.activate_tab(tab);
        debug!("Activated tab '{tab}' ({})", tab.panel_id());

        refetch_on_activate(tab)
    }
}

pub fn refetch_on_activate(tab: Tab) -> bool {
    matches!(tab, Tab::Contacts | Tab::Newsletters)
}
