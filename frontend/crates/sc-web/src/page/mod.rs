//! The surface the controllers render into.
//!
//! A browser host maps these calls onto DOM elements (the `element_id`
//! helpers give the ids the markup uses); [`MemoryPage`] keeps them in memory.

mod card;
mod memory_page;

pub use card::{Card, CardImage, CardKind, ListContent};
pub use memory_page::MemoryPage;

use crate::CropTarget;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Form field names, matching the JSON names of the entities
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DESIGNATION: &str = "designation";
    /// Hidden field holding the cropped image as a data URL
    pub const IMAGE_URL: &str = "imageUrl";
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const MOBILE_NUMBER: &str = "mobileNumber";
    pub const CITY: &str = "city";
}

pub trait Page: Send + Sync {
    /// Replace the whole content of a list container
    fn render_list(&self, container: Container, content: ListContent);

    fn show_banner(&self, banner: &Banner);

    /// Remove a banner if it is still shown
    fn dismiss_banner(&self, id: BannerId);

    /// Blocking notice (the hero form reports through this)
    fn alert(&self, message: &str);

    fn form_values(&self, form: FormId) -> FormValues;

    fn set_form_field(&self, form: FormId, field: &str, value: &str);

    /// Clear every field of the form, hidden ones included
    fn reset_form(&self, form: FormId);

    fn show_preview(&self, target: CropTarget, src: &str);

    fn hide_preview(&self, target: CropTarget);

    /// Image currently held by the target's preview, if any
    fn preview_source(&self, target: CropTarget) -> Option<String>;

    fn show_crop_modal(&self, src: &str);

    fn hide_crop_modal(&self);

    /// Mark exactly this tab button and panel active
    fn activate_tab(&self, tab: Tab);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    // Landing page
    ProjectsGrid,
    ClientsGrid,
    // Admin console
    ProjectsList,
    ClientsList,
    ContactsList,
    NewslettersList,
}

impl Container {
    pub fn element_id(self) -> &'static str {
        match self {
            Container::ProjectsGrid => "projectsGrid",
            Container::ClientsGrid => "clientsGrid",
            Container::ProjectsList => "projectsList",
            Container::ClientsList => "clientsList",
            Container::ContactsList => "contactsList",
            Container::NewslettersList => "newslettersList",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    Hero,
    Contact,
    Newsletter,
    Project,
    Client,
}

impl FormId {
    pub fn element_id(self) -> &'static str {
        match self {
            FormId::Hero => "heroContactForm",
            FormId::Contact => "contactForm",
            FormId::Newsletter => "newsletterForm",
            FormId::Project => "projectForm",
            FormId::Client => "clientForm",
        }
    }
}

/// Admin console tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Projects,
    Clients,
    Contacts,
    Newsletters,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Projects, Tab::Clients, Tab::Contacts, Tab::Newsletters];

    /// Value of the button's `data-tab` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Projects => "projects",
            Tab::Clients => "clients",
            Tab::Contacts => "contacts",
            Tab::Newsletters => "newsletters",
        }
    }

    /// Id of the content panel
    pub fn panel_id(self) -> String {
        format!("{}Tab", self.as_str())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSlot {
    /// Top of the admin container; holds one banner at a time
    Top,
    /// Inline, directly above a form
    BeforeForm(FormId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub slot: BannerSlot,
    pub text: String,
}

/// Current values of a form's fields, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Value of a field, empty when the field was never filled
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.0.insert(field.to_string(), value.to_string());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
