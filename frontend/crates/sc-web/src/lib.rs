//! Page controllers for the showcase site.
//!
//! [`PublicSite`] drives the landing page and [`AdminConsole`] the admin
//! console. Both render through the [`Page`] trait, so any host that can show
//! lists, banners, forms and a modal can embed them. [`MemoryPage`] is the
//! in-memory host used by headless runs and tests.

pub mod admin_console;
pub mod crop;
pub mod error;
pub mod form_submitter;
pub mod list_renderer;
pub mod lists;
pub mod logger;
pub mod notifier;
pub mod page;
pub mod public_site;
pub mod tabs;

#[cfg(test)]
mod tests;

pub use admin_console::{AdminConsole, AdminEvent};
pub use crop::{
    CropBox, CropHandle, CropOptions, CropState, CropTarget, CropWorkflow, Cropper, EncodedImage,
    LocalFile, RasterCropper,
};
pub use error::{Result as WebResult, WebError};
pub use notifier::Notifier;
pub use page::{
    Banner, BannerId, BannerKind, BannerSlot, Card, CardImage, CardKind, Container, FormId,
    FormValues, ListContent, MemoryPage, Page, Tab,
};
pub use public_site::{PublicEvent, PublicSite};
pub use tabs::TabNavigator;
