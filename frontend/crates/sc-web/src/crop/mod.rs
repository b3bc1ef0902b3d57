//! Select → preview → crop → attach, for project and client images.

mod cropper;
pub(crate) mod raster_cropper;
mod session;
mod workflow;

pub use cropper::{CropBox, CropHandle, CropOptions, Cropper, EncodedImage};
pub use raster_cropper::RasterCropper;
pub use session::{CropSession, CropState};
pub use workflow::CropWorkflow;

use crate::page::FormId;

use std::time::Duration;

use sc_core::DataUrl;

/// Size of every cropped upload
pub const OUTPUT_WIDTH: u32 = 450;
pub const OUTPUT_HEIGHT: u32 = 350;
pub const ASPECT_RATIO: f64 = OUTPUT_WIDTH as f64 / OUTPUT_HEIGHT as f64;
pub const JPEG_QUALITY: u8 = 90;

/// Wait between showing the modal and measuring it for the widget
pub const INIT_DELAY: Duration = Duration::from_millis(100);

/// Which creation form a crop feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropTarget {
    Project,
    Client,
}

impl CropTarget {
    pub fn form(self) -> FormId {
        match self {
            CropTarget::Project => FormId::Project,
            CropTarget::Client => FormId::Client,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CropTarget::Project => "project",
            CropTarget::Client => "client",
        }
    }
}

/// A file picked from the local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    /// Declared media type, e.g. "image/png"
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new<S: Into<String>, M: Into<String>>(name: S, media_type: M, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Only the declared type is checked; content is checked when decoded
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn into_data_url(self) -> DataUrl {
        DataUrl::new(self.media_type, self.bytes)
    }
}
