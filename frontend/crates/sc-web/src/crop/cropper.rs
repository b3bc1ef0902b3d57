use crate::WebResult;

use sc_core::DataUrl;

/// A live cropping widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropHandle(pub u64);

/// Crop rectangle in source-image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Share of the largest fitting box the initial crop box covers
    pub auto_crop_area: f64,
    /// Draw dashed guides over the crop box
    pub guides: bool,
    /// Draw a center indicator
    pub center: bool,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            auto_crop_area: 0.8,
            guides: true,
            center: true,
        }
    }
}

/// An encoded output image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub media_type: &'static str,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn to_data_url(&self) -> DataUrl {
        DataUrl::new(self.media_type, self.bytes.clone())
    }
}

/// Cropping capability.
///
/// The crop box always keeps the aspect ratio given to `initialize` and stays
/// inside the image.
pub trait Cropper: Send + Sync {
    fn initialize(
        &self,
        source: &DataUrl,
        aspect_ratio: f64,
        options: &CropOptions,
    ) -> WebResult<CropHandle>;

    fn region(&self, handle: CropHandle) -> WebResult<CropBox>;

    /// Move or resize the crop box; returns the box actually applied
    fn set_region(&self, handle: CropHandle, region: CropBox) -> WebResult<CropBox>;

    /// Render the crop box scaled to exactly `width` x `height` and encode it
    fn extract_region(&self, handle: CropHandle, width: u32, height: u32)
    -> WebResult<EncodedImage>;

    /// Unknown handles are ignored
    fn destroy(&self, handle: CropHandle);
}
