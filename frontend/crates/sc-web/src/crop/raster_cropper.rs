use crate::crop::{CropBox, CropHandle, CropOptions, Cropper, EncodedImage, JPEG_QUALITY};
use crate::{WebError, WebResult};

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use log::debug;
use sc_core::DataUrl;

const OUTPUT_MEDIA_TYPE: &str = "image/jpeg";

struct Widget {
    image: DynamicImage,
    aspect_ratio: f64,
    region: CropBox,
}

/// [`Cropper`] over decoded rasters, encoding JPEG.
///
/// Every call is synchronous and CPU-bound; async callers run it on the
/// blocking pool.
pub struct RasterCropper {
    quality: u8,
    next_handle: AtomicU64,
    widgets: Mutex<HashMap<CropHandle, Widget>>,
}

impl RasterCropper {
    pub fn new() -> Self {
        Self::with_quality(JPEG_QUALITY)
    }

    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality,
            next_handle: AtomicU64::new(1),
            widgets: Mutex::new(HashMap::new()),
        }
    }

    /// Number of widgets not yet destroyed
    pub fn live_count(&self) -> usize {
        self.widgets().len()
    }

    fn widgets(&self) -> MutexGuard<'_, HashMap<CropHandle, Widget>> {
        self.widgets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RasterCropper {
    fn default() -> Self {
        Self::new()
    }
}

impl Cropper for RasterCropper {
    fn initialize(
        &self,
        source: &DataUrl,
        aspect_ratio: f64,
        options: &CropOptions,
    ) -> WebResult<CropHandle> {
        // Decode (CPU-bound)
        let image = ImageReader::new(Cursor::new(&source.data))
            .with_guessed_format()
            .map_err(|e| WebError::decode(ImageError::IoError(e)))?
            .decode()
            .map_err(WebError::decode)?;
        let (width, height) = image.dimensions();
        let region = initial_region(width, height, aspect_ratio, options.auto_crop_area);

        let handle = CropHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        debug!("Crop widget {} ready on {width}x{height} image, box {region:?}", handle.0);

        self.widgets().insert(
            handle,
            Widget {
                image,
                aspect_ratio,
                region,
            },
        );

        Ok(handle)
    }

    fn region(&self, handle: CropHandle) -> WebResult<CropBox> {
        self.widgets()
            .get(&handle)
            .map(|widget| widget.region)
            .ok_or_else(|| WebError::unknown_handle(handle))
    }

    fn set_region(&self, handle: CropHandle, region: CropBox) -> WebResult<CropBox> {
        let mut widgets = self.widgets();
        let widget = widgets
            .get_mut(&handle)
            .ok_or_else(|| WebError::unknown_handle(handle))?;

        let (width, height) = widget.image.dimensions();
        widget.region = constrain(region, width, height, widget.aspect_ratio);

        Ok(widget.region)
    }

    fn extract_region(
        &self,
        handle: CropHandle,
        width: u32,
        height: u32,
    ) -> WebResult<EncodedImage> {
        let widgets = self.widgets();
        let widget = widgets
            .get(&handle)
            .ok_or_else(|| WebError::unknown_handle(handle))?;

        let CropBox {
            x,
            y,
            width: box_width,
            height: box_height,
        } = widget.region;
        let rgb = widget
            .image
            .crop_imm(x, y, box_width, box_height)
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_rgb8();

        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, self.quality)
            .encode_image(&rgb)
            .map_err(WebError::encode)?;

        Ok(EncodedImage {
            media_type: OUTPUT_MEDIA_TYPE,
            width,
            height,
            bytes,
        })
    }

    fn destroy(&self, handle: CropHandle) {
        if self.widgets().remove(&handle).is_some() {
            debug!("Crop widget {} destroyed", handle.0);
        }
    }
}

/// Largest box with `aspect_ratio` that fits the image
fn fit(image_width: u32, image_height: u32, aspect_ratio: f64) -> (u32, u32) {
    if image_width as f64 / image_height as f64 > aspect_ratio {
        let width = (image_height as f64 * aspect_ratio).round() as u32;
        (width.clamp(1, image_width), image_height)
    } else {
        let height = (image_width as f64 / aspect_ratio).round() as u32;
        (image_width, height.clamp(1, image_height))
    }
}

/// Centered box covering `area` of the largest fitting box
pub(crate) fn initial_region(
    image_width: u32,
    image_height: u32,
    aspect_ratio: f64,
    area: f64,
) -> CropBox {
    let (max_width, max_height) = fit(image_width, image_height, aspect_ratio);
    let width = ((max_width as f64 * area).round() as u32).clamp(1, max_width);
    let height = ((width as f64 / aspect_ratio).round() as u32).clamp(1, max_height);

    CropBox {
        x: (image_width - width) / 2,
        y: (image_height - height) / 2,
        width,
        height,
    }
}

/// Keep the box's aspect ratio and keep it inside the image
pub(crate) fn constrain(
    region: CropBox,
    image_width: u32,
    image_height: u32,
    aspect_ratio: f64,
) -> CropBox {
    let (max_width, max_height) = fit(image_width, image_height, aspect_ratio);
    let width = region.width.clamp(1, max_width);
    let height = ((width as f64 / aspect_ratio).round() as u32).clamp(1, max_height);

    CropBox {
        x: region.x.min(image_width - width),
        y: region.y.min(image_height - height),
        width,
        height,
    }
}
