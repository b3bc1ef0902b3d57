mod notifier;
mod session;

use crate::crop::{CropBox, CropHandle, CropOptions, Cropper, EncodedImage, RasterCropper};
use crate::{WebError, WebResult};

use std::io::Cursor;
use std::sync::Mutex;
use std::sync::mpsc::Receiver;
use std::thread::{self, ThreadId};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use sc_core::DataUrl;

pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([200, 80, 40]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub(crate) fn png_data_url(width: u32, height: u32) -> DataUrl {
    DataUrl::new("image/png", png_bytes(width, height))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WidgetCall {
    Initialize(CropHandle),
    Destroy(CropHandle),
}

/// Delegates to a [`RasterCropper`] and records widget lifecycle calls
#[derive(Default)]
pub(crate) struct RecordingCropper {
    inner: RasterCropper,
    calls: Mutex<Vec<WidgetCall>>,
    image_threads: Mutex<Vec<ThreadId>>,
}

impl RecordingCropper {
    pub(crate) fn calls(&self) -> Vec<WidgetCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn initialized(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, WidgetCall::Initialize(_)))
            .count()
    }

    pub(crate) fn live_count(&self) -> usize {
        self.inner.live_count()
    }

    /// Threads that decoded or encoded an image
    pub(crate) fn image_threads(&self) -> Vec<ThreadId> {
        self.image_threads.lock().unwrap().clone()
    }
}

impl Cropper for RecordingCropper {
    fn initialize(
        &self,
        source: &DataUrl,
        aspect_ratio: f64,
        options: &CropOptions,
    ) -> WebResult<CropHandle> {
        self.image_threads.lock().unwrap().push(thread::current().id());
        let handle = self.inner.initialize(source, aspect_ratio, options)?;
        self.calls.lock().unwrap().push(WidgetCall::Initialize(handle));
        Ok(handle)
    }

    fn region(&self, handle: CropHandle) -> WebResult<CropBox> {
        self.inner.region(handle)
    }

    fn set_region(&self, handle: CropHandle, region: CropBox) -> WebResult<CropBox> {
        self.inner.set_region(handle, region)
    }

    fn extract_region(
        &self,
        handle: CropHandle,
        width: u32,
        height: u32,
    ) -> WebResult<EncodedImage> {
        self.image_threads.lock().unwrap().push(thread::current().id());
        self.inner.extract_region(handle, width, height)
    }

    fn destroy(&self, handle: CropHandle) {
        self.calls.lock().unwrap().push(WidgetCall::Destroy(handle));
        self.inner.destroy(handle);
    }
}

/// Initializes fine but can never produce output
pub(crate) struct BrokenEncoder(pub(crate) RasterCropper);

impl Cropper for BrokenEncoder {
    fn initialize(
        &self,
        source: &DataUrl,
        aspect_ratio: f64,
        options: &CropOptions,
    ) -> WebResult<CropHandle> {
        self.0.initialize(source, aspect_ratio, options)
    }

    fn region(&self, handle: CropHandle) -> WebResult<CropBox> {
        self.0.region(handle)
    }

    fn set_region(&self, handle: CropHandle, region: CropBox) -> WebResult<CropBox> {
        self.0.set_region(handle, region)
    }

    fn extract_region(&self, handle: CropHandle, _: u32, _: u32) -> WebResult<EncodedImage> {
        Err(WebError::unknown_handle(handle))
    }

    fn destroy(&self, handle: CropHandle) {
        self.0.destroy(handle);
    }
}

/// Finishes extraction only once the test releases it
pub(crate) struct GatedEncoder {
    pub(crate) inner: RasterCropper,
    pub(crate) gate: Mutex<Receiver<()>>,
}

impl Cropper for GatedEncoder {
    fn initialize(
        &self,
        source: &DataUrl,
        aspect_ratio: f64,
        options: &CropOptions,
    ) -> WebResult<CropHandle> {
        self.inner.initialize(source, aspect_ratio, options)
    }

    fn region(&self, handle: CropHandle) -> WebResult<CropBox> {
        self.inner.region(handle)
    }

    fn set_region(&self, handle: CropHandle, region: CropBox) -> WebResult<CropBox> {
        self.inner.set_region(handle, region)
    }

    fn extract_region(
        &self,
        handle: CropHandle,
        width: u32,
        height: u32,
    ) -> WebResult<EncodedImage> {
        let encoded = self.inner.extract_region(handle, width, height);
        let _ = self.gate.lock().unwrap().recv();
        encoded
    }

    fn destroy(&self, handle: CropHandle) {
        self.inner.destroy(handle);
    }
}
