use crate::crop::{
    ASPECT_RATIO, CropBox, CropOptions, CropSession, CropState, CropTarget, Cropper, INIT_DELAY,
    LocalFile, OUTPUT_HEIGHT, OUTPUT_WIDTH,
};
use crate::notifier::Notifier;
use crate::page::{BannerSlot, Page, fields};

use std::sync::Arc;

use log::{debug, error, warn};
use sc_core::DataUrl;
use tokio::sync::Mutex;

const INVALID_FILE: &str = "Please select a valid image file";
const NOT_READY: &str = "Please wait for image to load";
const CROP_FAILED: &str = "Error cropping image";
const CROPPED: &str = "Image cropped successfully!";

/// The crop modal and its widget, for one page load.
///
/// The session lock is never held across the initialization delay or while
/// an image is decoded or encoded. Image work runs on the blocking pool and
/// its result is dropped when the session moved on in the meantime.
pub struct CropWorkflow {
    page: Arc<dyn Page>,
    notifier: Notifier,
    cropper: Arc<dyn Cropper>,
    session: Mutex<CropSession>,
}

impl CropWorkflow {
    pub fn new(page: Arc<dyn Page>, notifier: Notifier, cropper: Arc<dyn Cropper>) -> Self {
        Self {
            page,
            notifier,
            cropper,
            session: Mutex::new(CropSession::new()),
        }
    }

    pub async fn state(&self) -> CropState {
        self.session.lock().await.state()
    }

    /// A file was picked for `target`: preview it and open the crop modal.
    /// Non-image files are refused before anything is shown.
    pub async fn select_file(&self, target: CropTarget, file: LocalFile) {
        if !file.is_image() {
            warn!(
                "Refused {} image '{}' of type '{}'",
                target.as_str(),
                file.name,
                file.media_type
            );
            self.notifier.error(BannerSlot::Top, INVALID_FILE);
            return;
        }

        let source = file.into_data_url();
        self.page.show_preview(target, &source.to_string());
        self.open(target, source).await;
    }

    /// Reopen the modal on whatever the target's preview currently shows
    pub async fn recrop(&self, target: CropTarget) {
        let Some(src) = self.page.preview_source(target) else {
            debug!("No {} preview to crop", target.as_str());
            return;
        };

        match DataUrl::parse(&src) {
            Ok(source) if source.is_image() => self.open(target, source).await,
            Ok(source) => {
                warn!(
                    "Cannot crop {} preview of type '{}'",
                    target.as_str(),
                    source.media_type
                );
                self.notifier.error(BannerSlot::Top, INVALID_FILE);
            }
            Err(err) => {
                warn!("Cannot crop {} preview: {err}", target.as_str());
                self.notifier.error(BannerSlot::Top, INVALID_FILE);
            }
        }
    }

    async fn open(&self, target: CropTarget, source: DataUrl) {
        let generation = {
            let mut session = self.session.lock().await;
            let (prior, generation) = session.open(target);
            if let Some(prior) = prior {
                self.cropper.destroy(prior);
            }
            generation
        };

        self.page.show_crop_modal(&source.to_string());

        // The surface needs layout before the widget measures it
        tokio::time::sleep(INIT_DELAY).await;

        if !self.session.lock().await.is_current(target, generation) {
            debug!("Crop session for {} ended before initialization", target.as_str());
            return;
        }

        let cropper = Arc::clone(&self.cropper);
        let initialized = tokio::task::spawn_blocking(move || {
            cropper.initialize(&source, ASPECT_RATIO, &CropOptions::default())
        })
        .await;

        let mut session = self.session.lock().await;
        if !session.is_current(target, generation) {
            debug!("Crop session for {} ended during initialization", target.as_str());
            if let Ok(Ok(handle)) = initialized {
                self.cropper.destroy(handle);
            }
            return;
        }

        match initialized {
            Ok(Ok(handle)) => {
                if let Some(stale) = session.attach(target, handle) {
                    self.cropper.destroy(stale);
                }
            }
            Ok(Err(err)) => {
                error!("Cannot initialize {} crop: {err}", target.as_str());
                self.close(&mut session);
                self.notifier.error(BannerSlot::Top, INVALID_FILE);
            }
            Err(err) => {
                error!("Crop initialization for {} did not finish: {err}", target.as_str());
                self.close(&mut session);
                self.notifier.error(BannerSlot::Top, INVALID_FILE);
            }
        }
    }

    /// Move or resize the crop box of the live widget
    pub async fn adjust(&self, region: CropBox) -> Option<CropBox> {
        let session = self.session.lock().await;
        let (_, handle) = session.live()?;

        match self.cropper.set_region(handle, region) {
            Ok(applied) => Some(applied),
            Err(err) => {
                warn!("Crop adjustment ignored: {err}");
                None
            }
        }
    }

    /// Render the crop, attach it to the target's form and close the modal
    pub async fn apply(&self) {
        let (target, handle, generation) = {
            let session = self.session.lock().await;
            let Some((target, handle)) = session.live() else {
                self.notifier.error(BannerSlot::Top, NOT_READY);
                return;
            };
            (target, handle, session.generation())
        };

        let cropper = Arc::clone(&self.cropper);
        let extracted = tokio::task::spawn_blocking(move || {
            cropper.extract_region(handle, OUTPUT_WIDTH, OUTPUT_HEIGHT)
        })
        .await;

        let mut session = self.session.lock().await;
        if session.generation() != generation || session.live() != Some((target, handle)) {
            debug!("Crop session for {} ended while cropping", target.as_str());
            return;
        }

        let encoded = match extracted {
            Ok(Ok(encoded)) => encoded,
            Ok(Err(err)) => {
                error!("Error cropping {} image: {err}", target.as_str());
                self.notifier.error(BannerSlot::Top, CROP_FAILED);
                return;
            }
            Err(err) => {
                error!("Cropping {} image did not finish: {err}", target.as_str());
                self.notifier.error(BannerSlot::Top, CROP_FAILED);
                return;
            }
        };

        let data_url = encoded.to_data_url().to_string();
        self.page
            .set_form_field(target.form(), fields::IMAGE_URL, &data_url);
        self.page.show_preview(target, &data_url);

        self.close(&mut session);
        self.notifier.success(BannerSlot::Top, CROPPED);
    }

    /// Close without touching any earlier crop result
    pub async fn cancel(&self) {
        let mut session = self.session.lock().await;
        self.close(&mut session);
    }

    fn close(&self, session: &mut CropSession) {
        self.page.hide_crop_modal();
        for handle in session.close() {
            self.cropper.destroy(handle);
        }
    }
}
