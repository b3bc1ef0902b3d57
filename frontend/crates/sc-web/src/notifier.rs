use crate::page::{Banner, BannerId, BannerKind, BannerSlot, Page};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;

/// How long a banner stays up
pub const BANNER_LIFETIME: Duration = Duration::from_secs(5);

/// Shows banners and schedules their removal.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct Notifier {
    page: Arc<dyn Page>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self {
            page,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn success(&self, slot: BannerSlot, text: &str) -> BannerId {
        self.show(BannerKind::Success, slot, text)
    }

    pub fn error(&self, slot: BannerSlot, text: &str) -> BannerId {
        self.show(BannerKind::Error, slot, text)
    }

    fn show(&self, kind: BannerKind, slot: BannerSlot, text: &str) -> BannerId {
        let id = BannerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.page.show_banner(&Banner {
            id,
            kind,
            slot,
            text: text.to_string(),
        });

        // A banner replaced in the meantime is already gone; dismissing it again is a no-op.
        let page = Arc::clone(&self.page);
        tokio::spawn(async move {
            tokio::time::sleep(BANNER_LIFETIME).await;
            debug!("Dismissing banner {}", id.0);
            page.dismiss_banner(id);
        });

        id
    }
}
