use crate::notifier::{BANNER_LIFETIME, Notifier};
use crate::page::{BannerKind, BannerSlot, FormId, MemoryPage};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;

async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn test_banner_is_dismissed_after_lifetime() {
    let page = Arc::new(MemoryPage::new());
    let notifier = Notifier::new(page.clone());

    notifier.success(BannerSlot::Top, "Saved");
    assert_that!(page.banners(), len(eq(1)));
    assert_that!(page.banners()[0].kind, eq(BannerKind::Success));

    advance(BANNER_LIFETIME - Duration::from_secs(1)).await;
    assert_that!(page.banners(), len(eq(1)));

    advance(Duration::from_secs(2)).await;
    assert_that!(page.banners(), is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_does_not_remove_replacement() {
    let page = Arc::new(MemoryPage::new());
    let notifier = Notifier::new(page.clone());

    notifier.error(BannerSlot::Top, "first");
    advance(Duration::from_secs(3)).await;
    let second = notifier.error(BannerSlot::Top, "second");
    assert_that!(page.banners(), len(eq(1)));

    advance(Duration::from_secs(3)).await;
    let banners = page.banners();
    assert_that!(banners, len(eq(1)));
    assert_that!(banners[0].id, eq(second));

    advance(Duration::from_secs(3)).await;
    assert_that!(page.banners(), is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_inline_banners_stack_per_form() {
    let page = Arc::new(MemoryPage::new());
    let notifier = Notifier::new(page.clone());

    let first = notifier.error(BannerSlot::BeforeForm(FormId::Contact), "one");
    let second = notifier.error(BannerSlot::BeforeForm(FormId::Contact), "two");
    notifier.success(BannerSlot::Top, "top");

    assert_that!(page.banners(), len(eq(3)));
    assert!(first != second);
}
