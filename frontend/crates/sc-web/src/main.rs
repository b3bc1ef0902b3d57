use sc_client::ApiClient;
use sc_web::{Container, ListContent, MemoryPage, PublicEvent, PublicSite, logger};

use std::error::Error;
use std::sync::Arc;

use log::info;

/// Headless landing page load: fetches everything the page shows and logs it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = sc_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging)?;

    info!("Starting sc-web v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let page = Arc::new(MemoryPage::new());
    let site = PublicSite::new(ApiClient::from_config(&config.api), page.clone());
    site.handle(PublicEvent::Loaded).await;

    for container in [Container::ProjectsGrid, Container::ClientsGrid] {
        match page.list(container) {
            Some(ListContent::Cards(cards)) => {
                for card in cards {
                    info!("{}: {}", container.element_id(), card.title);
                }
            }
            Some(ListContent::Empty(text) | ListContent::Error(text)) => {
                info!("{}: {text}", container.element_id());
            }
            None => {}
        }
    }

    Ok(())
}
