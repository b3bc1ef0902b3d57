//! The landing page: project and client showcases plus three contact forms.

use crate::form_submitter::{self, Submission, SubmitMessages};
use crate::list_renderer::render_list;
use crate::lists::{PUBLIC_CLIENTS, PUBLIC_PROJECTS};
use crate::notifier::Notifier;
use crate::page::{BannerSlot, FormId, Page, fields};

use std::sync::Arc;

use log::{error, info, warn};
use sc_client::ApiClient;
use sc_core::{Contact, NewsletterSubscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicEvent {
    Loaded,
    HeroSubmitted,
    ContactSubmitted,
    NewsletterSubmitted,
}

pub struct PublicSite {
    client: ApiClient,
    page: Arc<dyn Page>,
    notifier: Notifier,
}

impl PublicSite {
    pub fn new(client: ApiClient, page: Arc<dyn Page>) -> Self {
        let notifier = Notifier::new(Arc::clone(&page));
        Self {
            client,
            page,
            notifier,
        }
    }

    pub async fn handle(&self, event: PublicEvent) {
        match event {
            PublicEvent::Loaded => self.load().await,
            PublicEvent::HeroSubmitted => self.submit_hero().await,
            PublicEvent::ContactSubmitted => self.submit_contact().await,
            PublicEvent::NewsletterSubmitted => self.submit_newsletter().await,
        }
    }

    /// Probe the backend and fill both showcases
    pub async fn load(&self) {
        info!("Loading landing page from {}", self.client.base_url);

        tokio::join!(
            self.probe(),
            render_list(
                self.page.as_ref(),
                &PUBLIC_PROJECTS,
                self.client.list_projects()
            ),
            render_list(
                self.page.as_ref(),
                &PUBLIC_CLIENTS,
                self.client.list_clients()
            ),
        );
    }

    async fn probe(&self) {
        match self.client.health().await {
            Ok(()) => info!("Backend is reachable"),
            Err(err) if err.is_connectivity() => error!("Cannot connect to backend API: {err}"),
            Err(err) => warn!("API connection issue detected: {err}"),
        }
    }

    async fn submit_hero(&self) {
        let values = self.page.form_values(FormId::Hero);
        let payload = Contact::consultation_request(
            values.get(fields::FULL_NAME),
            values.get(fields::EMAIL),
            values.get(fields::MOBILE_NUMBER),
        );

        let messages = &form_submitter::HERO_CONTACT;
        let outcome = form_submitter::submit(
            payload,
            |contact| async move { self.client.create_contact(&contact).await },
            messages,
        )
        .await;

        match outcome {
            Submission::Invalid(text) | Submission::Failed(text) => self.page.alert(&text),
            Submission::Accepted(_) => {
                self.page.alert(messages.success);
                self.page.reset_form(FormId::Hero);
            }
        }
    }

    async fn submit_contact(&self) {
        let values = self.page.form_values(FormId::Contact);
        let payload = Contact::new(
            values.get(fields::FULL_NAME),
            values.get(fields::EMAIL),
            values.get(fields::MOBILE_NUMBER),
            values.get(fields::CITY),
        );

        let outcome = form_submitter::submit(
            payload,
            |contact| async move { self.client.create_contact(&contact).await },
            &form_submitter::CONTACT,
        )
        .await;

        self.report_inline(FormId::Contact, outcome, &form_submitter::CONTACT);
    }

    async fn submit_newsletter(&self) {
        let values = self.page.form_values(FormId::Newsletter);
        let payload = NewsletterSubscription::new(values.get(fields::EMAIL));

        let outcome = form_submitter::submit(
            payload,
            |subscription| async move { self.client.subscribe(&subscription).await },
            &form_submitter::NEWSLETTER,
        )
        .await;

        self.report_inline(FormId::Newsletter, outcome, &form_submitter::NEWSLETTER);
    }

    fn report_inline<R>(&self, form: FormId, outcome: Submission<R>, messages: &SubmitMessages) {
        let slot = BannerSlot::BeforeForm(form);
        match outcome {
            Submission::Invalid(text) | Submission::Failed(text) => {
                self.notifier.error(slot, &text);
            }
            Submission::Accepted(_) => {
                self.notifier.success(slot, messages.success);
                self.page.reset_form(form);
            }
        }
    }
}
