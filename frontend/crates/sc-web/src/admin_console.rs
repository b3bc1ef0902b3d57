//! The admin console: tabbed lists, and project/client creation behind the
//! crop step.

use crate::crop::{CropBox, CropTarget, CropWorkflow, Cropper, LocalFile};
use crate::form_submitter::{self, Submission, SubmitMessages};
use crate::list_renderer::render_list;
use crate::lists::{ADMIN_CLIENTS, ADMIN_CONTACTS, ADMIN_NEWSLETTERS, ADMIN_PROJECTS};
use crate::notifier::Notifier;
use crate::page::{BannerSlot, FormId, Page, Tab, fields};
use crate::tabs::TabNavigator;

use std::sync::Arc;

use log::{error, info, warn};
use sc_client::ApiClient;
use sc_core::{Client, Project};

const CONNECTION_WARNING: &str = "Warning: API connection issue detected";
const CONNECTION_ERROR: &str = "Cannot connect to backend API. Please ensure the server is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEvent {
    Loaded,
    TabClicked(Tab),
    FileSelected { target: CropTarget, file: LocalFile },
    RecropClicked(CropTarget),
    CropAdjusted(CropBox),
    CropApplied,
    CropCancelled,
    /// The modal's close button
    CropClosed,
    BackdropClicked,
    ProjectSubmitted,
    ClientSubmitted,
}

pub struct AdminConsole {
    client: ApiClient,
    page: Arc<dyn Page>,
    notifier: Notifier,
    tabs: TabNavigator,
    crop: CropWorkflow,
}

impl AdminConsole {
    pub fn new(client: ApiClient, page: Arc<dyn Page>, cropper: Arc<dyn Cropper>) -> Self {
        let notifier = Notifier::new(Arc::clone(&page));
        Self {
            client,
            tabs: TabNavigator::new(Arc::clone(&page)),
            crop: CropWorkflow::new(Arc::clone(&page), notifier.clone(), cropper),
            page,
            notifier,
        }
    }

    pub fn crop(&self) -> &CropWorkflow {
        &self.crop
    }

    pub fn tabs(&self) -> &TabNavigator {
        &self.tabs
    }

    pub async fn handle(&self, event: AdminEvent) {
        match event {
            AdminEvent::Loaded => self.load().await,
            AdminEvent::TabClicked(tab) => self.switch_tab(tab).await,
            AdminEvent::FileSelected { target, file } => self.crop.select_file(target, file).await,
            AdminEvent::RecropClicked(target) => self.crop.recrop(target).await,
            AdminEvent::CropAdjusted(region) => {
                self.crop.adjust(region).await;
            }
            AdminEvent::CropApplied => self.crop.apply().await,
            AdminEvent::CropCancelled | AdminEvent::CropClosed | AdminEvent::BackdropClicked => {
                self.crop.cancel().await
            }
            AdminEvent::ProjectSubmitted => self.submit_project().await,
            AdminEvent::ClientSubmitted => self.submit_client().await,
        }
    }

    /// Check the backend and fill the project and client lists
    pub async fn load(&self) {
        info!("Loading admin console from {}", self.client.base_url);
        self.page.activate_tab(self.tabs.active());

        tokio::join!(
            self.check_connection(),
            self.load_projects(),
            self.load_clients(),
        );
    }

    async fn check_connection(&self) {
        match self.client.health().await {
            Ok(()) => info!("Backend is reachable"),
            Err(err) if err.is_connectivity() => {
                error!("Cannot connect to backend API: {err}");
                self.notifier.error(BannerSlot::Top, CONNECTION_ERROR);
            }
            Err(err) => {
                warn!("API connection issue detected: {err}");
                self.notifier.error(BannerSlot::Top, CONNECTION_WARNING);
            }
        }
    }

    async fn switch_tab(&self, tab: Tab) {
        if !self.tabs.activate(tab) {
            return;
        }

        match tab {
            Tab::Contacts => self.load_contacts().await,
            Tab::Newsletters => self.load_newsletters().await,
            Tab::Projects | Tab::Clients => {}
        }
    }

    pub async fn load_projects(&self) {
        render_list(
            self.page.as_ref(),
            &ADMIN_PROJECTS,
            self.client.list_projects(),
        )
        .await;
    }

    pub async fn load_clients(&self) {
        render_list(self.page.as_ref(), &ADMIN_CLIENTS, self.client.list_clients()).await;
    }

    pub async fn load_contacts(&self) {
        render_list(
            self.page.as_ref(),
            &ADMIN_CONTACTS,
            self.client.list_contacts(),
        )
        .await;
    }

    pub async fn load_newsletters(&self) {
        render_list(
            self.page.as_ref(),
            &ADMIN_NEWSLETTERS,
            self.client.list_subscriptions(),
        )
        .await;
    }

    async fn submit_project(&self) {
        let values = self.page.form_values(FormId::Project);
        let payload = Project::new(
            values.get(fields::NAME),
            values.get(fields::DESCRIPTION),
            values.get(fields::IMAGE_URL),
        );

        let outcome = form_submitter::submit(
            payload,
            |project| async move { self.client.create_project(&project).await },
            &form_submitter::PROJECT,
        )
        .await;

        if self.report(CropTarget::Project, outcome, &form_submitter::PROJECT) {
            self.load_projects().await;
        }
    }

    async fn submit_client(&self) {
        let values = self.page.form_values(FormId::Client);
        let payload = Client::new(
            values.get(fields::NAME),
            values.get(fields::DESCRIPTION),
            values.get(fields::DESIGNATION),
            values.get(fields::IMAGE_URL),
        );

        let outcome = form_submitter::submit(
            payload,
            |client| async move { self.client.create_client(&client).await },
            &form_submitter::CLIENT,
        )
        .await;

        if self.report(CropTarget::Client, outcome, &form_submitter::CLIENT) {
            self.load_clients().await;
        }
    }

    /// Show the outcome; on success also clear the form and its preview.
    /// Returns whether the list should be reloaded.
    fn report<R>(&self, target: CropTarget, outcome: Submission<R>, messages: &SubmitMessages) -> bool {
        match outcome {
            Submission::Invalid(text) | Submission::Failed(text) => {
                self.notifier.error(BannerSlot::Top, &text);
                false
            }
            Submission::Accepted(_) => {
                self.notifier.success(BannerSlot::Top, messages.success);
                self.page.reset_form(target.form());
                self.page.hide_preview(target);
                true
            }
        }
    }
}
