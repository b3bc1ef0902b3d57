use crate::{
    ApiError, ApiResult, CLIENTS_PATH, CONTACTS_PATH, HEALTH_PATH, NEWSLETTER_LIST_PATH,
    NEWSLETTER_SUBSCRIBE_PATH, PROJECTS_PATH,
};

use sc_config::ApiConfig;
use sc_core::{Client, Contact, NewsletterSubscription, Project};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the showcase REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Origin plus API prefix (e.g., "http://localhost:8080/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Send a request, map non-2xx to `ApiError::Status`, decode the body
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    // =========================================================================
    // Connectivity
    // =========================================================================

    /// Probe the backend. Any 2xx is healthy; the body is ignored.
    pub async fn health(&self) -> ApiResult<()> {
        let response = self.request(Method::GET, HEALTH_PATH).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), body))
        }
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects, in server order
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.execute(self.request(Method::GET, PROJECTS_PATH)).await
    }

    pub async fn create_project(&self, project: &Project) -> ApiResult<Project> {
        self.post(PROJECTS_PATH, project).await
    }

    // =========================================================================
    // Client Operations
    // =========================================================================

    pub async fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.execute(self.request(Method::GET, CLIENTS_PATH)).await
    }

    pub async fn create_client(&self, client: &Client) -> ApiResult<Client> {
        self.post(CLIENTS_PATH, client).await
    }

    // =========================================================================
    // Contact Operations
    // =========================================================================

    pub async fn list_contacts(&self) -> ApiResult<Vec<Contact>> {
        self.execute(self.request(Method::GET, CONTACTS_PATH)).await
    }

    pub async fn create_contact(&self, contact: &Contact) -> ApiResult<Contact> {
        self.post(CONTACTS_PATH, contact).await
    }

    // =========================================================================
    // Newsletter Operations
    // =========================================================================

    pub async fn list_subscriptions(&self) -> ApiResult<Vec<NewsletterSubscription>> {
        self.execute(self.request(Method::GET, NEWSLETTER_LIST_PATH))
            .await
    }

    /// Subscribe an email address.
    /// The backend acknowledges with a free-form JSON object, returned as-is.
    pub async fn subscribe(&self, subscription: &NewsletterSubscription) -> ApiResult<Value> {
        self.post(NEWSLETTER_SUBSCRIBE_PATH, subscription).await
    }
}
