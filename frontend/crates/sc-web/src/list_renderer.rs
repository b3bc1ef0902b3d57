use crate::page::{Card, Container, ListContent, Page};

use std::future::Future;

use log::error;
use sc_client::ApiResult;

/// Everything needed to show one collection in one container
pub struct ListSpec<T> {
    pub container: Container,
    /// Used in log lines, e.g. "projects"
    pub label: &'static str,
    pub empty: &'static str,
    pub error: &'static str,
    pub render: fn(&T) -> Card,
}

/// Await `fetch` and render its outcome into `spec.container`.
///
/// Always leaves the container in one of three states: the items in server
/// order, the empty placeholder, or the error placeholder. Failures are logged,
/// never returned.
pub async fn render_list<T, F>(page: &dyn Page, spec: &ListSpec<T>, fetch: F)
where
    F: Future<Output = ApiResult<Vec<T>>>,
{
    let content = match fetch.await {
        Ok(items) if items.is_empty() => ListContent::Empty(spec.empty.to_string()),
        Ok(items) => ListContent::Cards(items.iter().map(spec.render).collect()),
        Err(err) => {
            error!("Error loading {}: {err}", spec.label);
            ListContent::Error(spec.error.to_string())
        }
    };

    page.render_list(spec.container, content);
}
