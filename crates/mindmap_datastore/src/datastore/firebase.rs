use anyhow::Context;
use reqwest::{Client, Response};

use crate::{
    datastore::{is_valid_request_id, StatusStore},
    JobRecord, StatusUpdate, REQUESTS_PATH,
};

/// Status store backed by the Firebase Realtime Database REST API.
///
/// `PATCH` only touches the fields present in the body, which gives the
/// per-key partial update semantics job records rely on.
#[derive(Debug, Clone)]
pub struct FirebaseStatusStore {
    client: Client,
    database_url: String,
    auth_token: Option<String>,
}

impl FirebaseStatusStore {
    pub fn new(database_url: impl Into<String>, auth_token: Option<String>) -> Self {
        let database_url: String = database_url.into();

        Self {
            client: Client::new(),
            database_url: database_url.trim_end_matches('/').to_string(),
            auth_token,
        }
    }

    fn record_url(&self, request_id: &str) -> anyhow::Result<String> {
        if !is_valid_request_id(request_id) {
            anyhow::bail!("Invalid request id for status store key: {request_id:?}");
        }
        // the id is a single path segment, so `?`, `%` and spaces are escaped
        Ok(format!(
            "{}/{}/{}.json",
            self.database_url,
            REQUESTS_PATH,
            urlencoding::encode(request_id)
        ))
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.query(&[("auth", token)]),
            None => request,
        }
    }

    async fn ensure_success(resp: Response) -> anyhow::Result<Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        anyhow::bail!("Status store responded with {status}: {message}")
    }
}

impl StatusStore for FirebaseStatusStore {
    async fn update_status(&self, request_id: &str, update: &StatusUpdate) -> anyhow::Result<()> {
        let url = self.record_url(request_id)?;

        let resp = self
            .with_auth(self.client.patch(url))
            .json(update)
            .send()
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, request_id, "Failed to send status update")
            })
            .context("Failed to send status update")?;

        Self::ensure_success(resp)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, request_id, status = %update.status, "Status update rejected")
            })?;

        tracing::debug!(request_id, status = %update.status, "Status updated");
        Ok(())
    }

    async fn fetch_status(&self, request_id: &str) -> anyhow::Result<Option<JobRecord>> {
        let url = self.record_url(request_id)?;

        let resp = self
            .with_auth(self.client.get(url))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, request_id, "Failed to fetch status"))
            .context("Failed to fetch status")?;

        let record = Self::ensure_success(resp)
            .await?
            .json::<Option<JobRecord>>()
            .await
            .context("Failed to decode job record")?;

        Ok(record)
    }
}
