//! HTTP collaborator for the `/users` and `/tasks` collections.

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::RecordId, domain::ResourceKind, protocol::Resource};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::ClientError};

#[async_trait]
pub trait CrudApi: Send + Sync {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError>;
    async fn create<R: Resource>(&self, record: &R) -> Result<(), ClientError>;
    async fn update<R: Resource>(&self, id: &RecordId, record: &R) -> Result<(), ClientError>;
    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: Url,
}

impl RestClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(base_url, Client::new())
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(ClientError::HttpClient)?;
        Self::with_http_client(&settings.api_base_url, http)
    }

    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.trim()).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn collection_url(&self, kind: ResourceKind) -> Url {
        self.url_with_segments(&[kind.path()])
    }

    pub fn record_url(&self, kind: ResourceKind, id: &RecordId) -> Url {
        self.url_with_segments(&[kind.path(), &id.to_string()])
    }

    fn url_with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl CrudApi for RestClient {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        let url = self.collection_url(R::KIND);
        debug!(%url, "GET collection");
        let records = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<R>>()
            .await?;
        Ok(records)
    }

    async fn create<R: Resource>(&self, record: &R) -> Result<(), ClientError> {
        let url = self.collection_url(R::KIND);
        debug!(%url, "POST record");
        self.http
            .post(url)
            .json(&record.body())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update<R: Resource>(&self, id: &RecordId, record: &R) -> Result<(), ClientError> {
        let url = self.record_url(R::KIND, id);
        debug!(%url, "PUT record");
        self.http
            .put(url)
            .json(&record.body())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> Result<(), ClientError> {
        let url = self.record_url(kind, id);
        debug!(%url, "DELETE record");
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
