//! Supabase (PostgREST) implementation of the client store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{ClientAgentConfig, SyncStatus};
use crate::error::{Result, VoxsyncError};
use crate::storage::traits::{ClientFilter, ClientStore};

/// Table holding one row per client/agent pair
const CLIENTS_TABLE: &str = "clients";

/// Request timeout for PostgREST calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PostgREST-backed client store using a service-role key.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStore {
    /// Create a store against a Supabase project URL.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxsyncError::Storage(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            service_key: service_key.into(),
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            CLIENTS_TABLE
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }

    /// PostgREST equality predicate for the filter, as a query pair.
    fn filter_param(filter: &ClientFilter) -> Option<(&'static str, String)> {
        match filter {
            ClientFilter::All => None,
            ClientFilter::AgentId(v) => Some(("ultravox_agent_id", format!("eq.{}", v))),
            ClientFilter::Name(v) => Some(("name", format!("eq.{}", v))),
            ClientFilter::ClientId(v) => Some(("id", format!("eq.{}", v))),
        }
    }
}

#[async_trait]
impl ClientStore for SupabaseStore {
    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<ClientAgentConfig>> {
        let mut request = self
            .client
            .get(self.table_url())
            .query(&[("select", "*")]);
        if let Some(param) = Self::filter_param(filter) {
            request = request.query(&[param]);
        }

        let response = self.authed(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxsyncError::Storage(format!(
                "Failed to list clients: {} {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn mark_synced(&self, client_id: &str, status: &SyncStatus) -> Result<()> {
        let request = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", client_id))])
            .header("Prefer", "return=minimal")
            .json(status);

        let response = self.authed(request).send().await?;
        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxsyncError::Storage(format!(
                "Failed to mark client {} synced: {} {}",
                client_id, http_status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_building() {
        let store = SupabaseStore::new("https://proj.supabase.co", "key").unwrap();
        assert_eq!(store.table_url(), "https://proj.supabase.co/rest/v1/clients");

        let store = SupabaseStore::new("https://proj.supabase.co/", "key").unwrap();
        assert_eq!(store.table_url(), "https://proj.supabase.co/rest/v1/clients");
    }

    #[test]
    fn test_filter_params() {
        assert_eq!(SupabaseStore::filter_param(&ClientFilter::All), None);
        assert_eq!(
            SupabaseStore::filter_param(&ClientFilter::AgentId("a-1".into())),
            Some(("ultravox_agent_id", "eq.a-1".to_string()))
        );
        assert_eq!(
            SupabaseStore::filter_param(&ClientFilter::Name("Humber Vet".into())),
            Some(("name", "eq.Humber Vet".to_string()))
        );
        assert_eq!(
            SupabaseStore::filter_param(&ClientFilter::ClientId("c-1".into())),
            Some(("id", "eq.c-1".to_string()))
        );
    }
}
