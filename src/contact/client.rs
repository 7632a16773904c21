// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the contact endpoint.

use super::form::ContactSubmission;
use crate::app::config::ContactConfig;
use crate::error::SubmitError;
use std::time::Duration;

/// Posts contact submissions as JSON. Any 2xx answer counts as delivered.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("EssenceClinic/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SubmitError::Client(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ContactConfig) -> Result<Self, SubmitError> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one submission. No retries.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_endpoint() {
        let config = ContactConfig {
            endpoint: "http://127.0.0.1:9/api/contact".into(),
            timeout_secs: Some(2),
        };
        let client = ContactClient::from_config(&config).expect("client builds");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/api/contact");
    }
}
