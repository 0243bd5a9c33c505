//! Opayo (Elavon) Pi REST API client.
//!
//! Credentials are baked into the client's default headers at construction.
//! Gateway-level failures (any non-2xx status) come back as `Ok(None)`;
//! only transport failures surface as errors.

use crate::config::{GatewayConfig, RetryPolicy};
use crate::domain::payment::{AuthPayload, ThreeDsChallengeResult};
use crate::domain::ports::PaymentGateway;
use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MerchantSessionKeyRequest<'a> {
    vendor_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MerchantSessionKeyResponse {
    merchant_session_key: Option<String>,
}

#[derive(Clone)]
pub struct OpayoClient {
    client: Client,
    base_url: String,
    vendor: String,
    retry: RetryPolicy,
}

impl OpayoClient {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(&config)?)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            vendor: config.vendor,
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Requests a merchant session key for the configured vendor.
    pub async fn merchant_session_key(&self) -> Result<Option<String>> {
        let response = self
            .client
            .post(self.url("merchant-session-keys"))
            .json(&MerchantSessionKeyRequest {
                vendor_name: &self.vendor,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Merchant session key request rejected");
            return Ok(None);
        }

        let body = response.text().await?;
        let key = serde_json::from_str::<MerchantSessionKeyResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.merchant_session_key);

        if key.is_none() {
            tracing::warn!("Merchant session key missing from gateway response");
        }

        Ok(key)
    }

    /// Fetches a transaction, retrying any non-success response.
    ///
    /// Makes at most `retry.max_attempts` requests with `retry.delay` between
    /// them and gives up with `None`. Client errors are retried like server
    /// errors.
    pub async fn transaction(&self, id: &str) -> Result<Option<Value>> {
        let url = self.url(&format!("transactions/{id}"));
        let mut attempt = 1;

        loop {
            let response = self.client.get(&url).send().await?;
            let status = response.status();

            if status.is_success() {
                return decode_json(response).await;
            }

            if attempt >= self.retry.max_attempts {
                tracing::warn!(
                    transaction_id = id,
                    attempts = attempt,
                    status = %status,
                    "Transaction lookup failed"
                );
                return Ok(None);
            }

            tracing::debug!(
                transaction_id = id,
                attempt,
                status = %status,
                "Transaction lookup failed, retrying"
            );
            tokio::time::sleep(self.retry.delay).await;
            attempt += 1;
        }
    }

    /// Submits an authorization built by
    /// [`build_auth_payload`](crate::application::auth_payload::build_auth_payload).
    pub async fn authorize(&self, payload: &AuthPayload) -> Result<Option<Value>> {
        let response = self
            .client
            .post(self.url("transactions"))
            .json(payload)
            .send()
            .await?;

        self.accepted(response, "Authorization").await
    }

    pub async fn complete_challenge(
        &self,
        transaction_id: &str,
        challenge: &ThreeDsChallengeResult,
    ) -> Result<Option<Value>> {
        let response = self
            .client
            .post(self.url(&format!("transactions/{transaction_id}/3d-secure-challenge")))
            .json(challenge)
            .send()
            .await?;

        self.accepted(response, "3-D Secure challenge").await
    }

    async fn accepted(&self, response: Response, operation: &str) -> Result<Option<Value>> {
        let status = response.status();
        if status.is_success() {
            return decode_json(response).await;
        }

        let body = response.text().await?;
        tracing::warn!(status = %status, body = %body, "{operation} rejected by gateway");
        Ok(None)
    }
}

async fn decode_json(response: Response) -> Result<Option<Value>> {
    let body = response.text().await?;
    match serde_json::from_str(&body) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(error = %e, "Gateway returned a non-JSON body");
            Ok(None)
        }
    }
}

fn default_headers(config: &GatewayConfig) -> Result<HeaderMap> {
    let credentials = STANDARD.encode(format!(
        "{}:{}",
        config.key,
        config.password.expose_secret()
    ));
    let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| Error::Config(format!("invalid gateway credentials: {e}")))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    Ok(headers)
}

#[async_trait]
impl PaymentGateway for OpayoClient {
    async fn merchant_session_key(&self) -> Result<Option<String>> {
        OpayoClient::merchant_session_key(self).await
    }

    async fn transaction(&self, id: &str) -> Result<Option<Value>> {
        OpayoClient::transaction(self, id).await
    }

    async fn authorize(&self, payload: &AuthPayload) -> Result<Option<Value>> {
        OpayoClient::authorize(self, payload).await
    }

    async fn complete_challenge(
        &self,
        transaction_id: &str,
        challenge: &ThreeDsChallengeResult,
    ) -> Result<Option<Value>> {
        OpayoClient::complete_challenge(self, transaction_id, challenge).await
    }
}
