//! Push notifications for matches
//!
//! POSTs `{ "address": ..., "account": "<account JSON>" }` to the configured
//! URL. Deliveries run in detached tasks and never block or fail the
//! generation loop:
//! - at most `max_in_flight` requests at once; extra matches skip the push
//! - failures are logged once, never retried

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::errors::{AppError, AppResult};
use crate::models::types::Account;
use crate::utils::constants::USER_AGENT as USER_AGENT_CONST;

/// Body sent to the push endpoint
#[derive(Debug, Serialize)]
pub struct PushPayload {
    pub address: String,
    /// The account serialized as a JSON string
    pub account: String,
}

impl PushPayload {
    pub fn from_account(account: &Account) -> AppResult<Self> {
        Ok(Self {
            address: account.address.base58.clone(),
            account: serde_json::to_string(account)?,
        })
    }
}

/// Fire-and-forget HTTP notifier
#[derive(Clone)]
pub struct PushNotifier {
    client: reqwest::Client,
    url: String,
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl PushNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration, max_in_flight: usize) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let capacity = max_in_flight.max(1);
        Ok(Self {
            client,
            url: url.into(),
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        })
    }

    /// Send one payload and wait for the response
    pub async fn deliver(&self, payload: &PushPayload) -> AppResult<()> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::push_failed(format!("endpoint answered {}", status)));
        }

        Ok(())
    }

    /// Queue a push in the background. Returns `None` when the payload could
    /// not be built or every delivery slot is busy.
    pub fn notify(&self, account: &Account) -> Option<JoinHandle<()>> {
        let payload = match PushPayload::from_account(account) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("❌ Push skipped for {}: {}", account.address.base58, e);
                return None;
            }
        };

        let permit = match self.permits.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!(
                    "⚠️ Push skipped for {}: too many deliveries in flight",
                    payload.address
                );
                return None;
            }
        };

        let notifier = self.clone();
        Some(tokio::spawn(async move {
            let _permit = permit;
            match notifier.deliver(&payload).await {
                Ok(()) => debug!("📨 Pushed {}", payload.address),
                Err(e) => warn!("❌ Push failed for {}: {}", payload.address, e),
            }
        }))
    }

    /// Deliveries currently running
    pub fn in_flight(&self) -> usize {
        self.capacity - self.permits.available_permits()
    }
}
