//! Lead sinks: where quote submissions are delivered
//!
//! The quote state machine only ever sees the [`LeadSink`] capability. The
//! runner picks an implementation from [`SinkSettings`] via
//! [`ConfiguredSink::from_settings`].

use std::time::Duration;

use coverplan_core::prelude::*;
use coverplan_core::QuotePayload;
use url::Url;

use crate::config::{SinkKind, SinkSettings};

/// Receives quote submissions
#[trait_variant::make(LeadSink: Send)]
pub trait LocalLeadSink {
    /// Deliver one payload. `Ok(())` is the acknowledgement.
    async fn submit(&self, payload: &QuotePayload) -> Result<()>;
}

/// Stand-in sink: waits a fixed delay and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl LeadSink for SimulatedSink {
    async fn submit(&self, payload: &QuotePayload) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        info!(
            total = payload.calculation.total_protection_needed,
            "Simulated lead delivery for {}",
            payload.form.name.trim()
        );
        debug!("Lead payload: {}", serde_json::to_string(payload)?);
        Ok(())
    }
}

/// POSTs the JSON payload to a webhook URL
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl WebhookSink {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::sink(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl LeadSink for WebhookSink {
    async fn submit(&self, payload: &QuotePayload) -> Result<()> {
        debug!("POST lead to {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::SinkTimeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    Error::sink(format!("request to {} failed: {}", self.url, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Lead endpoint {} answered HTTP {}", self.url, status);
            return Err(Error::SinkRejected {
                status: status.as_u16(),
            });
        }

        info!("Lead delivered to {} (HTTP {})", self.url, status);
        Ok(())
    }
}

/// The sink selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
    Simulated(SimulatedSink),
    Webhook(WebhookSink),
}

impl ConfiguredSink {
    /// Build the sink named by `settings.kind`.
    ///
    /// Fails with `ConfigInvalid` when a webhook sink has no usable URL.
    pub fn from_settings(settings: &SinkSettings) -> Result<Self> {
        match settings.kind {
            SinkKind::Simulated => Ok(Self::Simulated(SimulatedSink::new(
                Duration::from_millis(settings.simulated_delay_ms),
            ))),
            SinkKind::Webhook => {
                let url = settings.parsed_webhook_url()?;
                let timeout = Duration::from_millis(settings.timeout_ms);
                Ok(Self::Webhook(WebhookSink::new(url, timeout)?))
            }
        }
    }

    /// Like [`from_settings`](Self::from_settings) but falls back to the
    /// simulated sink on invalid configuration.
    pub fn from_settings_or_simulated(settings: &SinkSettings) -> Self {
        Self::from_settings(settings).unwrap_or_else(|e| {
            warn!("{}; falling back to the simulated lead sink", e);
            Self::Simulated(SimulatedSink::new(Duration::from_millis(
                settings.simulated_delay_ms,
            )))
        })
    }

    pub fn kind(&self) -> SinkKind {
        match self {
            Self::Simulated(_) => SinkKind::Simulated,
            Self::Webhook(_) => SinkKind::Webhook,
        }
    }

    /// Where leads end up, for the startup log
    pub fn describe(&self) -> String {
        match self {
            Self::Simulated(sink) => format!("simulated ({}ms delay)", sink.delay.as_millis()),
            Self::Webhook(sink) => format!("webhook {}", sink.url()),
        }
    }
}

impl LeadSink for ConfiguredSink {
    async fn submit(&self, payload: &QuotePayload) -> Result<()> {
        match self {
            Self::Simulated(sink) => LeadSink::submit(sink, payload).await,
            Self::Webhook(sink) => LeadSink::submit(sink, payload).await,
        }
    }
}
