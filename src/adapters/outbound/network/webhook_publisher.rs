use crate::application::dto::MetricsRecord;
use crate::ports::outbound::MetricsPublisher;
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ATTEMPTS: u32 = 3;

/// WebhookMetricsPublisher adapter posting metrics as JSON
///
/// Transport failures and 5xx answers are retried with a short linear backoff.
/// A 4xx answer fails immediately.
pub struct WebhookMetricsPublisher {
    client: reqwest::Client,
    url: reqwest::Url,
    max_attempts: u32,
}

impl WebhookMetricsPublisher {
    /// # Errors
    /// Returns a validation error if the URL is not an absolute http(s) URL, or an
    /// error if the HTTP client cannot be built
    pub fn new(url: &str) -> Result<Self> {
        let url = Self::validate_url(url)?;
        let user_agent = format!("site-inspector/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    fn validate_url(url: &str) -> Result<reqwest::Url> {
        let parsed = reqwest::Url::parse(url.trim()).map_err(|e| AuditError::Validation {
            message: format!("Invalid webhook URL '{}': {}", url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AuditError::Validation {
                message: format!(
                    "Invalid webhook URL '{}': only http and https are supported",
                    url
                ),
            }
            .into());
        }
        Ok(parsed)
    }

    fn failure(&self, details: impl Into<String>) -> AuditError {
        AuditError::PublishFailed {
            endpoint: self.url.to_string(),
            details: details.into(),
        }
    }

    /// One POST; `Ok(Err(..))` marks a failure worth retrying
    async fn post_once(&self, record: &MetricsRecord) -> Result<std::result::Result<(), String>> {
        let response = match self.client.post(self.url.clone()).json(record).send().await {
            Ok(response) => response,
            Err(e) => return Ok(Err(e.to_string())),
        };

        let status = response.status();
        if status.is_success() {
            Ok(Ok(()))
        } else if status.is_server_error() {
            Ok(Err(format!("Server responded with {}", status)))
        } else {
            Err(self
                .failure(format!("Server responded with {}", status))
                .into())
        }
    }
}

#[async_trait]
impl MetricsPublisher for WebhookMetricsPublisher {
    async fn publish(&self, record: &MetricsRecord) -> Result<()> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_attempts {
            match self.post_once(record).await? {
                Ok(()) => return Ok(()),
                Err(details) => {
                    tracing::debug!(attempt, error = %details, "metrics publish attempt failed");
                    last_error = details;
                    if attempt < self.max_attempts {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(self.failure(last_error).into())
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}
