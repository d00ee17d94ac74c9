use async_trait::async_trait;
use site_inspector::prelude::*;
use site_inspector::shared::error::AuditError;
use std::sync::{Arc, Mutex};

/// Mock MetricsPublisher for testing that records every published record
#[derive(Default, Clone)]
pub struct MockMetricsPublisher {
    pub published: Arc<Mutex<Vec<MetricsRecord>>>,
    fail: bool,
}

impl MockMetricsPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose endpoint always answers 500
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<MetricsRecord> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsPublisher for MockMetricsPublisher {
    async fn publish(&self, record: &MetricsRecord) -> Result<()> {
        if self.fail {
            return Err(AuditError::PublishFailed {
                endpoint: self.endpoint().to_string(),
                details: "Server responded with 500 Internal Server Error".to_string(),
            }
            .into());
        }
        self.published.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn endpoint(&self) -> &str {
        "https://hooks.example.com/audit"
    }
}
