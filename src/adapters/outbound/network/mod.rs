/// Network adapters for external collectors
mod webhook_publisher;

pub use webhook_publisher::WebhookMetricsPublisher;
