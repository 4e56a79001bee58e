use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vote confirmation sent by the demo.
pub const DEMO_MESSAGE: &str = "Harambee DAO Demo: Thank you for experiencing our prototype. Your vote to approve the 'Nakuru Corn Farm' project has been recorded. This is how we empower communities. Reply YES to approve, NO to reject.";

/// Simulated gateway settings.
///
/// Example YAML:
/// ```yaml
/// sms:
///   delay: "1s"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SmsConfig {
    /// Simulated network latency, humantime format ("1s", "250ms")
    pub delay: String,

    /// Message body that would be delivered
    pub message: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            delay: "1s".to_string(),
            message: DEMO_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReceipt {
    pub sid: String,
}

/// Stand-in for a third-party messaging gateway. Logs the message it would
/// send and waits out a fixed delay; nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SmsGateway {
    delay: Duration,
    message: String,
}

impl SmsGateway {
    pub fn new(delay: Duration, message: impl Into<String>) -> Self {
        Self {
            delay,
            message: message.into(),
        }
    }

    pub fn from_config(config: &SmsConfig) -> Result<Self> {
        let delay = humantime::parse_duration(config.delay.trim())
            .with_context(|| format!("sms.delay: invalid duration '{}'", config.delay))?;
        if config.message.trim().is_empty() {
            anyhow::bail!("sms.message: must not be empty");
        }
        Ok(Self::new(delay, config.message.clone()))
    }

    pub async fn send(&self, phone_number: &str) -> Result<SmsReceipt> {
        tracing::info!(
            to = %phone_number,
            body = %self.message,
            "SMS demo - would send message"
        );

        tokio::time::sleep(self.delay).await;

        let sid = format!("demo_sms_{}", Utc::now().timestamp_millis());
        tracing::debug!(sid = %sid, "SMS demo - simulated delivery complete");
        Ok(SmsReceipt { sid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let gateway = SmsGateway::from_config(&SmsConfig::default()).unwrap();
        assert_eq!(gateway.delay, Duration::from_secs(1));
        assert_eq!(gateway.message, DEMO_MESSAGE);
    }

    #[test]
    fn test_config_parse_millis() {
        let config: SmsConfig = serde_saphyr::from_str("delay: \"250ms\"\n").unwrap();
        let gateway = SmsGateway::from_config(&config).unwrap();
        assert_eq!(gateway.delay, Duration::from_millis(250));
        assert_eq!(gateway.message, DEMO_MESSAGE);
    }

    #[test]
    fn test_invalid_delay() {
        let config = SmsConfig {
            delay: "soon".to_string(),
            ..SmsConfig::default()
        };
        let err = SmsGateway::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("sms.delay"));
    }

    #[test]
    fn test_blank_message_rejected() {
        let config = SmsConfig {
            message: "  ".to_string(),
            ..SmsConfig::default()
        };
        assert!(SmsGateway::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_send_returns_demo_sid() {
        let gateway = SmsGateway::new(Duration::ZERO, "hello");
        let before = Utc::now().timestamp_millis();
        let receipt = gateway.send("+254700000000").await.unwrap();

        let millis: i64 = receipt
            .sid
            .strip_prefix("demo_sms_")
            .expect("sid prefix")
            .parse()
            .unwrap();
        assert!(millis >= before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_waits_for_delay() {
        let gateway = SmsGateway::new(Duration::from_secs(1), "hello");
        let start = tokio::time::Instant::now();
        gateway.send("+254700000000").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
