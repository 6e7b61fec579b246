// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::config::retry::RetryConfig;
use aws_sdk_sns::error::DisplayErrorContext;
use tracing::debug;

use crate::alert::AlertMessage;
use crate::error::PublishError;

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Deliver one alert to the notification channel.
    /// Failures are returned as-is; implementations must not retry.
    async fn publish(&self, alert: &AlertMessage) -> Result<(), PublishError>;
}

/// Publishes alerts to a single SNS topic.
///
/// Holds an SDK client that is meant to be built once per process and shared
/// by every invocation.
#[derive(Clone, Debug)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        SnsPublisher {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Builds the SNS client from the shared AWS config with SDK level retries
    /// turned off, leaving retry policy to the Lambda event source.
    pub fn from_sdk_config(sdk_config: &SdkConfig, topic_arn: impl Into<String>) -> Self {
        let sns_config = aws_sdk_sns::config::Builder::from(sdk_config)
            .retry_config(RetryConfig::disabled())
            .build();
        Self::new(aws_sdk_sns::Client::from_conf(sns_config), topic_arn)
    }

    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, alert: &AlertMessage) -> Result<(), PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&alert.subject)
            .message(&alert.body)
            .send()
            .await
            .map_err(|e| PublishError::Rejected {
                topic_arn: self.topic_arn.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(
            message_id = output.message_id().unwrap_or_default(),
            "Published alert to {}", self.topic_arn
        );
        Ok(())
    }
}
