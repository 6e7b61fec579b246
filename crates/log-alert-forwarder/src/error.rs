// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while turning an inbound CloudWatch Logs event into log lines
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Event is not a CloudWatch Logs subscription payload: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("Failed to base64 decode awslogs.data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to gunzip awslogs.data: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("Failed to parse log batch document: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Log stream '{0}' has fewer than 3 '/' separated segments")]
    MalformedLogStream(String),
}

/// Errors raised by the notification channel
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("SNS rejected publish to {topic_arn}: {reason}")]
    Rejected { topic_arn: String, reason: String },

    #[error("Failed to publish alert: {0}")]
    Sink(String),
}

/// Errors raised while reading process configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failure of a single forwarder invocation
#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}
