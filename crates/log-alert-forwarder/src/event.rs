// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Wire types for CloudWatch Logs subscription deliveries.
//!
//! The Lambda payload is an envelope whose `awslogs.data` field holds a
//! base64 encoded, gzip compressed JSON [`LogsData`] document.

use serde::{Deserialize, Serialize};

/// Inbound Lambda event: `{"awslogs": {"data": "<base64(gzip(JSON))>"}}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogsEventEnvelope {
    pub awslogs: AwsLogs,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AwsLogs {
    pub data: String,
}

/// Kind of subscription delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    #[default]
    DataMessage,
    /// Sent once when a subscription filter is created to check reachability
    ControlMessage,
}

/// Decompressed subscription document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsData {
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub log_group: String,
    pub log_stream: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscription_filters: Vec<String>,
    pub log_events: Vec<LogEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub message: String,
}
