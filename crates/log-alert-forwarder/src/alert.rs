// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub const ALERT_SUBJECT: &str = "CloudWatch Agent Error";

/// Notification built from a single log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

impl AlertMessage {
    /// The log line is embedded verbatim; the body is read by people, not parsed.
    pub fn format(message: &str, log_group: &str, log_stream: &str, instance_id: &str) -> Self {
        AlertMessage {
            subject: ALERT_SUBJECT.to_string(),
            body: format!(
                "CloudWatch Agent Error.\n\
                 Instance ID: {instance_id}\n\
                 Log stream: {log_group}/{log_stream}\n\
                 Event Message:\n\
                 {message}\n"
            ),
        }
    }
}
