// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock notification channels

use async_trait::async_trait;
use log_alert_forwarder::{AlertMessage, PublishError, Publisher};
use std::sync::{Arc, Mutex};

/// Records every alert it is asked to publish.
/// Clones share the same record so a test can keep a handle after moving one
/// into a `Forwarder`.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    sent: Arc<Mutex<Vec<AlertMessage>>>,
}

impl RecordingPublisher {
    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, alert: &AlertMessage) -> Result<(), PublishError> {
        self.sent.lock().expect("lock poisoned").push(alert.clone());
        Ok(())
    }
}

/// Rejects every publish, as SNS does for a missing `sns:Publish` grant
pub struct RejectingPublisher;

#[async_trait]
impl Publisher for RejectingPublisher {
    async fn publish(&self, _alert: &AlertMessage) -> Result<(), PublishError> {
        Err(PublishError::Rejected {
            topic_arn: "arn:aws:sns:us-east-1:123456789012:cloudwatch_agent_alart".to_string(),
            reason: "AuthorizationError: not authorized to perform SNS:Publish".to_string(),
        })
    }
}
