// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use tracing::{debug, error, info};

use crate::alert::AlertMessage;
use crate::decode::{decode, decode_event, DecodedBatch};
use crate::error::ForwarderError;
use crate::event::{LogsEventEnvelope, MessageType};
use crate::filter::should_forward;
use crate::identity::StreamIdentity;
use crate::publisher::Publisher;

/// What a successful invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// One alert was published per log line
    Published { count: usize },
    /// The stream was written by a task outside the allow-list
    Skipped { task_name: String },
    /// Subscription health check from CloudWatch Logs, nothing to forward
    ControlMessage,
}

/// Turns one CloudWatch Logs delivery into zero or more alerts.
///
/// Holds no per-invocation state, so a single instance serves every event
/// the process receives.
pub struct Forwarder<P> {
    publisher: P,
}

impl<P: Publisher> Forwarder<P> {
    pub fn new(publisher: P) -> Self {
        Forwarder { publisher }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Entry point for a raw Lambda payload. Failures are logged, then returned
    /// so the invocation is reported as failed.
    pub async fn handle(&self, event: serde_json::Value) -> Result<ForwardOutcome, ForwarderError> {
        debug!(%event, "Received event");
        let result = match decode_event(event) {
            Ok(batch) => self.forward(batch).await,
            Err(e) => Err(e.into()),
        };
        log_failure(result)
    }

    /// Same as [`Forwarder::handle`] for an already typed envelope.
    pub async fn handle_envelope(
        &self,
        envelope: &LogsEventEnvelope,
    ) -> Result<ForwardOutcome, ForwarderError> {
        let result = match decode(envelope) {
            Ok(batch) => self.forward(batch).await,
            Err(e) => Err(e.into()),
        };
        log_failure(result)
    }

    /// Publishes an alert per message of `batch`, in order, when the batch
    /// was produced by a monitored task. Stops at the first rejected publish.
    pub async fn forward(&self, batch: DecodedBatch) -> Result<ForwardOutcome, ForwarderError> {
        if batch.message_type == MessageType::ControlMessage {
            info!("Ignoring CloudWatch Logs control message");
            return Ok(ForwardOutcome::ControlMessage);
        }

        let identity = StreamIdentity::extract(&batch.log_stream)?;
        if !should_forward(&identity.task_name) {
            debug!(
                task_name = %identity.task_name,
                "Skipping log stream {} written by unmonitored task", batch.log_stream
            );
            return Ok(ForwardOutcome::Skipped {
                task_name: identity.task_name,
            });
        }

        for message in &batch.messages {
            let alert = AlertMessage::format(
                message,
                &batch.log_group,
                &batch.log_stream,
                &identity.instance_id,
            );
            self.publisher.publish(&alert).await?;
        }

        let count = batch.messages.len();
        info!(
            instance_id = %identity.instance_id,
            task_name = %identity.task_name,
            "Published {count} alerts"
        );
        Ok(ForwardOutcome::Published { count })
    }
}

fn log_failure(
    result: Result<ForwardOutcome, ForwarderError>,
) -> Result<ForwardOutcome, ForwarderError> {
    if let Err(e) = &result {
        error!(error = ?e, "Failed to forward log batch: {e}");
    }
    result
}
