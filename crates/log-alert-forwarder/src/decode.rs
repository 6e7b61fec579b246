// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use base64::Engine;
use flate2::read::MultiGzDecoder;
use tracing::info;

use crate::error::DecodeError;
use crate::event::{LogsData, LogsEventEnvelope, MessageType};

/// Log lines extracted from one subscription delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBatch {
    pub message_type: MessageType,
    pub log_group: String,
    pub log_stream: String,
    /// `logEvents[].message`, in delivery order
    pub messages: Vec<String>,
}

impl From<LogsData> for DecodedBatch {
    fn from(data: LogsData) -> Self {
        DecodedBatch {
            message_type: data.message_type,
            log_group: data.log_group,
            log_stream: data.log_stream,
            messages: data.log_events.into_iter().map(|e| e.message).collect(),
        }
    }
}

/// Validates the raw Lambda payload shape and decodes its `awslogs.data`.
pub fn decode_event(event: serde_json::Value) -> Result<DecodedBatch, DecodeError> {
    let envelope: LogsEventEnvelope =
        serde_json::from_value(event).map_err(DecodeError::Envelope)?;
    decode(&envelope)
}

/// base64 decode, gunzip and parse the batch carried by `envelope`.
///
/// ASCII whitespace inside the base64 text (line wrapping) is ignored and
/// every member of a multi-member gzip stream is read.
pub fn decode(envelope: &LogsEventEnvelope) -> Result<DecodedBatch, DecodeError> {
    let data: Vec<u8> = envelope
        .awslogs
        .data
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = base64::engine::general_purpose::STANDARD.decode(data)?;

    let mut decoder = MultiGzDecoder::new(&compressed[..]);
    let mut document = Vec::new();
    decoder
        .read_to_end(&mut document)
        .map_err(DecodeError::Gzip)?;

    let data: LogsData = serde_json::from_slice(&document).map_err(DecodeError::Json)?;
    let batch = DecodedBatch::from(data);

    info!(
        log_group = %batch.log_group,
        log_stream = %batch.log_stream,
        messages = ?batch.messages,
        "Decoded log batch {}/{}",
        batch.log_group,
        batch.log_stream
    );

    Ok(batch)
}
