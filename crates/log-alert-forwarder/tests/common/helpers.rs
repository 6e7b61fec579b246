// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Builders for CloudWatch Logs subscription payloads

use base64::Engine;
use flate2::{write::GzEncoder, Compression};
use serde_json::{json, Value};
use std::io::Write;

pub const LOG_GROUP: &str = "/aws/ssm/AmazonCloudWatch-ManageAgent";

/// Stream name as written by Run Command for `task` on `instance_id`
pub fn run_command_stream(instance_id: &str, task: &str) -> String {
    format!("0b7e3c4a-5f6d-4e8b-9c1d-2a3b4c5d6e7f/{instance_id}/{task}/stdout")
}

/// `{logGroup, logStream, logEvents}` document with one event per message
pub fn logs_document(log_group: &str, log_stream: &str, messages: &[&str]) -> Value {
    let events: Vec<Value> = messages
        .iter()
        .enumerate()
        .map(|(i, m)| {
            json!({
                "id": format!("{i}"),
                "timestamp": 1_700_000_000_000_i64 + i as i64,
                "message": m,
            })
        })
        .collect();
    json!({
        "messageType": "DATA_MESSAGE",
        "owner": "123456789012",
        "logGroup": log_group,
        "logStream": log_stream,
        "subscriptionFilters": ["LambdaSubscriptionFilterJson"],
        "logEvents": events,
    })
}

/// base64(gzip(JSON)) of `document`
pub fn encode_data(document: &Value) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(document.to_string().as_bytes())
        .expect("failed to gzip document");
    let compressed = encoder.finish().expect("failed to finish gzip stream");
    base64::engine::general_purpose::STANDARD.encode(compressed)
}

/// Raw Lambda payload wrapping `document`
pub fn lambda_event(document: &Value) -> Value {
    json!({ "awslogs": { "data": encode_data(document) } })
}
