// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::DecodeError;

/// Origin of a log stream written by a Run Command invocation.
///
/// Run Command names its CloudWatch output streams
/// `{commandId}/{instanceId}/{pluginId}/{stdout|stderr}`, possibly under a
/// longer prefix, so fields are located from the end of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamIdentity {
    /// Plugin (task) that produced the output, e.g. `ControlCloudWatchAgentLinux`
    pub task_name: String,
    pub instance_id: String,
}

impl StreamIdentity {
    /// Extract the task name (second-to-last segment) and instance id
    /// (third-to-last segment) from `log_stream`.
    pub fn extract(log_stream: &str) -> Result<Self, DecodeError> {
        let mut segments = log_stream.rsplit('/');
        let _output = segments.next();
        match (segments.next(), segments.next()) {
            (Some(task_name), Some(instance_id)) => Ok(StreamIdentity {
                task_name: task_name.to_string(),
                instance_id: instance_id.to_string(),
            }),
            _ => Err(DecodeError::MalformedLogStream(log_stream.to_string())),
        }
    }
}
