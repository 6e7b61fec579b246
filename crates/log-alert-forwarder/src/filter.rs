// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Run Command plugins of the `AmazonCloudWatch-ManageAgent` document whose
/// output is forwarded as alerts.
pub const MONITORED_TASKS: [&str; 2] = [
    "ControlCloudWatchAgentLinux",
    "ControlCloudWatchAgentWindows",
];

/// Exact, case-sensitive allow-list match.
pub fn should_forward(task_name: &str) -> bool {
    MONITORED_TASKS.contains(&task_name)
}
