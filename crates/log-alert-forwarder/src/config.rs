// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_SERVICE_NAME: &str = "health_check";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Process-wide configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// ARN of the SNS topic alerts are published to
    pub sns_topic_arn: String,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
    /// Service tag prefixed to every log line
    pub service_name: String,
}

impl ForwarderConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_iter(env::vars())
    }

    /// Create configuration from an arbitrary set of key/value pairs
    pub fn from_env_iter<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let sns_topic_arn = vars
            .get("SNS_TOPIC_ARN")
            .cloned()
            .ok_or(ConfigError::Missing("SNS_TOPIC_ARN"))?;
        let log_level = vars
            .get("LOG_LEVEL")
            .map(|val| val.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let service_name = vars
            .get("SERVICE_NAME")
            .or_else(|| vars.get("POWERTOOLS_SERVICE_NAME"))
            .cloned()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        let config = Self {
            sns_topic_arn,
            log_level,
            service_name,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sns_topic_arn.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "SNS_TOPIC_ARN cannot be empty".to_string(),
            ));
        }
        if !self.sns_topic_arn.starts_with("arn:") {
            return Err(ConfigError::Invalid(format!(
                "SNS_TOPIC_ARN '{}' is not an ARN",
                self.sns_topic_arn
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        if self.service_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "SERVICE_NAME cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
