// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Forwards CloudWatch agent failures reported through CloudWatch Logs to SNS.
//!
//! A subscription filter delivers batches of log lines written by the
//! `AmazonCloudWatch-ManageAgent` Run Command document. Each batch is decoded,
//! attributed to the instance and task that produced it, and every line from a
//! monitored task is republished as an alert.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod alert;
pub mod config;
pub mod decode;
pub mod error;
pub mod event;
pub mod filter;
pub mod forwarder;
pub mod identity;
pub mod logger;
pub mod publisher;

pub use alert::{AlertMessage, ALERT_SUBJECT};
pub use config::ForwarderConfig;
pub use decode::{decode, decode_event, DecodedBatch};
pub use error::{ConfigError, DecodeError, ForwarderError, PublishError};
pub use event::{AwsLogs, LogEvent, LogsData, LogsEventEnvelope, MessageType};
pub use filter::{should_forward, MONITORED_TASKS};
pub use forwarder::{ForwardOutcome, Forwarder};
pub use identity::StreamIdentity;
pub use publisher::{Publisher, SnsPublisher};
