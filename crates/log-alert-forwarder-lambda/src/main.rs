// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info, info_span, Instrument};

use log_alert_forwarder::{
    config::{ForwarderConfig, DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME},
    logger::{env_filter, Formatter},
    Forwarder, SnsPublisher,
};

#[tokio::main]
pub async fn main() -> Result<(), Error> {
    let config = ForwarderConfig::from_env();

    let (log_level, service_name) = match &config {
        Ok(c) => (c.log_level.as_str(), c.service_name.as_str()),
        Err(_) => (DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME),
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_ansi(false)
        .with_env_filter(env_filter(log_level)?)
        .event_format(Formatter::new(service_name))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Logging subsystem enabled");

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Error reading log alert forwarder configuration: {e}");
            return Err(e.into());
        }
    };

    // One SNS client for the lifetime of the execution environment
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let forwarder = Arc::new(Forwarder::new(SnsPublisher::from_sdk_config(
        &sdk_config,
        config.sns_topic_arn.clone(),
    )));

    info!(
        topic_arn = %config.sns_topic_arn,
        "Log alert forwarder ready"
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let forwarder = Arc::clone(&forwarder);
        async move { handle(&forwarder, event).await }
    }))
    .await
}

async fn handle(
    forwarder: &Forwarder<SnsPublisher>,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!(
        "forward",
        request_id = %context.request_id,
        function_arn = %context.invoked_function_arn
    );
    forwarder.handle(payload).instrument(span).await?;
    Ok(())
}
