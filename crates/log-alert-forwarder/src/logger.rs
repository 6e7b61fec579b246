// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log line formatter tagging every record with the service name.
//!
//! ```text
//! health_check | INFO | forward{request_id=8c1f..}: Published 3 alerts instance_id=i-0abc
//! ```
//!
//! CloudWatch adds its own timestamp to each line, so none is written here.

use std::fmt;
use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::{
    format::{self, FormatEvent, FormatFields},
    FmtContext, FormattedFields,
};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Prefixes each line with `{service} | {LEVEL} | ` followed by the active
/// spans (root first) and the event fields.
#[derive(Debug, Clone)]
pub struct Formatter {
    service: String,
}

impl Formatter {
    pub fn new(service: impl Into<String>) -> Self {
        Formatter {
            service: service.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(&mut writer, "{} | {} | ", self.service, metadata.level())?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;

                let ext = span.extensions();
                if let Some(fields) = ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Builds the filter for `log_level`, silencing the AWS SDK and HTTP stack.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, ConfigError> {
    let directives = format!(
        "aws_smithy_runtime=off,aws_smithy_runtime_api=off,aws_config=off,hyper=off,hyper_util=off,h2=off,rustls=off,{log_level}"
    );
    EnvFilter::try_new(directives)
        .map_err(|e| ConfigError::Invalid(format!("could not parse log level: {e}")))
}
