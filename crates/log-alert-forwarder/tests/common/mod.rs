// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for log alert forwarder integration tests

pub mod helpers;
pub mod mocks;
