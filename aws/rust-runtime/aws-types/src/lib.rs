/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Cross-service types for the AWS SDK.

#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

pub mod os_shim_internal;
pub mod region;

use std::borrow::Cow;

/// The name of the service used to sign requests
///
/// Generally, user code should never interact with `SigningService` directly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningService(Cow<'static, str>);

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SigningService {
    pub const fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}
