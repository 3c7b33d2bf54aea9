/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types for smithy-rs generated service crates.

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod blob;
pub mod error;
pub mod retry;
pub mod shape;

pub use crate::blob::Blob;
pub use crate::error::Error;
