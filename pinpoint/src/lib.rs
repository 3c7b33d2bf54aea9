/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
//! <fullname>Amazon Pinpoint</fullname>
//!
//! Request and response types for the Amazon Pinpoint API.
//!
//! Every structure in [`model`], [`input`] and [`output`] is built through a builder:
//!
//! ```rust
//! use pinpoint::model::{CampaignResponse, CampaignsResponse};
//!
//! let page = CampaignsResponse::builder()
//!     .item(CampaignResponse::builder().id("c-1").build())
//!     .next_token("abc123")
//!     .build();
//! assert_eq!(page.item().map(|items| items.len()), Some(1));
//! assert_eq!(page.next_token(), Some("abc123"));
//! ```
//!
//! Sending requests is left to the transport layer; this crate only provides the payload types,
//! the service errors and the client configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod pagination;

pub use config::Config;
pub use error::Error;
pub use smithy_types::Blob;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
