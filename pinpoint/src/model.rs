/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures and enumerations shared by the operation inputs and outputs.
//!
//! Types are grouped by the part of the API they belong to, but are all exported from this module.

mod applications;
mod campaigns;
mod channels;
mod endpoints;
mod events;
mod jobs;
mod journeys;
mod messaging;
mod segments;
mod tagging;
mod templates;

pub use self::applications::*;
pub use self::campaigns::*;
pub use self::channels::*;
pub use self::endpoints::*;
pub use self::events::*;
pub use self::jobs::*;
pub use self::journeys::*;
pub use self::messaging::*;
pub use self::segments::*;
pub use self::tagging::*;
pub use self::templates::*;
