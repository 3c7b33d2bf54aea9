/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::model::{
    Action, AttributeType, CampaignStatus, ChannelType, DeliveryStatus, DimensionType, Duration,
    FilterType, Format, Frequency, Include, JobStatus, MessageType, Mode, Operator, RecencyType,
    SegmentType, SourceType, State, TemplateType, Type,
};
use proptest::prelude::*;
use smithy_types::error::{InvalidArgumentError, InvalidArgumentKind};
use std::convert::TryFrom;
use std::str::FromStr;

/// Parses `value` as `E` and renders it back.
fn reparse<E>(value: &str) -> Result<String, InvalidArgumentError>
where
    E: FromStr<Err = InvalidArgumentError> + ToString,
{
    value.parse::<E>().map(|parsed| parsed.to_string())
}

type Reparse = fn(&str) -> Result<String, InvalidArgumentError>;

macro_rules! entry {
    ($ty:ident) => {
        (stringify!($ty), $ty::values(), reparse::<$ty> as Reparse)
    };
}

fn all_enums() -> Vec<(&'static str, &'static [&'static str], Reparse)> {
    vec![
        entry!(Action),
        entry!(AttributeType),
        entry!(CampaignStatus),
        entry!(ChannelType),
        entry!(DeliveryStatus),
        entry!(DimensionType),
        entry!(Duration),
        entry!(FilterType),
        entry!(Format),
        entry!(Frequency),
        entry!(Include),
        entry!(JobStatus),
        entry!(MessageType),
        entry!(Mode),
        entry!(Operator),
        entry!(RecencyType),
        entry!(SegmentType),
        entry!(SourceType),
        entry!(State),
        entry!(TemplateType),
        entry!(Type),
    ]
}

#[test]
fn canonical_values_round_trip() {
    let enums = all_enums();
    assert_eq!(enums.len(), 21);
    for (name, values, reparse) in enums {
        assert!(!values.is_empty(), "{} has no values", name);
        for value in values {
            assert_eq!(reparse(value).as_deref(), Ok(*value), "{}", name);
        }
    }
}

#[test]
fn empty_value_is_rejected_everywhere() {
    for (name, _, reparse) in all_enums() {
        let err = reparse("").expect_err(name);
        assert_eq!(err.kind(), &InvalidArgumentKind::EmptyValue, "{}", name);
        assert_eq!(err.shape(), name);
    }
}

#[test]
fn campaign_status_lookup() {
    assert_eq!("PAUSED".parse::<CampaignStatus>().unwrap(), CampaignStatus::Paused);
    assert_eq!(CampaignStatus::Paused.as_str(), "PAUSED");
    assert_eq!(
        CampaignStatus::try_from("PENDING_NEXT_RUN").unwrap(),
        CampaignStatus::PendingNextRun
    );

    let err = "BOGUS".parse::<CampaignStatus>().expect_err("unknown value");
    assert_eq!(err.kind(), &InvalidArgumentKind::UnknownVariant);
    assert_eq!(err.shape(), "CampaignStatus");
    assert_eq!(err.value(), "BOGUS");
}

#[test]
fn lookup_is_exact() {
    assert!("paused".parse::<CampaignStatus>().is_err());
    assert!(" PAUSED".parse::<CampaignStatus>().is_err());
    assert_eq!("HR_24".parse::<Duration>().unwrap(), Duration::Hr24);
}

#[test]
fn empty_value_is_rejected() {
    let err = JobStatus::from_str("").expect_err("empty");
    assert_eq!(err.kind(), &InvalidArgumentKind::EmptyValue);
    assert_eq!(err.to_string(), "value cannot be empty for JobStatus");
}

#[test]
fn wire_strings_through_serde() {
    let status: DeliveryStatus = serde_json::from_str("\"OPT_OUT\"").unwrap();
    assert_eq!(status, DeliveryStatus::OptOut);
    assert_eq!(serde_json::to_string(&JobStatus::PendingJob).unwrap(), "\"PENDING_JOB\"");
    assert!(serde_json::from_str::<DeliveryStatus>("\"LOST\"").is_err());
}

proptest! {
    #[test]
    fn unknown_values_are_rejected(value in "\\PC*") {
        for (name, values, reparse) in all_enums() {
            if values.contains(&value.as_str()) {
                continue;
            }
            let err = reparse(&value).expect_err(name);
            let expected = if value.is_empty() {
                InvalidArgumentKind::EmptyValue
            } else {
                InvalidArgumentKind::UnknownVariant
            };
            prop_assert_eq!(err.kind(), &expected);
            prop_assert_eq!(err.shape(), name);
        }
    }
}
