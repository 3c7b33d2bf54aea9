/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::model::{ChannelResponse, ChannelsResponse, CreateApplicationRequest, EventsBatch, EventsRequest, GCMMessage};
use pretty_assertions::assert_eq;
use smithy_types::error::InvalidArgumentKind;

fn channel(id: &str) -> ChannelResponse {
    ChannelResponse::builder().id(id).enabled(true).build()
}

#[test]
fn channels_reject_duplicate_key() {
    let mut builder = ChannelsResponse::builder();
    builder
        .add_channels_entry("APNS", channel("apns"))
        .unwrap()
        .add_channels_entry("GCM", channel("gcm"))
        .unwrap();

    let err = builder
        .add_channels_entry("APNS", channel("replacement"))
        .expect_err("duplicate key");
    assert_eq!(err.kind(), &InvalidArgumentKind::DuplicateKey);
    assert_eq!(err.value(), "APNS");
    assert_eq!(err.shape(), "Channels");

    let response = builder.build();
    let channels = response.channels().expect("channels set");
    assert_eq!(channels.len(), 2);
    assert_eq!(channels["APNS"].id(), Some("apns"));
    assert_eq!(channels["GCM"].id(), Some("gcm"));
}

#[test]
fn add_entry_extends_existing_map() {
    let mut builder = CreateApplicationRequest::builder()
        .name("shop")
        .tags("team", "growth");
    builder.add_tags_entry("stage", "prod").unwrap();
    assert!(builder.add_tags_entry("team", "other").is_err());

    let request = builder.build();
    let tags = request.tags().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags["team"], "growth");
    assert_eq!(tags["stage"], "prod");
}

#[test]
fn fluent_insert_overwrites() {
    let request = CreateApplicationRequest::builder()
        .tags("team", "growth")
        .tags("team", "platform")
        .build();
    assert_eq!(request.tags().unwrap()["team"], "platform");
}

#[test]
fn nested_map_values() {
    let mut message = GCMMessage::builder();
    message
        .add_substitutions_entry("name", vec!["Ana".to_string()])
        .unwrap();
    assert!(message
        .add_substitutions_entry("name", vec!["Bo".to_string()])
        .is_err());
    assert_eq!(
        message.get_substitutions().as_ref().unwrap()["name"],
        vec!["Ana".to_string()]
    );

    let mut request = EventsRequest::builder();
    request
        .add_batch_item_entry("endpoint-1", EventsBatch::builder().build())
        .unwrap();
    assert_eq!(request.build().batch_item().map(|items| items.len()), Some(1));
}

#[test]
fn map_order_does_not_affect_equality() {
    let mut forward = ChannelsResponse::builder();
    forward.add_channels_entry("APNS", channel("a")).unwrap();
    forward.add_channels_entry("SMS", channel("s")).unwrap();

    let mut backward = ChannelsResponse::builder();
    backward.add_channels_entry("SMS", channel("s")).unwrap();
    backward.add_channels_entry("APNS", channel("a")).unwrap();

    let (forward, backward) = (forward.build(), backward.build());
    assert_eq!(forward, backward);
    assert_eq!(forward.to_string(), backward.to_string());
    assert_eq!(
        forward.to_string(),
        "{Channels: {APNS={Enabled: true, Id: a}, SMS={Enabled: true, Id: s}}}"
    );
}
