/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::model::{
    CampaignStatus, CampaignsResponse, CreateApplicationRequest, EmailMessage, RawEmail, Template,
};
use pinpoint::Blob;
use pretty_assertions::assert_eq;

#[test]
fn deserialize_campaigns_page() {
    let body = r#"{
        "Item": [
            {
                "ApplicationId": "app-1",
                "Id": "c-1",
                "Name": "spring sale",
                "State": { "CampaignStatus": "PAUSED" },
                "Version": 3,
                "tags": { "team": "growth" }
            },
            { "ApplicationId": "app-1", "Id": "c-2" }
        ],
        "NextToken": "abc123"
    }"#;
    let page: CampaignsResponse = serde_json::from_str(body).expect("valid response");
    let items = page.item().expect("items present");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name(), Some("spring sale"));
    assert_eq!(items[0].version(), Some(3));
    assert_eq!(
        items[0].state().and_then(|state| state.campaign_status()),
        Some(&CampaignStatus::Paused)
    );
    assert_eq!(items[0].tags().map(|tags| tags["team"].as_str()), Some("growth"));
    assert_eq!(items[1].state(), None);
    assert_eq!(page.next_token(), Some("abc123"));
}

#[test]
fn unknown_enum_value_fails_deserialization() {
    let body = r#"{ "Item": [ { "State": { "CampaignStatus": "RUNNING" } } ] }"#;
    let err = serde_json::from_str::<CampaignsResponse>(body).expect_err("unknown status");
    assert!(err.to_string().contains("RUNNING"), "{}", err);
}

#[test]
fn absent_members_are_not_serialized() {
    let template = Template::builder().name("welcome").build();
    assert_eq!(serde_json::to_string(&template).unwrap(), r#"{"Name":"welcome"}"#);

    let request = CreateApplicationRequest::builder()
        .name("shop")
        .tags("team", "growth")
        .build();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "Name": "shop", "tags": { "team": "growth" } })
    );
}

#[test]
fn blob_members_use_base64() {
    let message = EmailMessage::builder()
        .from_address("noreply@example.com")
        .raw_email(RawEmail::builder().data(Blob::new("Subject: hi")).build())
        .build();
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["RawEmail"]["Data"], "U3ViamVjdDogaGk=");

    let parsed: EmailMessage = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, message);
    assert_eq!(
        parsed.raw_email().and_then(|raw| raw.data()).map(|data| data.as_ref()),
        Some(&b"Subject: hi"[..])
    );
}
