/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::model::{
    APNSChannelRequest, Action, CampaignResponse, CampaignState, CampaignStatus, CampaignsResponse,
    EndpointLocation, Frequency, GCMMessage, QuietTime, Schedule, SetDimension, Template,
    WriteCampaignRequest,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn campaign(id: &str, status: CampaignStatus) -> CampaignResponse {
    CampaignResponse::builder()
        .id(id)
        .application_id("app-1")
        .name(format!("campaign {}", id))
        .state(CampaignState::builder().campaign_status(status).build())
        .version(1)
        .build()
}

#[test]
fn campaigns_page_keeps_order_and_token() {
    let first = campaign("c-1", CampaignStatus::Scheduled);
    let second = campaign("c-2", CampaignStatus::Completed);
    let page = CampaignsResponse::builder()
        .item(first.clone())
        .item(second.clone())
        .next_token("abc123")
        .build();

    assert_eq!(page.item(), Some(&[first, second][..]));
    assert_eq!(page.next_token(), Some("abc123"));
    assert_eq!(
        page.item()
            .and_then(|items| items[1].state())
            .and_then(|state| state.campaign_status()),
        Some(&CampaignStatus::Completed)
    );
}

#[test]
fn unset_members_are_absent() {
    let request = WriteCampaignRequest::builder().build();
    assert_eq!(request.name(), None);
    assert_eq!(request.tags(), None);
    assert_eq!(request.additional_treatments(), None);
    assert_eq!(request, WriteCampaignRequest::default());
}

#[test]
fn empty_list_is_not_absent() {
    let absent = SetDimension::builder().build();
    let empty = SetDimension::builder().set_values(Some(vec![])).build();
    assert_ne!(absent, empty);
    assert_eq!(empty.values(), Some(&[][..]));
}

#[test]
fn equal_records_hash_equal() {
    let build = || {
        WriteCampaignRequest::builder()
            .name("spring-sale")
            .holdout_percent(5)
            .tags("team", "growth")
            .tags("stage", "prod")
            .schedule(
                Schedule::builder()
                    .frequency(Frequency::Weekly)
                    .start_time("2021-03-01T00:00:00Z")
                    .build(),
            )
            .build()
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn changing_one_member_breaks_equality() {
    let base = campaign("c-1", CampaignStatus::Paused);
    let renamed = base.clone().into_builder().name("other").build();
    let restated = base
        .clone()
        .into_builder()
        .state(CampaignState::builder().campaign_status(CampaignStatus::Executing).build())
        .build();
    assert_ne!(base, renamed);
    assert_ne!(base, restated);
    assert_eq!(base.clone().into_builder().build(), base);
}

#[test]
fn appending_matches_setting_the_list() {
    let appended = SetDimension::builder()
        .values("ios")
        .values("android")
        .values("web")
        .build();
    let set = SetDimension::builder()
        .set_values(Some(vec!["ios".into(), "android".into(), "web".into()]))
        .build();
    assert_eq!(appended, set);
    assert_eq!(appended.values(), Some(&["ios".to_string(), "android".to_string(), "web".to_string()][..]));
}

#[test]
fn builder_getters_reflect_setters() {
    let builder = Template::builder().name("welcome");
    assert_eq!(builder.get_name(), &Some("welcome".to_string()));
    assert_eq!(builder.get_version(), &None);
}

#[test]
fn display_renders_present_members() {
    let template = Template::builder().name("welcome").version("3").build();
    assert_eq!(template.to_string(), "{Name: welcome, Version: 3}");

    let schedule = Schedule::builder()
        .frequency(Frequency::Daily)
        .is_local_time(true)
        .quiet_time(QuietTime::builder().start("22:00").end("08:00").build())
        .build();
    assert_eq!(
        schedule.to_string(),
        "{Frequency: DAILY, IsLocalTime: true, QuietTime: {End: 08:00, Start: 22:00}}"
    );
    assert_eq!(Schedule::builder().build().to_string(), "{}");
}

#[test]
fn sensitive_members_are_redacted() {
    let request = APNSChannelRequest::builder()
        .bundle_id("com.example.app")
        .certificate("-----BEGIN CERTIFICATE-----")
        .enabled(true)
        .build();
    assert_eq!(request.certificate(), Some("-----BEGIN CERTIFICATE-----"));
    assert_eq!(
        format!("{:?}", request),
        "APNSChannelRequest { bundle_id: Some(\"com.example.app\"), certificate: \"*** Sensitive Data Redacted ***\", \
         default_authentication_method: None, enabled: Some(true), private_key: \"*** Sensitive Data Redacted ***\", \
         team_id: None, token_key: \"*** Sensitive Data Redacted ***\", token_key_id: None }"
    );
    assert_eq!(
        request.to_string(),
        "{BundleId: com.example.app, Certificate: *** Sensitive Data Redacted ***, Enabled: true}"
    );
    let builder = request.into_builder();
    assert!(!format!("{:?}", builder).contains("BEGIN CERTIFICATE"));
}

#[test]
fn gcm_message_members() {
    let message = GCMMessage::builder()
        .action(Action::DeepLink)
        .body("Your order shipped")
        .collapse_key("orders")
        .data("orderId", "1234")
        .priority("high")
        .silent_push(false)
        .substitutions("name", vec!["Ana".to_string()])
        .time_to_live(3600)
        .url("https://example.com/orders/1234")
        .build();
    assert_eq!(message.action(), Some(&Action::DeepLink));
    assert_eq!(message.collapse_key(), Some("orders"));
    assert_eq!(message.data().and_then(|d| d.get("orderId")).map(String::as_str), Some("1234"));
    assert_eq!(message.silent_push(), Some(false));
    assert_eq!(message.time_to_live(), Some(3600));
    assert_eq!(message.title(), None);
    assert_eq!(
        message.substitutions().and_then(|s| s.get("name")),
        Some(&vec!["Ana".to_string()])
    );
}

proptest! {
    #[test]
    fn identical_construction_is_equal(city in "[a-zA-Z ]{0,24}", lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let build = || EndpointLocation::builder()
            .city(city.clone())
            .latitude(lat)
            .longitude(lon)
            .build();
        let (a, b) = (build(), build());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_city_is_not_equal(a in "[a-z]{1,12}", b in "[a-z]{1,12}") {
        prop_assume!(a != b);
        let left = EndpointLocation::builder().city(a).build();
        let right = EndpointLocation::builder().city(b).build();
        prop_assert_ne!(left, right);
    }

    #[test]
    fn different_coordinates_are_not_equal(
        city in "[a-z]{1,12}",
        lat in -90.0f64..90.0,
        lon in -180.0f64..180.0,
        delta in 0.001f64..1.0,
    ) {
        let base = EndpointLocation::builder()
            .city(city)
            .latitude(lat)
            .longitude(lon)
            .build();
        let moved_lat = base.clone().into_builder().latitude(lat + delta).build();
        let moved_lon = base.clone().into_builder().longitude(lon + delta).build();
        let unset_lat = base.clone().into_builder().set_latitude(None).build();
        prop_assert_ne!(&base, &moved_lat);
        prop_assert_ne!(&base, &moved_lon);
        prop_assert_ne!(&base, &unset_lat);
    }
}

#[test]
fn signed_zero_coordinates_are_equal() {
    let positive = EndpointLocation::builder().latitude(0.0).longitude(0.0).build();
    let negative = EndpointLocation::builder().latitude(-0.0).longitude(-0.0).build();
    assert_eq!(positive, negative);
    assert_eq!(hash_of(&positive), hash_of(&negative));

    let moved = positive.clone().into_builder().latitude(f64::MIN_POSITIVE).build();
    assert_ne!(positive, moved);
}
