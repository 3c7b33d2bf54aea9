/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::input::GetCampaignsInput;
use pinpoint::model::{CampaignResponse, CampaignsResponse};
use pinpoint::pagination::{next_page, PaginatedRequest, PaginatedResponse};
use pretty_assertions::assert_eq;

/// Serves three pages of two campaigns, keyed by the request token.
fn list_campaigns(request: &GetCampaignsInput) -> CampaignsResponse {
    let (ids, token): (&[&str], Option<&str>) = match PaginatedRequest::next_token(request) {
        None => (&["c-1", "c-2"], Some("page-2")),
        Some("page-2") => (&["c-3", "c-4"], Some("page-3")),
        Some("page-3") => (&["c-5"], None),
        Some(other) => panic!("unexpected token {}", other),
    };
    let mut builder = CampaignsResponse::builder();
    for id in ids {
        builder = builder.item(CampaignResponse::builder().id(*id).build());
    }
    builder.set_next_token(token.map(str::to_string)).build()
}

#[test]
fn walks_every_page() {
    let mut request = GetCampaignsInput::builder()
        .application_id("app-1")
        .page_size("2")
        .build();
    let mut seen = Vec::new();
    let mut pages = 0;
    loop {
        let page = list_campaigns(&request);
        pages += 1;
        seen.extend(page.items().iter().filter_map(|c| c.id()).map(str::to_string));
        match next_page(&request, &page) {
            Some(next) => request = next,
            None => break,
        }
    }
    assert_eq!(pages, 3);
    assert_eq!(seen, vec!["c-1", "c-2", "c-3", "c-4", "c-5"]);
    assert_eq!(request.application_id(), Some("app-1"));
}

#[test]
fn last_page_has_no_token() {
    let page = CampaignsResponse::builder()
        .item(CampaignResponse::builder().id("only").build())
        .build();
    assert!(!page.has_next_page());
    assert_eq!(PaginatedResponse::next_token(&page), None);
}
