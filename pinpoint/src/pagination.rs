/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Continuation tokens for list operations.
//!
//! List operations return at most one page of results. A response that has more results carries
//! an opaque `NextToken`, which is passed back on the next request to fetch the following page.
//! The token is owned by the service and must not be interpreted.

/// A page of results from a list operation.
pub trait PaginatedResponse {
    type Item;

    /// The items in this page, in the order the service returned them.
    fn items(&self) -> &[Self::Item];

    /// The token to send to get the next page.
    fn next_token(&self) -> Option<&str>;

    /// Returns `true` if the service reported that more results are available.
    fn has_next_page(&self) -> bool {
        matches!(self.next_token(), Some(token) if !token.is_empty())
    }
}

/// A request for a list operation that accepts a continuation token.
pub trait PaginatedRequest: Sized {
    /// The continuation token currently set on the request.
    fn next_token(&self) -> Option<&str>;

    /// Returns a copy of this request that asks for the page identified by `token`.
    fn with_next_token(&self, token: impl Into<String>) -> Self;
}

/// Builds the request for the page that follows `response`.
///
/// Returns `None` once the last page has been reached.
pub fn next_page<Req, Resp>(request: &Req, response: &Resp) -> Option<Req>
where
    Req: PaginatedRequest,
    Resp: PaginatedResponse,
{
    if !response.has_next_page() {
        tracing::trace!("no further pages");
        return None;
    }
    response
        .next_token()
        .map(|token| request.with_next_token(token))
}

macro_rules! paginated_response {
    ($($response:ident => $item:ident),+ $(,)?) => {
        $(
            impl PaginatedResponse for crate::model::$response {
                type Item = crate::model::$item;

                fn items(&self) -> &[Self::Item] {
                    self.item().unwrap_or_default()
                }

                fn next_token(&self) -> Option<&str> {
                    crate::model::$response::next_token(self)
                }
            }
        )+
    };
}

macro_rules! paginated_request {
    ($($input:ident => $token:ident),+ $(,)?) => {
        $(
            impl PaginatedRequest for crate::input::$input {
                fn next_token(&self) -> Option<&str> {
                    crate::input::$input::$token(self)
                }

                fn with_next_token(&self, token: impl Into<String>) -> Self {
                    self.clone().into_builder().$token(token).build()
                }
            }
        )+
    };
}

paginated_response!(
    ApplicationsResponse => ApplicationResponse,
    CampaignsResponse => CampaignResponse,
    ActivitiesResponse => ActivityResponse,
    SegmentsResponse => SegmentResponse,
    ImportJobsResponse => ImportJobResponse,
    ExportJobsResponse => ExportJobResponse,
    JourneysResponse => JourneyResponse,
    TemplatesResponse => TemplateResponse,
);

paginated_request!(
    GetAppsInput => token,
    GetCampaignsInput => token,
    GetCampaignActivitiesInput => token,
    GetCampaignVersionsInput => token,
    GetSegmentsInput => token,
    GetSegmentVersionsInput => token,
    GetSegmentImportJobsInput => token,
    GetSegmentExportJobsInput => token,
    GetImportJobsInput => token,
    GetExportJobsInput => token,
    ListJourneysInput => token,
    ListTemplatesInput => next_token,
);

#[cfg(test)]
mod test {
    use super::{next_page, PaginatedRequest, PaginatedResponse};
    use crate::input::{GetCampaignsInput, ListTemplatesInput};
    use crate::model::{CampaignResponse, CampaignsResponse, TemplatesResponse};

    #[test]
    fn empty_token_is_last_page() {
        let page = CampaignsResponse::builder()
            .item(CampaignResponse::builder().id("one").build())
            .next_token("")
            .build();
        assert!(!page.has_next_page());
        assert_eq!(page.items().len(), 1);
    }

    #[test]
    fn missing_items_is_empty_page() {
        let page = TemplatesResponse::builder().build();
        assert!(page.items().is_empty());
        assert!(!page.has_next_page());
    }

    #[test]
    fn next_request_keeps_other_members() {
        let request = GetCampaignsInput::builder()
            .application_id("app")
            .page_size("25")
            .build();
        let page = CampaignsResponse::builder().next_token("abc123").build();

        let next = next_page(&request, &page).expect("more pages");
        assert_eq!(next.application_id(), Some("app"));
        assert_eq!(next.page_size(), Some("25"));
        assert_eq!(PaginatedRequest::next_token(&next), Some("abc123"));

        let last = CampaignsResponse::builder().build();
        assert!(next_page(&next, &last).is_none());
    }

    #[test]
    fn list_templates_uses_next_token_member() {
        let request = ListTemplatesInput::builder().prefix("welcome").build();
        let next = request.with_next_token("t-2");
        assert_eq!(next.prefix(), Some("welcome"));
        assert_eq!(next.next_token(), Some("t-2"));
    }
}
