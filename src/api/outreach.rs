//! `/outreach-inquiries/` handle (DRF viewset)

use reqwest::Method;

use super::client::{Auth, Request};
use super::{ApiClient, ApiError, Page};
use crate::domain::{
    CourseType, OutreachInquiry, OutreachReceipt, OutreachStatistics, OutreachStatus,
};
use crate::forms::{OutreachInquiryDraft, OutreachInquiryPatch};

const BASE: &str = "/outreach-inquiries";

/// Server-side filters accepted by the list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutreachFilter {
    pub status: Option<OutreachStatus>,
    pub course_type: Option<CourseType>,
    /// Matches title, organization name and contact person
    pub search: Option<String>,
    /// `created_at`, `preferred_date` or `student_count`, `-` for descending
    pub ordering: Option<String>,
}

impl OutreachFilter {
    fn apply(&self, request: Request) -> Request {
        request
            .query_opt("status", self.status.map(|s| s.label()))
            .query_opt("course_type", self.course_type.as_ref().map(|c| c.code()))
            .query_opt("search", self.search.as_deref().filter(|s| !s.trim().is_empty()))
            .query_opt("ordering", self.ordering.as_deref())
    }
}

pub struct OutreachApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OutreachApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub async fn list(&self) -> Result<Page<OutreachInquiry>, ApiError> {
        self.list_filtered(&OutreachFilter::default()).await
    }

    pub async fn list_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<OutreachInquiry>, ApiError> {
        let request = Request::get(format!("{}/", BASE))
            .query("page", page.max(1))
            .query("page_size", page_size.max(1));
        self.client.call(request, Auth::Optional).await
    }

    pub async fn list_filtered(
        &self,
        filter: &OutreachFilter,
    ) -> Result<Page<OutreachInquiry>, ApiError> {
        let request = filter.apply(Request::get(format!("{}/", BASE)));
        self.client.call(request, Auth::Optional).await
    }

    pub async fn get(&self, id: u64) -> Result<OutreachInquiry, ApiError> {
        let request = Request::get(format!("{}/{}/", BASE, id));
        self.client.call(request, Auth::Optional).await
    }

    /// Anonymous submissions are accepted
    ///
    /// The server stores the row before answering, so a 2xx is a success
    /// whatever its body holds. Refetch the list to see the stored record.
    pub async fn create(&self, draft: &OutreachInquiryDraft) -> Result<OutreachReceipt, ApiError> {
        let request = Request::post(format!("{}/", BASE)).json(&draft.normalized())?;
        self.client.call_lenient(request, Auth::Optional).await
    }

    pub async fn update(
        &self,
        id: u64,
        patch: &OutreachInquiryPatch,
    ) -> Result<OutreachInquiry, ApiError> {
        let request = Request::new(Method::PATCH, format!("{}/{}/", BASE, id)).json(patch)?;
        self.client.call(request, Auth::Required).await
    }

    /// Staff-only workflow step; the server enforces the transition rules
    pub async fn update_status(
        &self,
        id: u64,
        status: OutreachStatus,
    ) -> Result<OutreachInquiry, ApiError> {
        let request = Request::new(Method::PATCH, format!("{}/{}/update_status/", BASE, id))
            .json(&serde_json::json!({ "status": status }))?;
        self.client.call(request, Auth::Required).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let request = Request::new(Method::DELETE, format!("{}/{}/", BASE, id));
        self.client.call_empty(request, Auth::Required).await
    }

    pub async fn statistics(&self) -> Result<OutreachStatistics, ApiError> {
        let request = Request::get(format!("{}/statistics/", BASE));
        self.client.call(request, Auth::Optional).await
    }

    /// The five most recent inquiries
    pub async fn recent(&self) -> Result<Vec<OutreachInquiry>, ApiError> {
        let request = Request::get(format!("{}/recent/", BASE));
        let page: Page<OutreachInquiry> = self.client.call(request, Auth::Optional).await?;
        Ok(page.results.into_iter().take(5).collect())
    }
}
