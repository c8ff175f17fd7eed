//! Product and lesson inquiry boards
//!
//! Both boards share one URL layout under their own prefix:
//!
//! - `GET    {prefix}/`              list (anyone)
//! - `GET    {prefix}/{id}/`         detail (403 for non-owners)
//! - `POST   {prefix}/create/`       create (login required)
//! - `PUT    {prefix}/{id}/update/`  update (owner)
//! - `DELETE {prefix}/{id}/delete/`  delete (owner)

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::{Auth, Request};
use super::{ApiClient, ApiError, Page};
use crate::domain::{Inquiry, LessonInquiry};
use crate::forms::{InquiryDraft, LessonInquiryDraft};

#[derive(Clone, Copy)]
struct BoardEndpoint<'a> {
    client: &'a ApiClient,
    prefix: &'static str,
}

impl<'a> BoardEndpoint<'a> {
    async fn list<T: DeserializeOwned>(&self) -> Result<Page<T>, ApiError> {
        let request = Request::get(format!("{}/", self.prefix));
        self.client.call(request, Auth::Optional).await
    }

    async fn get<T: DeserializeOwned>(&self, id: u64) -> Result<T, ApiError> {
        let request = Request::get(format!("{}/{}/", self.prefix, id));
        self.client.call(request, Auth::Optional).await
    }

    async fn create<T: DeserializeOwned, B: Serialize>(&self, body: &B) -> Result<T, ApiError> {
        let request = Request::post(format!("{}/create/", self.prefix)).json(body)?;
        self.client.call(request, Auth::Required).await
    }

    async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        id: u64,
        body: &B,
    ) -> Result<T, ApiError> {
        let request =
            Request::new(Method::PUT, format!("{}/{}/update/", self.prefix, id)).json(body)?;
        self.client.call(request, Auth::Required).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let request = Request::new(Method::DELETE, format!("{}/{}/delete/", self.prefix, id));
        self.client.call_empty(request, Auth::Required).await
    }
}

/// `/inquiries/` handle
pub struct InquiriesApi<'a> {
    endpoint: BoardEndpoint<'a>,
}

impl<'a> InquiriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            endpoint: BoardEndpoint {
                client,
                prefix: "/inquiries",
            },
        }
    }

    pub(crate) fn client(&self) -> &'a ApiClient {
        self.endpoint.client
    }

    pub async fn list(&self) -> Result<Page<Inquiry>, ApiError> {
        self.endpoint.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Inquiry, ApiError> {
        self.endpoint.get(id).await
    }

    pub async fn create(&self, draft: &InquiryDraft) -> Result<Inquiry, ApiError> {
        self.endpoint.create(&draft.normalized()).await
    }

    pub async fn update(&self, id: u64, draft: &InquiryDraft) -> Result<Inquiry, ApiError> {
        self.endpoint.update(id, &draft.normalized()).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.endpoint.delete(id).await
    }
}

/// `/lessons/` handle
pub struct LessonsApi<'a> {
    endpoint: BoardEndpoint<'a>,
}

impl<'a> LessonsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            endpoint: BoardEndpoint {
                client,
                prefix: "/lessons",
            },
        }
    }

    pub(crate) fn client(&self) -> &'a ApiClient {
        self.endpoint.client
    }

    pub async fn list(&self) -> Result<Page<LessonInquiry>, ApiError> {
        self.endpoint.list().await
    }

    pub async fn get(&self, id: u64) -> Result<LessonInquiry, ApiError> {
        self.endpoint.get(id).await
    }

    pub async fn create(&self, draft: &LessonInquiryDraft) -> Result<LessonInquiry, ApiError> {
        self.endpoint.create(&draft.normalized()).await
    }

    pub async fn update(
        &self,
        id: u64,
        draft: &LessonInquiryDraft,
    ) -> Result<LessonInquiry, ApiError> {
        self.endpoint.update(id, &draft.normalized()).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.endpoint.delete(id).await
    }
}
