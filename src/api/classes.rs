//! `/internal-classes/` handle

use serde::{Deserialize, Serialize};

use super::client::{Auth, Request};
use super::{ApiClient, ApiError, Page};
use crate::forms::EnrollmentRequest;
use crate::schedule::InternalClass;

const BASE: &str = "/internal-classes";

/// Server acknowledgement of an enrollment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentReceipt {
    pub message: String,
    /// Outreach inquiry created for the enrollment
    #[serde(default)]
    pub inquiry_id: Option<u64>,
}

pub struct ClassesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ClassesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Active classes that still have seats
    pub async fn available(&self) -> Result<Vec<InternalClass>, ApiError> {
        let request = Request::get(format!("{}/available/", BASE));
        let page: Page<InternalClass> = self.client.call(request, Auth::Optional).await?;
        Ok(page.results)
    }

    pub async fn list(&self) -> Result<Page<InternalClass>, ApiError> {
        let request = Request::get(format!("{}/", BASE));
        self.client.call(request, Auth::Optional).await
    }

    pub async fn get(&self, id: u64) -> Result<InternalClass, ApiError> {
        let request = Request::get(format!("{}/{}/", BASE, id));
        self.client.call(request, Auth::Optional).await
    }

    pub async fn enroll(
        &self,
        id: u64,
        enrollment: &EnrollmentRequest,
    ) -> Result<EnrollmentReceipt, ApiError> {
        let request = Request::post(format!("{}/{}/enroll/", BASE, id)).json(enrollment)?;
        self.client.call(request, Auth::Optional).await
    }
}
