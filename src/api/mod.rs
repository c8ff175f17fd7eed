//! AI Maker Lab REST client
//!
//! Typed access to the site backend. All paths are relative to the
//! configured base URL (default `http://localhost:8000/api/v1`).
//!
//! # Resources
//!
//! ## Product inquiries
//! - `GET /inquiries/`, `GET /inquiries/{id}/`
//! - `POST /inquiries/create/`, `PUT /inquiries/{id}/update/`, `DELETE /inquiries/{id}/delete/`
//!
//! ## Lesson inquiries
//! - Same layout under `/lessons/`
//!
//! ## Outreach inquiries
//! - `GET|POST /outreach-inquiries/`, `GET|PATCH|DELETE /outreach-inquiries/{id}/`
//! - `PATCH /outreach-inquiries/{id}/update_status/`
//! - `GET /outreach-inquiries/statistics/`, `GET /outreach-inquiries/recent/`
//!
//! ## Products
//! - `GET /products/`, `GET /products/{id}/`
//!
//! ## Auth
//! - `POST /auth/login/`, `/auth/register/`, `/auth/logout/`, `/auth/token/refresh/`
//! - `GET /auth/profile/`
//! - `POST /auth/google/login/`, `/auth/kakao/callback/`
//! - `POST /auth/forgot-password/`, `/auth/reset-password/`
//!
//! ## Internal classes
//! - `GET /internal-classes/`, `/internal-classes/available/`, `/internal-classes/{id}/`
//! - `POST /internal-classes/{id}/enroll/`
//!
//! # Example
//!
//! ```rust,ignore
//! use makerlab::api::{ApiClient, ApiClientConfig};
//! use makerlab::session::AuthContext;
//!
//! let client = ApiClient::new(ApiClientConfig::default(), AuthContext::in_memory())?;
//! let inquiries = client.inquiries().list().await?;
//! ```

mod auth;
mod classes;
mod client;
mod error;
mod inquiries;
pub mod oauth;
mod outreach;
mod page;
mod products;

pub use auth::{AuthApi, AuthStatus};
pub use classes::{ClassesApi, EnrollmentReceipt};
pub use client::{ApiClient, ApiClientConfig, Auth};
pub use error::ApiError;
pub use inquiries::{InquiriesApi, LessonsApi};
pub use outreach::{OutreachApi, OutreachFilter};
pub use page::Page;
pub use products::{sort_products, ProductFilter, ProductsApi};

impl ApiClient {
    pub fn inquiries(&self) -> InquiriesApi<'_> {
        InquiriesApi::new(self)
    }

    pub fn lessons(&self) -> LessonsApi<'_> {
        LessonsApi::new(self)
    }

    pub fn outreach(&self) -> OutreachApi<'_> {
        OutreachApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn classes(&self) -> ClassesApi<'_> {
        ClassesApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardError, BoardList, InquiryBoard};
    use crate::domain::{CourseType, InquiryType, OutreachStatus};
    use crate::forms::{
        EnrollmentRequest, InquiryDraft, LessonInquiryDraft, OutreachInquiryDraft,
        OutreachInquiryPatch, SubmitStatus,
    };
    use crate::session::{AuthContext, Session};
    use axum::extract::State;
    use axum::http::{HeaderMap, Method, StatusCode, Uri};
    use axum::Router;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Clone)]
    struct Recorded {
        method: String,
        path: String,
        query: Option<String>,
        authorization: Option<String>,
        request_id: Option<String>,
        body: String,
    }

    type Responder = Arc<dyn Fn(&Recorded) -> (u16, String) + Send + Sync>;

    #[derive(Clone)]
    struct FakeState {
        log: Arc<Mutex<Vec<Recorded>>>,
        responder: Responder,
    }

    async fn handle(
        State(state): State<FakeState>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, String) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let recorded = Recorded {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: header("authorization"),
            request_id: header("x-request-id"),
            body,
        };

        let (status, body) = (state.responder)(&recorded);
        state.log.lock().unwrap().push(recorded);
        (StatusCode::from_u16(status).unwrap(), body)
    }

    /// In-process backend that records every request it receives
    struct FakeBackend {
        base_url: String,
        log: Arc<Mutex<Vec<Recorded>>>,
    }

    impl FakeBackend {
        async fn start(
            responder: impl Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
        ) -> Self {
            let log = Arc::new(Mutex::new(Vec::new()));
            let state = FakeState {
                log: log.clone(),
                responder: Arc::new(responder),
            };
            let app = Router::new().fallback(handle).with_state(state);

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                base_url: format!("http://{}/api/v1", addr),
                log,
            }
        }

        fn client(&self, auth: AuthContext) -> ApiClient {
            let config = ApiClientConfig {
                base_url: format!("{}/", self.base_url),
                timeout: Duration::from_secs(5),
                user_agent: "makerlab-test".into(),
            };
            ApiClient::new(config, auth).unwrap()
        }

        fn requests(&self) -> Vec<Recorded> {
            self.log.lock().unwrap().clone()
        }
    }

    fn logged_in(access: &str, refresh: Option<&str>) -> AuthContext {
        let auth = AuthContext::in_memory();
        auth.establish(Session::new(access, refresh.map(str::to_string)))
            .unwrap();
        auth
    }

    fn inquiry_json(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "스마트 팜 100개 문의",
            "description": "대량 구매 가능할까요?",
            "inquiry_type": "product",
            "created_at": "2025-05-20T09:30:00+09:00",
            "updated_at": "2025-05-20T09:30:00+09:00",
            "requester_name": "김교사",
            "is_owner": true
        })
    }

    fn outreach_json(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "중학교 코딩 캠프",
            "organization_name": "서울중학교",
            "contact_person": "박선생",
            "course_type": "python",
            "student_count": 25,
            "preferred_date": "2025-07-10",
            "status": "접수대기",
            "created_at": "2025-06-01T10:00:00+09:00"
        })
    }

    fn outreach_draft() -> OutreachInquiryDraft {
        OutreachInquiryDraft {
            title: "중학교 코딩 캠프".into(),
            requester_name: "서울중학교 박선생".into(),
            phone: "02-123-4567".into(),
            email: "park@school.kr".into(),
            course_type: Some(CourseType::Python),
            student_count: 25,
            student_grade: "중학생".into(),
            preferred_date: "2025-07-10".into(),
            preferred_time: "14:00".into(),
            duration: "2시간".into(),
            location: "서울중학교 컴퓨터실".into(),
            message: "노트북은 학교에서 준비합니다".into(),
            ..Default::default()
        }
    }

    /// Body the create endpoint answers with: the submitted fields only
    fn outreach_create_echo() -> String {
        serde_json::json!({
            "title": "중학교 코딩 캠프",
            "organization_name": "서울중학교",
            "contact_person": "박선생",
            "phone": "02-123-4567",
            "email": "park@school.kr",
            "course_type": "python",
            "student_count": 25,
            "student_grade": "중학생",
            "preferred_date": "2025-07-10",
            "preferred_time": "14:00:00",
            "duration": "2시간",
            "location": "서울중학교 컴퓨터실",
            "message": "노트북은 학교에서 준비합니다",
            "budget": null,
            "special_requests": "",
            "equipment": []
        })
        .to_string()
    }

    fn class_json(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Python 기초 코딩 교육",
            "course_type": "python",
            "class_type": "오프라인",
            "instructor": "이강사",
            "target_grade": "중학생",
            "max_students": 20,
            "current_students": 12,
            "duration_hours": 16,
            "price": 200000
        })
    }

    fn body(recorded: &Recorded) -> serde_json::Value {
        serde_json::from_str(&recorded.body).unwrap()
    }

    #[tokio::test]
    async fn test_headers_and_paths() {
        let backend = FakeBackend::start(|_| {
            (200, serde_json::json!([inquiry_json(1), inquiry_json(2)]).to_string())
        })
        .await;
        let client = backend.client(logged_in("a1", None));

        let page = client.inquiries().list().await.unwrap();
        assert_eq!(page.count, 2);

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/v1/inquiries/");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer a1"));
        let request_id = requests[0].request_id.as_deref().unwrap();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }

    #[tokio::test]
    async fn test_anonymous_list_sends_no_token() {
        let backend = FakeBackend::start(|_| (200, "[]".into())).await;
        let client = backend.client(AuthContext::in_memory());

        let page = client.lessons().list().await.unwrap();
        assert!(page.is_empty());
        assert!(backend.requests()[0].authorization.is_none());
    }

    #[tokio::test]
    async fn test_auth_required_makes_no_call() {
        let backend = FakeBackend::start(|_| (201, inquiry_json(9).to_string())).await;
        let client = backend.client(AuthContext::in_memory());

        let draft = InquiryDraft {
            title: "견적".into(),
            description: "내용".into(),
            inquiry_type: InquiryType::Price,
            requester_name: "김교사".into(),
        };
        let err = client.inquiries().create(&draft).await.unwrap_err();

        assert!(matches!(err, ApiError::AuthRequired));
        assert!(err.requires_login());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_body() {
        let backend = FakeBackend::start(|_| (201, inquiry_json(9).to_string())).await;
        let client = backend.client(logged_in("a1", None));

        let draft = InquiryDraft {
            title: "  견적  ".into(),
            description: "내용".into(),
            inquiry_type: InquiryType::Delivery,
            requester_name: "김교사".into(),
        };
        let created = client.inquiries().create(&draft).await.unwrap();
        assert_eq!(created.id, 9);

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/inquiries/create/");
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body["title"], "견적");
        assert_eq!(body["inquiry_type"], "delivery");
    }

    #[tokio::test]
    async fn test_refresh_and_replay() {
        let backend = FakeBackend::start(|req| match req.path.as_str() {
            "/api/v1/auth/token/refresh/" => (200, r#"{"access": "fresh"}"#.into()),
            "/api/v1/auth/profile/" if req.authorization.as_deref() == Some("Bearer fresh") => (
                200,
                r#"{"status": "success", "user": {"id": 7, "email": "kim@school.kr"}}"#.into(),
            ),
            _ => (401, r#"{"detail": "Given token not valid"}"#.into()),
        })
        .await;
        let auth = logged_in("stale", Some("good"));
        let client = backend.client(auth.clone());

        let user = client.auth().profile().await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(auth.access_token().as_deref(), Some("fresh"));
        assert_eq!(auth.user().unwrap().email, "kim@school.kr");

        let requests = backend.requests();
        let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/api/v1/auth/profile/", "/api/v1/auth/token/refresh/", "/api/v1/auth/profile/"]
        );
        assert!(requests[1].authorization.is_none());
        let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        assert_eq!(body["refresh"], "good");
    }

    #[tokio::test]
    async fn test_failed_refresh_invalidates() {
        let backend = FakeBackend::start(|_| (401, r#"{"detail": "expired"}"#.into())).await;
        let auth = logged_in("stale", Some("revoked"));
        let client = backend.client(auth.clone());

        let err = client.inquiries().delete(3).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(!auth.is_authenticated());
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_check_status_logged_out_is_local() {
        let backend = FakeBackend::start(|_| (500, String::new())).await;
        let client = backend.client(AuthContext::in_memory());

        let status = client.auth().check_status().await.unwrap();
        assert!(!status.authenticated);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let backend = FakeBackend::start(|_| {
            (
                200,
                r#"{"tokens": {"access": "a", "refresh": "r"}, "user": {"email": "kim@school.kr", "name": "김선생"}}"#
                    .into(),
            )
        })
        .await;
        let auth = AuthContext::in_memory();
        let client = backend.client(auth.clone());

        client.auth().login(" kim@school.kr ", "pw12345678").await.unwrap();
        assert_eq!(auth.access_token().as_deref(), Some("a"));
        assert_eq!(auth.refresh_token().as_deref(), Some("r"));

        let requests = backend.requests();
        assert_eq!(requests[0].path, "/api/v1/auth/login/");
        assert!(requests[0].authorization.is_none());
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body["email"], "kim@school.kr");
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let backend = FakeBackend::start(|_| {
            (400, r#"{"error": "이메일 또는 비밀번호가 올바르지 않습니다."}"#.into())
        })
        .await;
        let auth = AuthContext::in_memory();
        let client = backend.client(auth.clone());

        let err = client.auth().login("kim@school.kr", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "이메일 또는 비밀번호가 올바르지 않습니다.");
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_always_invalidates() {
        let backend = FakeBackend::start(|_| (500, "boom".into())).await;
        let auth = logged_in("a", Some("r"));
        let client = backend.client(auth.clone());

        client.auth().logout().await;
        assert!(!auth.is_authenticated());

        let requests = backend.requests();
        assert_eq!(requests[0].path, "/api/v1/auth/logout/");
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body["token"], "r");
    }

    #[tokio::test]
    async fn test_product_detail_envelope() {
        let backend = FakeBackend::start(|_| {
            (
                200,
                serde_json::json!({
                    "status": "success",
                    "data": {
                        "id": 5,
                        "name": "스마트팜 만들기 키트",
                        "price": "57200.00",
                        "category": 3,
                        "status": "available"
                    }
                })
                .to_string(),
            )
        })
        .await;
        let client = backend.client(AuthContext::in_memory());

        let product = client.products().get(5).await.unwrap();
        assert_eq!(product.price_won(), 57_200);
        assert_eq!(backend.requests()[0].path, "/api/v1/products/5/");
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let backend = FakeBackend::start(|_| (200, "[]".into())).await;
        let client = backend.client(AuthContext::in_memory());

        let filter = OutreachFilter {
            status: Some(OutreachStatus::Reviewing),
            course_type: Some(CourseType::Arduino),
            search: Some("  ".into()),
            ordering: Some("-preferred_date".into()),
        };
        client.outreach().list_filtered(&filter).await.unwrap();
        client
            .products()
            .list(&ProductFilter {
                sort: Some(crate::domain::ProductSort::PriceDesc),
                page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = backend.requests();
        let query = requests[0].query.as_deref().unwrap();
        assert!(query.contains("course_type=arduino"));
        assert!(query.contains("ordering=-preferred_date"));
        assert!(query.contains("status=%EA%B2%80%ED%86%A0%EC%A4%91"));
        assert!(!query.contains("search"));
        assert_eq!(requests[1].query.as_deref(), Some("sort=price_desc&page=2"));
    }

    #[tokio::test]
    async fn test_update_status_body() {
        let backend = FakeBackend::start(|_| (400, r#"{"status": ["잘못된 상태입니다."]}"#.into())).await;
        let client = backend.client(logged_in("staff", None));

        let err = client
            .outreach()
            .update_status(4, OutreachStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "잘못된 상태입니다.");

        let requests = backend.requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].path, "/api/v1/outreach-inquiries/4/update_status/");
        assert_eq!(requests[0].body, r#"{"status":"확정"}"#);
    }

    #[tokio::test]
    async fn test_unavailable_backend() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ApiClientConfig {
            base_url: format!("http://{}/api/v1", addr),
            timeout: Duration::from_secs(5),
            user_agent: "makerlab-test".into(),
        };
        let client = ApiClient::new(config, AuthContext::in_memory()).unwrap();

        let err = client.products().list(&ProductFilter::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Unavailable));
        assert_eq!(err.user_message(), "서버에 연결할 수 없습니다.");
    }

    #[tokio::test]
    async fn test_outreach_create_accepts_echo_body() {
        let backend = FakeBackend::start(|_| (201, outreach_create_echo())).await;
        let client = backend.client(AuthContext::in_memory());

        let receipt = client.outreach().create(&outreach_draft()).await.unwrap();
        assert_eq!(receipt.title.as_deref(), Some("중학교 코딩 캠프"));
        assert_eq!(receipt.course_type, Some(CourseType::Python));
        assert!(receipt.id.is_none());

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/outreach-inquiries/");
        assert!(requests[0].authorization.is_none());
    }

    #[tokio::test]
    async fn test_outreach_create_with_empty_body() {
        let backend = FakeBackend::start(|_| (201, String::new())).await;
        let client = backend.client(AuthContext::in_memory());

        let receipt = client.outreach().create(&outreach_draft()).await.unwrap();
        assert_eq!(receipt, crate::domain::OutreachReceipt::default());
    }

    #[tokio::test]
    async fn test_outreach_submit_refetches_after_echo() {
        let backend = FakeBackend::start(|req| match req.method.as_str() {
            "POST" => (201, outreach_create_echo()),
            _ => (200, serde_json::json!([outreach_json(31)]).to_string()),
        })
        .await;
        let client = backend.client(AuthContext::in_memory());

        let mut board = InquiryBoard::new(client.outreach());
        board.submit(&outreach_draft(), std::time::Instant::now()).await.unwrap();

        assert!(matches!(board.submission().status(), SubmitStatus::Success(_)));
        assert_eq!(board.state().items().len(), 1);
        assert_eq!(board.state().items()[0].id, 31);

        let methods: Vec<String> = backend.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(methods, vec!["POST", "GET"]);
    }

    #[tokio::test]
    async fn test_update_paths() {
        let backend = FakeBackend::start(|req| {
            let mut row = inquiry_json(5);
            if req.path.starts_with("/api/v1/outreach-inquiries/") {
                row = outreach_json(5);
            } else if req.path.starts_with("/api/v1/lessons/") {
                row["inquiry_type"] = serde_json::json!("offline");
            }
            (200, row.to_string())
        })
        .await;
        let client = backend.client(logged_in("owner", None));

        let draft = InquiryDraft {
            title: " 배송 일정 문의 ".into(),
            description: "다음 주 도착 가능할까요?".into(),
            inquiry_type: InquiryType::Delivery,
            requester_name: "김교사".into(),
        };
        client.inquiries().update(5, &draft).await.unwrap();

        let lesson = LessonInquiryDraft {
            title: "방과후 수업".into(),
            description: "주 2회 가능할까요?".into(),
            requester_name: "김교사".into(),
            ..Default::default()
        };
        client.lessons().update(5, &lesson).await.unwrap();

        let patch = OutreachInquiryPatch {
            student_count: Some(30),
            ..Default::default()
        };
        client.outreach().update(5, &patch).await.unwrap();

        let requests = backend.requests();
        let calls: Vec<(&str, &str)> = requests
            .iter()
            .map(|r| (r.method.as_str(), r.path.as_str()))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("PUT", "/api/v1/inquiries/5/update/"),
                ("PUT", "/api/v1/lessons/5/update/"),
                ("PATCH", "/api/v1/outreach-inquiries/5/"),
            ]
        );
        assert!(requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer owner")));
        assert_eq!(body(&requests[0])["title"], "배송 일정 문의");
        assert_eq!(requests[2].body, r#"{"student_count":30}"#);
    }

    #[tokio::test]
    async fn test_updates_require_login() {
        let backend = FakeBackend::start(|_| (200, inquiry_json(5).to_string())).await;
        let client = backend.client(AuthContext::in_memory());

        let err = client
            .inquiries()
            .update(5, &InquiryDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AuthRequired));

        let err = client
            .lessons()
            .update(5, &LessonInquiryDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AuthRequired));

        let err = client
            .outreach()
            .update(5, &OutreachInquiryPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AuthRequired));

        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_board_edit_looks_up_then_updates() {
        let backend = FakeBackend::start(|req| match req.path.as_str() {
            "/api/v1/inquiries/7/" | "/api/v1/inquiries/7/update/" => {
                (200, inquiry_json(7).to_string())
            }
            _ => {
                let mut row = inquiry_json(8);
                row["is_owner"] = serde_json::json!(false);
                (200, row.to_string())
            }
        })
        .await;
        let client = backend.client(logged_in("owner", None));
        let board = InquiryBoard::new(client.inquiries());
        let gated = BoardList::new("/inquiries", true);

        board
            .edit(&gated, 7, |current| InquiryDraft {
                title: "수정된 제목".into(),
                description: current.description.clone(),
                inquiry_type: current.inquiry_type,
                requester_name: current.requester_name.clone(),
            })
            .await
            .unwrap();

        let err = board
            .edit(&gated, 8, |current| InquiryDraft {
                title: current.title.clone(),
                description: current.description.clone(),
                inquiry_type: current.inquiry_type,
                requester_name: current.requester_name.clone(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotOwner { id: 8 }));

        let requests = backend.requests();
        let calls: Vec<(&str, &str)> = requests
            .iter()
            .map(|r| (r.method.as_str(), r.path.as_str()))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("GET", "/api/v1/inquiries/7/"),
                ("PUT", "/api/v1/inquiries/7/update/"),
                ("GET", "/api/v1/inquiries/8/"),
            ]
        );
        assert_eq!(body(&requests[1])["title"], "수정된 제목");
    }

    #[tokio::test]
    async fn test_board_edit_logged_out_sends_nothing() {
        let backend = FakeBackend::start(|_| (200, inquiry_json(7).to_string())).await;
        let client = backend.client(AuthContext::in_memory());
        let board = InquiryBoard::new(client.inquiries());

        let gated = BoardList::new("/inquiries", true);
        let err = board.edit(&gated, 7, |_| InquiryDraft::default()).await.unwrap_err();
        assert!(matches!(err, BoardError::Api(ApiError::AuthRequired)));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_outreach_list_page_and_recent() {
        let backend = FakeBackend::start(|req| {
            let count = if req.path.ends_with("/recent/") { 7 } else { 2 };
            let rows: Vec<serde_json::Value> = (1..=count).map(outreach_json).collect();
            (200, serde_json::json!({ "count": 40, "results": rows }).to_string())
        })
        .await;
        let client = backend.client(logged_in("staff", None));

        let page = client.outreach().list_page(2, 5).await.unwrap();
        assert_eq!(page.count, 40);
        assert_eq!(page.results.len(), 2);

        let recent = client.outreach().recent().await.unwrap();
        assert_eq!(recent.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let requests = backend.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/v1/outreach-inquiries/");
        assert_eq!(requests[0].query.as_deref(), Some("page=2&page_size=5"));
        assert_eq!(requests[1].path, "/api/v1/outreach-inquiries/recent/");
        assert!(requests
            .iter()
            .all(|r| r.authorization.as_deref() == Some("Bearer staff")));
    }

    #[tokio::test]
    async fn test_classes_available_and_enroll() {
        let backend = FakeBackend::start(|req| match req.method.as_str() {
            "POST" => (
                201,
                r#"{"message": "수강 신청이 접수되었습니다.", "inquiry_id": 42}"#.into(),
            ),
            _ => (200, serde_json::json!([class_json(11)]).to_string()),
        })
        .await;
        let client = backend.client(logged_in("a1", None));

        let classes = client.classes().available().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].title, "Python 기초 코딩 교육");

        let request = EnrollmentRequest {
            requester_name: "김학부모".into(),
            phone: "010-1234-5678".into(),
            email: "parent@home.kr".into(),
            student_count: 2,
            ..Default::default()
        };
        let receipt = client.classes().enroll(11, &request).await.unwrap();
        assert_eq!(receipt.message, "수강 신청이 접수되었습니다.");
        assert_eq!(receipt.inquiry_id, Some(42));

        let requests = backend.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/v1/internal-classes/available/");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].path, "/api/v1/internal-classes/11/enroll/");
        assert_eq!(requests[1].authorization.as_deref(), Some("Bearer a1"));
        assert_eq!(body(&requests[1])["student_count"], 2);
    }

    #[tokio::test]
    async fn test_social_callbacks_establish_session() {
        let backend = FakeBackend::start(|req| match req.path.as_str() {
            "/api/v1/auth/kakao/callback/" => (
                200,
                r#"{"tokens": {"access": "kakao-a", "refresh": "kakao-r"}, "user": {"email": "kim@kakao.com"}}"#
                    .into(),
            ),
            _ => (200, r#"{"access": "google-a", "refresh": "google-r"}"#.into()),
        })
        .await;
        let auth = AuthContext::in_memory();
        let client = backend.client(auth.clone());

        client
            .auth()
            .kakao_callback("code-1", "http://localhost:3000/auth/kakao/callback")
            .await
            .unwrap();
        assert_eq!(auth.access_token().as_deref(), Some("kakao-a"));
        assert_eq!(auth.user().unwrap().email, "kim@kakao.com");

        client.auth().google_callback("id-token-1").await.unwrap();
        assert_eq!(auth.access_token().as_deref(), Some("google-a"));
        assert_eq!(auth.refresh_token().as_deref(), Some("google-r"));

        let requests = backend.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/auth/kakao/callback/");
        assert_eq!(body(&requests[0])["code"], "code-1");
        assert_eq!(
            body(&requests[0])["redirect_uri"],
            "http://localhost:3000/auth/kakao/callback"
        );
        assert_eq!(requests[1].path, "/api/v1/auth/google/login/");
        assert_eq!(body(&requests[1])["id_token"], "id-token-1");
        assert!(requests.iter().all(|r| r.authorization.is_none()));
    }

    #[tokio::test]
    async fn test_password_reset_requests() {
        let backend = FakeBackend::start(|_| (200, r#"{"message": "ok"}"#.into())).await;
        let client = backend.client(logged_in("a1", None));

        client.auth().request_password_reset(" kim@school.kr ").await.unwrap();
        client.auth().reset_password("reset-token", "newpass123").await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/auth/forgot-password/");
        assert_eq!(body(&requests[0])["email"], "kim@school.kr");
        assert_eq!(requests[1].path, "/api/v1/auth/reset-password/");
        assert_eq!(body(&requests[1])["token"], "reset-token");
        assert_eq!(body(&requests[1])["newPassword"], "newpass123");
        assert!(requests.iter().all(|r| r.authorization.is_none()));
    }

    #[tokio::test]
    async fn test_check_status_keeps_session_on_server_error() {
        let backend = FakeBackend::start(|_| (502, "Bad Gateway".into())).await;
        let auth = logged_in("a1", Some("r1"));
        let client = backend.client(auth.clone());

        let err = client.auth().check_status().await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_check_status_keeps_session_on_bad_body() {
        let backend = FakeBackend::start(|_| (200, "<html>maintenance</html>".into())).await;
        let auth = logged_in("a1", None);
        let client = backend.client(auth.clone());

        let err = client.auth().check_status().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_check_status_forbidden_logs_out() {
        let backend = FakeBackend::start(|_| (403, r#"{"detail": "권한 없음"}"#.into())).await;
        let auth = logged_in("a1", None);
        let client = backend.client(auth.clone());

        let status = client.auth().check_status().await.unwrap();
        assert!(!status.authenticated);
        assert!(!auth.is_authenticated());
    }
}
